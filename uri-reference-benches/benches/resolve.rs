use criterion::{criterion_group, criterion_main, Criterion};

use uri_reference::types::IriReference;

pub fn criterion_benchmark(c: &mut Criterion) {
    let base = IriReference::from_string("https://sub.example.com/foo1/foo2/foo3/foo4/foo5")
        .expect("always splittable");
    let rel = IriReference::from_string(concat!(
        "bar1/bar2/bar3/../bar4/../../bar5/bar6/bar7/../../../../..",
        "/bar8/../../../bar9/././././././bar10/bar11",
    ))
    .expect("always splittable");

    c.bench_function("resolve", |b| {
        b.iter(|| {
            rel.resolve_with(&base, true)
                .expect("the base has a scheme")
        })
    });

    c.bench_function("resolve and serialize", |b| {
        b.iter(|| {
            rel.resolve_with(&base, true)
                .expect("the base has a scheme")
                .unsplit()
        })
    });

    c.bench_function("normalize", |b| {
        let iri = IriReference::from_string(
            "HTTPS://Sub.EXAMPLE.com/%7efoo/./bar/../%c3%a9?%41=%3d#%7E",
        )
        .expect("always splittable");
        b.iter(|| iri.normalize());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
