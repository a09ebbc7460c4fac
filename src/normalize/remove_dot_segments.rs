//! `remove_dot_segments` algorithm described in [RFC 3986 5.2.4].
//!
//! [RFC 3986 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

/// Removes `.` and `..` segments from the path.
///
/// The input buffer is consumed from the head and the output buffer grows at
/// the tail, step by step as the RFC describes.
#[must_use]
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let mut output = String::with_capacity(path.len());
    let mut input: &str = path;

    while !input.is_empty() {
        // A: drop a leading `../` or `./`.
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
            continue;
        }
        if let Some(rest) = input.strip_prefix("./") {
            input = rest;
            continue;
        }
        // B: replace a leading `/./` or `/.` (complete segment) with `/`.
        if input.starts_with("/./") {
            input = &input[2..];
            continue;
        }
        if input == "/." {
            input = "/";
            continue;
        }
        // C: replace a leading `/../` or `/..` (complete segment) with `/`,
        // and drop the last segment of the output.
        if input.starts_with("/../") {
            input = &input[3..];
            pop_last_segment(&mut output);
            continue;
        }
        if input == "/.." {
            input = "/";
            pop_last_segment(&mut output);
            continue;
        }
        // D: a lone `.` or `..` is dropped.
        if input == "." || input == ".." {
            break;
        }
        // E: move the first segment, with its leading slash if any.
        let segment_end = memchr::memchr(b'/', &input.as_bytes()[1..])
            .map_or(input.len(), |pos| pos + 1);
        let (segment, rest) = input.split_at(segment_end);
        output.push_str(segment);
        input = rest;
    }

    output
}

/// Removes the last segment and its preceding slash (if any) from the output.
#[inline]
fn pop_last_segment(output: &mut String) {
    let last_slash = memchr::memrchr(b'/', output.as_bytes()).unwrap_or(0);
    output.truncate(last_slash);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3986_examples() {
        assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
        assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
    }

    #[test]
    fn complete_segments_only() {
        assert_eq!(remove_dot_segments("/a/.b/..c/"), "/a/.b/..c/");
        assert_eq!(remove_dot_segments("/a/b/."), "/a/b/");
        assert_eq!(remove_dot_segments("/a/b/.."), "/a/");
    }

    #[test]
    fn above_root() {
        assert_eq!(remove_dot_segments("/../../g"), "/g");
        assert_eq!(remove_dot_segments("/.."), "/");
        assert_eq!(remove_dot_segments("../g"), "g");
        assert_eq!(remove_dot_segments(".."), "");
        assert_eq!(remove_dot_segments("."), "");
    }

    #[test]
    fn no_dot_segments() {
        for path in ["", "/", "//", "a", "/a/b/c", "a//b", "/\u{3044}/\u{3046}"] {
            assert_eq!(remove_dot_segments(path), path, "{path:?}");
        }
    }
}
