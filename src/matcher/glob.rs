// src/matcher/glob.rs

//! Segment-wise wildcard matching for compiled rules.
//!
//! `*` matches any run of characters within a segment, `?` exactly one
//! character, and a segment consisting of `**` matches across segments.
//! Everything else is literal.

/// Matches a slice of pattern segments against a slice of path segments.
///
/// A `**` segment matches zero or more path segments, except in the terminal
/// position where it must consume at least one (so `vendor/**` matches the
/// contents of `vendor` but not `vendor` itself, as git does).
pub(super) fn match_segments<S: AsRef<str>>(pattern: &[S], path: &[&str]) -> bool {
    match pattern.first().map(AsRef::as_ref) {
        None => path.is_empty(),
        Some("**") => {
            if pattern.len() == 1 {
                return !path.is_empty();
            }
            (0..=path.len()).any(|i| match_segments(&pattern[1..], &path[i..]))
        }
        Some(first) => match path.first() {
            Some(&segment) => {
                match_segment(first, segment) && match_segments(&pattern[1..], &path[1..])
            }
            None => false,
        },
    }
}

/// Matches a single pattern segment against a single path segment.
fn match_segment(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    match_chars(&pattern, &text)
}

fn match_chars(pattern: &[char], text: &[char]) -> bool {
    match pattern.first() {
        None => text.is_empty(),
        Some('*') => {
            // Either the star matches nothing, or it consumes one more char.
            match_chars(&pattern[1..], text)
                || (!text.is_empty() && match_chars(pattern, &text[1..]))
        }
        Some('?') => !text.is_empty() && match_chars(&pattern[1..], &text[1..]),
        Some(&c) => text.first() == Some(&c) && match_chars(&pattern[1..], &text[1..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(pattern: &str) -> Vec<String> {
        pattern.split('/').map(str::to_string).collect()
    }

    #[test]
    fn test_literal_segment() {
        assert!(match_segment("main.rs", "main.rs"));
        assert!(!match_segment("main.rs", "main.r"));
        assert!(!match_segment("main.rs", "Main.rs"));
    }

    #[test]
    fn test_star_within_segment() {
        assert!(match_segment("*.rs", "main.rs"));
        assert!(match_segment("ma*", "main.rs"));
        assert!(match_segment("*", "anything"));
        assert!(match_segment("*", ""));
        assert!(!match_segment("*.rs", "main.go"));
    }

    #[test]
    fn test_consecutive_stars_within_segment() {
        // "a**b" inside one segment degenerates to "a*b".
        assert!(match_segment("a**b", "ab"));
        assert!(match_segment("a**b", "axyzb"));
        assert!(!match_segment("a**b", "ac"));
    }

    #[test]
    fn test_question_mark() {
        assert!(match_segment("?.rs", "a.rs"));
        assert!(!match_segment("?.rs", "ab.rs"));
        assert!(!match_segment("?", ""));
    }

    #[test]
    fn test_question_mark_is_one_character_not_one_byte() {
        assert!(match_segment("?.rs", "é.rs"));
    }

    #[test]
    fn test_multi_segment_literal() {
        assert!(match_segments(&segs("a/b/c"), &["a", "b", "c"]));
        assert!(!match_segments(&segs("a/b"), &["a", "b", "c"]));
        assert!(!match_segments(&segs("a/b/c"), &["a", "b"]));
    }

    #[test]
    fn test_double_star_leading() {
        assert!(match_segments(&segs("**/c"), &["c"]));
        assert!(match_segments(&segs("**/c"), &["a", "b", "c"]));
        assert!(!match_segments(&segs("**/c"), &["a", "b"]));
    }

    #[test]
    fn test_double_star_terminal_requires_content() {
        assert!(match_segments(&segs("a/**"), &["a", "b"]));
        assert!(match_segments(&segs("a/**"), &["a", "b", "c"]));
        assert!(!match_segments(&segs("a/**"), &["a"]));
    }

    #[test]
    fn test_double_star_middle_matches_zero() {
        assert!(match_segments(&segs("a/**/b"), &["a", "b"]));
        assert!(match_segments(&segs("a/**/b"), &["a", "x", "b"]));
    }

    #[test]
    fn test_mixed_wildcards_across_segments() {
        assert!(match_segments(&segs("src/**/*.rs"), &["src", "main.rs"]));
        assert!(match_segments(
            &segs("src/**/*.rs"),
            &["src", "a", "b", "mod.rs"]
        ));
        assert!(!match_segments(&segs("src/**/*.rs"), &["src"]));
    }
}
