//! Segment splitting for paths and patterns
//!
//! Both sides are split on `/` with no further normalization: a leading
//! slash yields a leading empty segment and an empty string is a single
//! empty segment. Callers that want `/users/1` and `users/1` to agree must
//! write the pattern the same way as the path.

use std::str::Split;

/// Segment separator
pub const SEPARATOR: char = '/';

/// Splits a path or pattern into its segments (lazy, zero-copy)
///
/// # Examples
///
/// ```
/// use sift_router::path::split_segments;
///
/// let segments: Vec<&str> = split_segments("users/42").collect();
/// assert_eq!(segments, vec!["users", "42"]);
///
/// let segments: Vec<&str> = split_segments("").collect();
/// assert_eq!(segments, vec![""]);
/// ```
pub fn split_segments(path: &str) -> Split<'_, char> {
    path.split(SEPARATOR)
}

/// Number of segments `path` splits into
///
/// Always at least 1.
pub fn segment_count(path: &str) -> usize {
    path.matches(SEPARATOR).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_leading_slash() {
        let segments: Vec<&str> = split_segments("/about").collect();
        assert_eq!(segments, vec!["", "about"]);
    }

    #[test]
    fn test_split_keeps_empty_segments() {
        let segments: Vec<&str> = split_segments("a//b/").collect();
        assert_eq!(segments, vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_segment_count_agrees_with_split() {
        for path in ["", "/", "a", "a/b", "/a/b/", "a//b"] {
            assert_eq!(segment_count(path), split_segments(path).count(), "{path}");
        }
    }
}
