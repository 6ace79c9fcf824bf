//! # Sift Router
//!
//! Extracts named parameters from a slash-delimited path given a pattern
//! template such as `users/:id/posts/:post`.
//!
//! - Static segments (`users`) must match the path segment exactly
//! - Parameter segments (`:id`) capture whatever occupies that position
//! - Paths longer than the pattern are accepted, trailing segments are ignored
//! - Paths shorter than the pattern never match
//!
//! Patterns are classified once into [`Segment`]s when parsed, so a
//! [`Pattern`] can be kept around and matched against many paths.
//!
//! ## Example
//!
//! ```
//! use sift_router::{match_path, Pattern};
//!
//! let params = match_path("users/42/posts/7", "users/:id/posts/:post");
//! assert_eq!(params.get("id"), Some(&"42".to_string()));
//! assert_eq!(params.get("post"), Some(&"7".to_string()));
//!
//! // Compile once, distinguish "no match" from "matched without params"
//! let pattern = Pattern::parse("health");
//! assert_eq!(pattern.captures("health").map(|p| p.len()), Some(0));
//! assert_eq!(pattern.captures("status"), None);
//! ```

use indexmap::IndexMap;

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
pub mod path;
pub mod pattern;

pub use config::{MatcherConfig, DEFAULT_PARAM_MARKER};
pub use path::{segment_count, split_segments};
pub use pattern::{classify_segment, Pattern, Segment};

// ============================================================================
// Core Types
// ============================================================================

/// Parameters captured from a path, keyed by name
///
/// Keys keep the left-to-right order in which they appear in the pattern.
pub type Params = IndexMap<String, String>;

// ============================================================================
// Matching Entry Points
// ============================================================================

/// Matches `path` against `pattern` and returns the captured parameters
///
/// An empty map means either "no match" or "matched a pattern without
/// parameters". Use [`Pattern::captures`] when the two must be told apart.
///
/// # Examples
///
/// ```
/// use sift_router::match_path;
///
/// let pattern = "staticOne/:paramOne/staticTwo/staticThree/:paramTwo";
///
/// let params = match_path("staticOne/one/staticTwo/staticThree/two", pattern);
/// assert_eq!(params.get("paramOne").map(String::as_str), Some("one"));
/// assert_eq!(params.get("paramTwo").map(String::as_str), Some("two"));
///
/// // Static mismatch
/// assert!(match_path("staticZero/one/staticTwo/staticThree/two", pattern).is_empty());
///
/// // Path shorter than the pattern
/// assert!(match_path("staticOne/one", pattern).is_empty());
/// ```
pub fn match_path(path: &str, pattern: &str) -> Params {
    Pattern::parse(pattern).matches(path)
}

/// Matches `path` against `pattern` using a custom parameter marker
///
/// # Examples
///
/// ```
/// use sift_router::{match_path_with, MatcherConfig};
///
/// let config = MatcherConfig::default().with_marker('$');
/// let params = match_path_with("users/42", "users/$id", &config);
/// assert_eq!(params.get("id").map(String::as_str), Some("42"));
/// ```
pub fn match_path_with(path: &str, pattern: &str, config: &MatcherConfig) -> Params {
    Pattern::parse_with(pattern, config).matches(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_path_keeps_pattern_order() {
        let params = match_path("a/1/b/2/c/3", "a/:z/b/:y/c/:x");
        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_match_path_with_default_config_equals_match_path() {
        let config = MatcherConfig::default();
        assert_eq!(
            match_path_with("users/7", "users/:id", &config),
            match_path("users/7", "users/:id")
        );
    }

    #[test]
    fn test_match_path_with_custom_marker_treats_colon_as_static() {
        let config = MatcherConfig::default().with_marker('{');
        assert!(match_path_with("users/7", "users/:id", &config).is_empty());
        assert_eq!(
            match_path_with("users/:id", "users/:id", &config).len(),
            0
        );
    }
}
