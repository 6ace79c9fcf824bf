//! Pattern parsing and matching
//!
//! A pattern is classified once into typed [`Segment`]s, so matching never
//! re-inspects marker prefixes. Matching is a single left-to-right walk over
//! the pattern's segments.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::config::MatcherConfig;
use crate::path::{segment_count, split_segments, SEPARATOR};
use crate::Params;

/// A single classified pattern segment
///
/// # Examples
///
/// ```
/// use sift_router::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("users", ':'), Segment::Static("users".to_string()));
/// assert_eq!(classify_segment(":id", ':'), Segment::Param("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text that must equal the path segment
    Static(String),
    /// Named capture, accepts any path segment
    Param(String),
}

impl Segment {
    /// Parameter name, if this is a parameter segment
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Param(name) => Some(name),
            Segment::Static(_) => None,
        }
    }

    /// Whether this segment accepts `value` at its position
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Segment::Param(_) => true,
            Segment::Static(literal) => literal == value,
        }
    }
}

/// Classifies one raw pattern segment (pure function)
///
/// A segment starting with `marker` is a parameter named by the rest of the
/// segment. The marker alone yields a parameter with an empty name.
pub fn classify_segment(segment: &str, marker: char) -> Segment {
    segment
        .strip_prefix(marker)
        .map(|name| Segment::Param(name.to_string()))
        .unwrap_or_else(|| Segment::Static(segment.to_string()))
}

/// A compiled route pattern
///
/// # Examples
///
/// ```
/// use sift_router::Pattern;
///
/// let pattern = Pattern::parse("users/:id/tabs/:tab");
/// assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id", "tab"]);
///
/// let params = pattern.matches("users/42/tabs/billing/extra");
/// assert_eq!(params.get("tab").map(String::as_str), Some("billing"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
    marker: char,
}

impl Pattern {
    /// Parses a pattern using the default `:` marker
    pub fn parse(pattern: &str) -> Self {
        Self::parse_with(pattern, &MatcherConfig::default())
    }

    /// Parses a pattern using the marker from `config`
    pub fn parse_with(pattern: &str, config: &MatcherConfig) -> Self {
        let segments = split_segments(pattern)
            .map(|segment| classify_segment(segment, config.param_marker))
            .collect();

        Self {
            segments,
            marker: config.param_marker,
        }
    }

    /// Classified segments in pattern order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in left-to-right order
    pub fn param_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(Segment::param_name)
    }

    /// Whether the pattern declares any parameter
    pub fn has_params(&self) -> bool {
        self.param_names().next().is_some()
    }

    /// Matches `path`, telling "no match" apart from "no parameters"
    ///
    /// Returns `None` when the path has fewer segments than the pattern or a
    /// static segment differs. Bindings collected before a static mismatch
    /// are dropped. Trailing path segments beyond the pattern are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_router::Pattern;
    ///
    /// let pattern = Pattern::parse("users/:id");
    /// assert!(pattern.captures("users").is_none());
    /// assert!(pattern.captures("teams/1").is_none());
    /// assert_eq!(pattern.captures("users/1").unwrap()["id"], "1");
    /// ```
    pub fn captures(&self, path: &str) -> Option<Params> {
        let available = segment_count(path);
        if available < self.segments.len() {
            tracing::trace!(
                path,
                available,
                required = self.segments.len(),
                "path shorter than pattern"
            );
            return None;
        }

        let mut params = Params::new();
        for (index, (segment, value)) in self.segments.iter().zip(split_segments(path)).enumerate() {
            match segment {
                Segment::Param(name) => {
                    params.insert(name.clone(), value.to_string());
                }
                Segment::Static(literal) if literal == value => {}
                Segment::Static(literal) => {
                    tracing::trace!(
                        path,
                        index,
                        expected = literal.as_str(),
                        found = value,
                        "static segment mismatch"
                    );
                    return None;
                }
            }
        }

        Some(params)
    }

    /// Matches `path`, collapsing "no match" into an empty map
    pub fn matches(&self, path: &str) -> Params {
        self.captures(path).unwrap_or_default()
    }

    /// Whether `path` satisfies the pattern at all
    pub fn is_match(&self, path: &str) -> bool {
        segment_count(path) >= self.segments.len()
            && self
                .segments
                .iter()
                .zip(split_segments(path))
                .all(|(segment, value)| segment.accepts(value))
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(pattern))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            match segment {
                Segment::Static(literal) => write!(f, "{}", literal)?,
                Segment::Param(name) => write!(f, "{}{}", self.marker, name)?,
            }
        }
        Ok(())
    }
}
