use serde::{Deserialize, Serialize};

/// Marker that introduces a parameter segment (`:id`)
pub const DEFAULT_PARAM_MARKER: char = ':';

/// Pattern parsing options
///
/// Deserializes from the `[router]` table of a config file:
///
/// ```
/// use sift_router::MatcherConfig;
///
/// let config: MatcherConfig = toml::from_str(r#"param_marker = "$""#).unwrap();
/// assert_eq!(config.param_marker, '$');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// First character of a parameter segment
    pub param_marker: char,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            param_marker: DEFAULT_PARAM_MARKER,
        }
    }
}

impl MatcherConfig {
    /// Returns a copy using `marker` for parameter segments
    pub fn with_marker(mut self, marker: char) -> Self {
        self.param_marker = marker;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker_is_colon() {
        assert_eq!(MatcherConfig::default().param_marker, ':');
    }

    #[test]
    fn test_empty_table_uses_defaults() {
        let config: MatcherConfig = toml::from_str("").unwrap();
        assert_eq!(config, MatcherConfig::default());
    }
}
