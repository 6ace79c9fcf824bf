use anyhow::Result;
use colored::Colorize;
use sift_router::{MatcherConfig, Params, Pattern};

use super::to_json;

/// Match `path` against `pattern`
///
/// Returns `None` only in strict mode when the path does not match.
pub fn run(path: &str, pattern: &str, config: &MatcherConfig, strict: bool) -> Option<Params> {
    let pattern = Pattern::parse_with(pattern, config);
    tracing::debug!("Matching {:?} against {}", path, pattern);

    if strict {
        pattern.captures(path)
    } else {
        Some(pattern.matches(path))
    }
}

pub fn execute(
    path: &str,
    pattern: &str,
    config: &MatcherConfig,
    strict: bool,
    pretty: bool,
) -> Result<bool> {
    match run(path, pattern, config, strict) {
        Some(params) => {
            println!("{}", to_json(&params, pretty)?);
            Ok(true)
        }
        None => {
            eprintln!("{} {} does not match {}", "✗".red(), path.bold(), pattern.cyan());
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lenient_mismatch_is_empty_params() {
        let params = run("teams/1", "users/:id", &MatcherConfig::default(), false);
        assert_eq!(params, Some(Params::new()));
    }

    #[test]
    fn test_strict_mismatch_is_none() {
        assert_eq!(run("teams/1", "users/:id", &MatcherConfig::default(), true), None);
    }

    #[test]
    fn test_strict_static_match_is_some_empty() {
        assert_eq!(
            run("health", "health", &MatcherConfig::default(), true),
            Some(Params::new())
        );
    }

    #[test]
    fn test_execute_reports_strict_mismatch() {
        let config = MatcherConfig::default();
        assert!(!execute("teams/1", "users/:id", &config, true, false).unwrap());
        assert!(execute("users/1", "users/:id", &config, true, false).unwrap());
        assert!(execute("teams/1", "users/:id", &config, false, false).unwrap());
    }

    #[test]
    fn test_marker_from_config() {
        let config = MatcherConfig::default().with_marker('$');
        let params = run("users/9", "users/$id", &config, true).unwrap();
        assert_eq!(to_json(&params, false).unwrap(), r#"{"id":"9"}"#);
    }
}
