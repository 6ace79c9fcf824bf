pub mod diff;
pub mod matching;

use anyhow::Result;
use serde::Serialize;

/// Serialize `value` as compact or pretty JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
