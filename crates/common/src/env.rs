//! Environment variable helpers
//!
//! Used as the fallback source when no config file is present.

use std::str::FromStr;

use tracing::warn;

/// Read a string variable, falling back to `default` when unset or blank.
pub fn var_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Read and parse a variable. Unparseable values are logged and ignored.
pub fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(%key, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}
