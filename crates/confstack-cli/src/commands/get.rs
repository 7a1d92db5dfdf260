//! Get command implementation

use confstack_core::Resolver;
use serde_json::Value;

use crate::error::{CliError, Result};

/// Print the value of `key`, or `default` when it is missing.
pub fn run_get(resolver: &Resolver, key: &str, default: Option<&str>, json: bool) -> Result<()> {
    let value = match resolver.get(key) {
        Some(value) => value,
        None => match default {
            Some(raw) => parse_default(raw),
            None => return Err(CliError::user(format!("No value for key: {key}"))),
        },
    };

    println!("{}", render(&value, json)?);
    Ok(())
}

/// Interpret a `--default` argument: JSON when it parses, otherwise a string.
pub fn parse_default(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Strings print raw unless JSON output was requested.
fn render(value: &Value, json: bool) -> Result<String> {
    match value {
        Value::String(s) if !json => Ok(s.clone()),
        _ if json => Ok(serde_json::to_string_pretty(value)?),
        _ => Ok(value.to_string()),
    }
}
