//! Show command implementation

use confstack_core::Resolver;
use serde_json::Value;

use crate::error::Result;

/// Print the merged configuration for the file `key` addresses.
pub fn run_show(resolver: &Resolver, key: &str) -> Result<()> {
    let merged = resolver.merged(key)?;
    println!("{}", serde_json::to_string_pretty(&Value::Object(merged))?);
    Ok(())
}
