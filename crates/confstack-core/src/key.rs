//! Key parsing
//!
//! Keys have the shape `[namespace:]dir/sub/file.key1.key2`. The namespace
//! prefix is optional, the directory part is optional, and the first dotted
//! segment names the config file.

use crate::namespace::{DEFAULT_NAMESPACE, NamespaceRegistry};
use crate::{Error, Result};

/// A key split into its addressing parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    /// Namespace the key resolves in
    pub namespace: String,

    /// Directories between the namespace root and the file
    pub file_path: Vec<String>,

    /// Dotted segments; the first one is the file name. Never empty.
    pub segments: Vec<String>,
}

impl ParsedKey {
    /// Parse `key`, checking its namespace prefix against `registry`.
    ///
    /// Only a `:` or `/` past the first character acts as a separator.
    pub fn parse(key: &str, registry: &NamespaceRegistry) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::malformed(key, "empty key"));
        }

        let (namespace, remainder) = match key.find(':') {
            Some(idx) if idx > 0 => {
                let namespace = &key[..idx];
                if !registry.contains(namespace) {
                    return Err(Error::NamespaceNotRegistered {
                        namespace: namespace.to_string(),
                        key: key.to_string(),
                    });
                }
                (namespace, &key[idx + 1..])
            }
            _ => (DEFAULT_NAMESPACE, key),
        };

        let (file_path, file_and_keys) = match remainder.find('/') {
            Some(idx) if idx > 0 => {
                let mut parts: Vec<String> = remainder.split('/').map(str::to_string).collect();
                // split yields at least two parts when a separator was found
                let last = parts.pop().unwrap_or_default();
                (parts, last)
            }
            _ => (Vec::new(), remainder.to_string()),
        };

        let segments: Vec<String> = file_and_keys.split('.').map(str::to_string).collect();
        if segments[0].is_empty() {
            return Err(Error::malformed(key, "missing file name"));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            file_path,
            segments,
        })
    }

    /// The config file name, without extension.
    pub fn file_name(&self) -> &str {
        &self.segments[0]
    }

    /// Segments to walk inside the merged config object.
    pub fn key_path(&self) -> &[String] {
        &self.segments[1..]
    }

    /// Directory below the namespace root, `/` when the key has none.
    pub fn file_directory(&self) -> String {
        format!("/{}", self.file_path.join("/"))
    }
}
