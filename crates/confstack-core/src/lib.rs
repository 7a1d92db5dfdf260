//! Hierarchical configuration resolver
//!
//! This crate resolves dotted keys against trees of config files:
//!
//! - **Namespaces**: named pairs of base directories (default, optional override)
//! - **Key parsing**: `[namespace:]dir/file.key1.key2`
//! - **Layered merge**: default, override and environment files, shallow merge
//! - **Lookup**: walk the merged object, falling back to a caller default
//!
//! # Architecture
//!
//! ```text
//!        confstack-cli
//!              |
//!       confstack-core
//!              |
//!        confstack-fs
//! ```
//!
//! # Example
//!
//! ```ignore
//! use confstack_core::Resolver;
//!
//! let mut resolver = Resolver::new("/cfg/default", None);
//! resolver.register_namespace("db", "/cfg/db/default", Some("/cfg/db/override"))?;
//! let host = resolver.get_or("db:conn.host", "localhost");
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod key;
pub mod namespace;

pub use config::{
    ConfigSource, MemorySource, ResolvedPaths, Resolver, ResolverBuilder, find_value, is_truthy,
    merge_into, merge_layers,
};
pub use confstack_fs::{ConfigObject, NormalizedPath};
pub use env::{DEFAULT_ENV_VAR, EnvMode, EnvOverlay};
pub use error::{Error, Result};
pub use key::ParsedKey;
pub use namespace::{DEFAULT_NAMESPACE, Namespace, NamespaceRegistry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_namespace_exists_displays_correctly() {
        let error = Error::NamespaceExists {
            name: "db".to_string(),
        };

        let display = format!("{}", error);
        assert!(
            display.contains("db"),
            "Error display should contain the name, got: {}",
            display
        );
        assert!(
            display.contains("override_namespace"),
            "Error display should point at override_namespace, got: {}",
            display
        );
    }

    #[test]
    fn error_not_registered_names_key() {
        let error = Error::NamespaceNotRegistered {
            namespace: "cache".to_string(),
            key: "cache:redis.host".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Namespace not registered: cache (key: cache:redis.host)"
        );
    }
}
