//! Namespace registry
//!
//! A namespace binds a name to the base directories its config files live
//! in. The `"default"` namespace always exists and serves keys without a
//! `namespace:` prefix.

use crate::{Error, Result};
use confstack_fs::NormalizedPath;
use std::collections::BTreeMap;

/// Name of the namespace used for unprefixed keys
pub const DEFAULT_NAMESPACE: &str = "default";

/// Base directories for one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Directory holding baseline config files
    pub default_path: NormalizedPath,

    /// Directory holding overrides layered on top of the defaults
    pub override_path: Option<NormalizedPath>,
}

impl Namespace {
    pub fn new<P: Into<NormalizedPath>>(default_path: P, override_path: Option<P>) -> Self {
        Self {
            default_path: default_path.into(),
            override_path: override_path.map(Into::into),
        }
    }
}

/// Registered namespaces, keyed by name
#[derive(Debug, Clone)]
pub struct NamespaceRegistry {
    entries: BTreeMap<String, Namespace>,
}

impl NamespaceRegistry {
    /// Create a registry seeded with the `"default"` namespace.
    pub fn new(default: Namespace) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(DEFAULT_NAMESPACE.to_string(), default);
        Self { entries }
    }

    /// Register a new namespace.
    ///
    /// Fails with [`Error::NamespaceExists`] if `name` is taken; the
    /// existing registration is left untouched.
    pub fn register(&mut self, name: impl Into<String>, namespace: Namespace) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(Error::NamespaceExists { name });
        }
        tracing::debug!(%name, default_path = %namespace.default_path, "Registering namespace");
        self.entries.insert(name, namespace);
        Ok(())
    }

    /// Insert or replace a namespace.
    pub fn set(&mut self, name: impl Into<String>, namespace: Namespace) {
        let name = name.into();
        tracing::debug!(%name, default_path = %namespace.default_path, "Overriding namespace");
        self.entries.insert(name, namespace);
    }

    pub fn get(&self, name: &str) -> Option<&Namespace> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
