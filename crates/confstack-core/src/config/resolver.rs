//! Configuration resolution with layered merge
//!
//! The [`Resolver`] turns a key such as `db:replicas/conn.pool.max` into a
//! value by loading the default, override and environment files for
//! `replicas/conn`, merging them, and walking `pool.max`.

use crate::config::merge::merge_layers;
use crate::config::paths::ResolvedPaths;
use crate::config::source::{ConfigSource, FileCache};
use crate::config::walk::{find_value, is_truthy};
use crate::env::{EnvMode, EnvOverlay};
use crate::key::ParsedKey;
use crate::namespace::{DEFAULT_NAMESPACE, Namespace, NamespaceRegistry};
use crate::{Error, Result};
use confstack_fs::{ConfigObject, ConfigStore, NormalizedPath};
use serde_json::Value;
use std::sync::Arc;

/// Resolves dotted keys against layered config files
///
/// Each candidate file is loaded at most once per resolver; the cache lives
/// as long as the resolver and is never invalidated.
///
/// # Example
///
/// ```no_run
/// use confstack_core::Resolver;
///
/// let mut resolver = Resolver::new("/etc/app/config", Some("/etc/app/local"));
/// resolver.register_namespace("db", "/etc/db/config", None)?;
///
/// let port = resolver.get_or("server.port", 8080);
/// let host = resolver.get("db:conn.host");
/// # Ok::<(), confstack_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Resolver {
    namespaces: NamespaceRegistry,
    source: Box<dyn ConfigSource>,
    cache: FileCache,
    env_mode: EnvMode,
    env_overlay: EnvOverlay,
    falsy_as_absent: bool,
}

impl Resolver {
    /// Create a resolver whose `"default"` namespace reads from `default_path`,
    /// with optional overrides from `override_path`.
    ///
    /// Files are read from disk through [`ConfigStore`] and the environment
    /// mode comes from `CONFSTACK_ENV`.
    pub fn new<P: Into<NormalizedPath>>(default_path: P, override_path: Option<P>) -> Self {
        let mut builder = Self::builder(default_path);
        if let Some(path) = override_path {
            builder = builder.override_path(path);
        }
        builder.build()
    }

    /// Start configuring a resolver.
    pub fn builder(default_path: impl Into<NormalizedPath>) -> ResolverBuilder {
        ResolverBuilder::new(default_path)
    }

    /// Register a namespace.
    ///
    /// Fails with [`Error::NamespaceExists`] if the name is taken.
    pub fn register_namespace<P: Into<NormalizedPath>>(
        &mut self,
        name: impl Into<String>,
        default_path: P,
        override_path: Option<P>,
    ) -> Result<()> {
        self.namespaces
            .register(name, Namespace::new(default_path, override_path))
    }

    /// Register or replace a namespace.
    pub fn override_namespace<P: Into<NormalizedPath>>(
        &mut self,
        name: impl Into<String>,
        default_path: P,
        override_path: Option<P>,
    ) {
        self.namespaces
            .set(name, Namespace::new(default_path, override_path));
    }

    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }

    /// Look up `key`.
    ///
    /// Returns `None` when the key is malformed, names an unregistered
    /// namespace, is missing, or resolves to a falsy value (`null`, `false`,
    /// `0`, `""`) while the falsy-as-absent policy is on.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(key, error = %e, "Key not resolvable; using default");
                None
            }
        }
    }

    /// Look up `key`, substituting `default` wherever [`get`](Self::get)
    /// returns `None`.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// Look up `key`, reporting why a key could not be parsed.
    ///
    /// Missing files and missing keys are still `Ok(None)`.
    pub fn try_get(&self, key: &str) -> Result<Option<Value>> {
        let paths = self.resolve_paths(key)?;
        let merged = self.merge(&paths);

        let value = find_value(&merged, &paths.key_path)
            .filter(|value| self.is_present(value))
            .cloned();
        tracing::debug!(key, found = value.is_some(), "Resolved config key");
        Ok(value)
    }

    /// The merged object for the file `key` addresses. In-file segments
    /// of `key` are ignored.
    pub fn merged(&self, key: &str) -> Result<ConfigObject> {
        let paths = self.resolve_paths(key)?;
        Ok(self.merge(&paths))
    }

    /// The candidate files consulted for `key`.
    pub fn resolve_paths(&self, key: &str) -> Result<ResolvedPaths> {
        let parsed = ParsedKey::parse(key, &self.namespaces)?;
        let namespace = self
            .namespaces
            .get(&parsed.namespace)
            .ok_or_else(|| Error::NamespaceNotRegistered {
                namespace: parsed.namespace.clone(),
                key: key.to_string(),
            })?;

        let env_mode = self.env_mode.current();
        Ok(ResolvedPaths::resolve(
            &parsed,
            namespace,
            env_mode.as_deref(),
            self.env_overlay,
        ))
    }

    /// Number of candidate paths loaded so far, failed loads included.
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }

    fn merge(&self, paths: &ResolvedPaths) -> ConfigObject {
        let layers: Vec<Arc<ConfigObject>> = paths
            .candidates()
            .map(|path| {
                tracing::debug!(%path, "Consulting config layer");
                self.cache.get_or_load(path, self.source.as_ref())
            })
            .collect();
        merge_layers(layers.iter().map(|layer| &**layer))
    }

    fn is_present(&self, value: &Value) -> bool {
        if self.falsy_as_absent {
            is_truthy(value)
        } else {
            !value.is_null()
        }
    }
}

/// Builder for [`Resolver`]
#[derive(Debug)]
pub struct ResolverBuilder {
    default_path: NormalizedPath,
    override_path: Option<NormalizedPath>,
    source: Option<Box<dyn ConfigSource>>,
    env_mode: EnvMode,
    env_overlay: EnvOverlay,
    falsy_as_absent: bool,
}

impl ResolverBuilder {
    fn new(default_path: impl Into<NormalizedPath>) -> Self {
        Self {
            default_path: default_path.into(),
            override_path: None,
            source: None,
            env_mode: EnvMode::default(),
            env_overlay: EnvOverlay::default(),
            falsy_as_absent: true,
        }
    }

    /// Override directory of the `"default"` namespace.
    pub fn override_path(mut self, path: impl Into<NormalizedPath>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    /// Where config objects are loaded from. Defaults to [`ConfigStore`].
    pub fn source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn env_mode(mut self, env_mode: EnvMode) -> Self {
        self.env_mode = env_mode;
        self
    }

    /// Read the environment mode from the named variable.
    pub fn env_var(self, name: impl Into<String>) -> Self {
        self.env_mode(EnvMode::Var(name.into()))
    }

    pub fn env_overlay(mut self, env_overlay: EnvOverlay) -> Self {
        self.env_overlay = env_overlay;
        self
    }

    /// Whether `false`, `0` and `""` count as missing. On by default.
    ///
    /// `null` is always missing.
    pub fn falsy_as_absent(mut self, enabled: bool) -> Self {
        self.falsy_as_absent = enabled;
        self
    }

    pub fn build(self) -> Resolver {
        let default = Namespace {
            default_path: self.default_path,
            override_path: self.override_path,
        };
        tracing::debug!(
            namespace = DEFAULT_NAMESPACE,
            default_path = %default.default_path,
            "Creating resolver"
        );

        Resolver {
            namespaces: NamespaceRegistry::new(default),
            source: self
                .source
                .unwrap_or_else(|| Box::new(ConfigStore::new())),
            cache: FileCache::default(),
            env_mode: self.env_mode,
            env_overlay: self.env_overlay,
            falsy_as_absent: self.falsy_as_absent,
        }
    }
}
