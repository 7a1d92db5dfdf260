//! Config sources and the per-resolver file cache

use confstack_fs::{ConfigObject, ConfigStore, Error as FsError, NormalizedPath};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

/// Loads the configuration object stored at a resolved candidate path.
///
/// Paths carry no extension; implementations decide how a path maps to
/// stored data. Any error is treated by the resolver as an empty object.
pub trait ConfigSource: Debug + Send + Sync {
    fn load(&self, path: &NormalizedPath) -> confstack_fs::Result<ConfigObject>;
}

impl ConfigSource for ConfigStore {
    fn load(&self, path: &NormalizedPath) -> confstack_fs::Result<ConfigObject> {
        ConfigStore::load(self, path)
    }
}

/// In-memory config files keyed by candidate path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<NormalizedPath, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    pub fn with_file(mut self, path: impl Into<NormalizedPath>, content: Value) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<NormalizedPath>, content: Value) {
        self.files.insert(path.into(), content);
    }
}

impl ConfigSource for MemorySource {
    fn load(&self, path: &NormalizedPath) -> confstack_fs::Result<ConfigObject> {
        match self.files.get(path) {
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(_) => Err(FsError::NotAnObject {
                path: path.to_native(),
            }),
            None => Err(FsError::NotFound {
                path: path.to_native(),
            }),
        }
    }
}

/// Loaded config objects keyed by candidate path.
///
/// Entries live as long as the cache; failed loads are cached as empty
/// objects so a missing file is only probed once.
#[derive(Debug, Default)]
pub(crate) struct FileCache {
    entries: Mutex<HashMap<NormalizedPath, Arc<ConfigObject>>>,
}

impl FileCache {
    pub(crate) fn get_or_load(
        &self,
        path: &NormalizedPath,
        source: &dyn ConfigSource,
    ) -> Arc<ConfigObject> {
        if let Some(hit) = self.lock().get(path) {
            tracing::trace!(%path, "Config cache hit");
            return Arc::clone(hit);
        }

        // Load outside the lock; a concurrent duplicate load keeps the first insert
        let loaded = match source.load(path) {
            Ok(object) => object,
            Err(FsError::NotFound { .. }) => {
                tracing::debug!(%path, "No config file; using empty layer");
                ConfigObject::new()
            }
            Err(e) => {
                tracing::warn!(%path, error = %e, "Failed to load config; using empty layer");
                ConfigObject::new()
            }
        };

        Arc::clone(
            self.lock()
                .entry(path.clone())
                .or_insert_with(|| Arc::new(loaded)),
        )
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<NormalizedPath, Arc<ConfigObject>>> {
        // Entries are never left half-written, so a poisoned map is still usable
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
