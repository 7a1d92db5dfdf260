//! [`ConfigTree`] builder for resolver test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of config files with helpers for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use confstack_test_utils::ConfigTree;
/// use serde_json::json;
///
/// let tree = ConfigTree::new();
/// tree.json("default/app", &json!({"port": 8080}))
///     .file("override/app.toml", "port = 9090\n");
/// tree.assert_file_exists("default/app.json");
/// ```
pub struct ConfigTree {
    temp_dir: TempDir,
}

impl Default for ConfigTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the tree, as a string.
    pub fn path(&self, rel: &str) -> String {
        self.root().join(rel).to_string_lossy().into_owned()
    }

    /// Write `content` to `rel`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let full_path = self.root().join(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("ConfigTree::file: failed to create {}: {e}", parent.display()));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("ConfigTree::file: failed to write {}: {e}", full_path.display()));
        self
    }

    /// Write `value` as pretty JSON to `<rel>.json`.
    pub fn json(&self, rel: &str, value: &serde_json::Value) -> &Self {
        let content = serde_json::to_string_pretty(value).unwrap();
        self.file(&format!("{rel}.json"), &content)
    }

    /// Assert that `path` (relative to the tree root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path: PathBuf = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
