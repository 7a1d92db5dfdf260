//! Error types for confstack-core

/// Result type for confstack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in confstack-core operations
///
/// Only [`Error::NamespaceExists`] escapes the lookup API unconditionally;
/// key errors are converted to the caller's default by
/// [`Resolver::get`](crate::Resolver::get) and only surface through the
/// diagnostic `try_*` methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A namespace with this name is already registered
    #[error("Namespace already exists: {name}. Use override_namespace() instead")]
    NamespaceExists { name: String },

    /// The key references a namespace prefix nobody registered
    #[error("Namespace not registered: {namespace} (key: {key})")]
    NamespaceNotRegistered { namespace: String, key: String },

    /// The key cannot address a config file
    #[error("Malformed key {key:?}: {reason}")]
    MalformedKey { key: String, reason: String },
}

impl Error {
    pub(crate) fn malformed(key: &str, reason: impl Into<String>) -> Self {
        Self::MalformedKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
