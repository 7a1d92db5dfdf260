//! Candidate path resolution for a parsed key

use crate::env::EnvOverlay;
use crate::key::ParsedKey;
use crate::namespace::Namespace;
use confstack_fs::NormalizedPath;

/// The files consulted for one key, in merge order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub namespace: String,

    /// Segments walked inside the merged object
    pub key_path: Vec<String>,

    /// Baseline file
    pub default_path: NormalizedPath,

    /// Override file, when the namespace has an override directory
    pub override_path: Option<NormalizedPath>,

    /// Environment overlay file, when an environment mode is active
    pub env_path: Option<NormalizedPath>,
}

impl ResolvedPaths {
    /// Build the candidate paths for `key` inside `namespace`.
    pub fn resolve(
        key: &ParsedKey,
        namespace: &Namespace,
        env_mode: Option<&str>,
        overlay: EnvOverlay,
    ) -> Self {
        let directory = key.file_directory();
        let file_name = key.file_name();
        let locate = |base: &NormalizedPath| base.join(&directory).join(file_name);

        let default_path = locate(&namespace.default_path);
        let override_path = namespace.override_path.as_ref().map(locate);

        let env_base = match (overlay, namespace.override_path.as_ref()) {
            (_, Some(override_base)) => Some(override_base),
            (EnvOverlay::FallbackToDefaultPath, None) => Some(&namespace.default_path),
            (EnvOverlay::RequireOverridePath, None) => None,
        };
        let env_path = env_mode
            .zip(env_base)
            .map(|(mode, base)| locate(base).with_suffix(&format!(".{mode}")));

        Self {
            namespace: key.namespace.clone(),
            key_path: key.key_path().to_vec(),
            default_path,
            override_path,
            env_path,
        }
    }

    /// Present candidate paths: default, then override, then environment.
    pub fn candidates(&self) -> impl Iterator<Item = &NormalizedPath> {
        std::iter::once(&self.default_path)
            .chain(self.override_path.as_ref())
            .chain(self.env_path.as_ref())
    }
}
