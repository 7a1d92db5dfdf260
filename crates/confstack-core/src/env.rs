//! Environment mode selection
//!
//! The environment mode (e.g. `production`, `test`) picks an extra overlay
//! file, `<file>.<mode>`, layered on top of the default and override files.

use confstack_fs::ConfigFormat;

/// Environment variable read by [`EnvMode::default`]
pub const DEFAULT_ENV_VAR: &str = "CONFSTACK_ENV";

/// Where the environment mode comes from. Read once per lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvMode {
    /// Read the named process environment variable
    Var(String),

    /// Use a fixed mode, or none
    Fixed(Option<String>),
}

impl Default for EnvMode {
    fn default() -> Self {
        Self::Var(DEFAULT_ENV_VAR.to_string())
    }
}

impl EnvMode {
    /// The active mode. Empty or whitespace-only values count as unset.
    ///
    /// A mode containing a path separator, or ending in a config file
    /// extension (`json`, `eu.yml`), is ignored: appended to a file name it
    /// would address a different file than `<file>.<mode>`.
    pub fn current(&self) -> Option<String> {
        let mode = match self {
            Self::Var(name) => env_var_or_none(name),
            Self::Fixed(mode) => mode
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
        }?;

        if is_usable_mode(&mode) {
            Some(mode)
        } else {
            tracing::warn!(mode = %mode, "Ignoring environment mode that does not name an overlay file");
            None
        }
    }
}

/// How the environment overlay is located when a namespace has no
/// override directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvOverlay {
    /// Environment files live next to the overrides; without an override
    /// directory there is no environment overlay.
    #[default]
    RequireOverridePath,

    /// Without an override directory, look for environment files in the
    /// default directory.
    FallbackToDefaultPath,
}

fn is_usable_mode(mode: &str) -> bool {
    let last_extension = mode.rsplit('.').next().unwrap_or(mode);
    !mode.contains(['/', '\\']) && ConfigFormat::from_extension(last_extension).is_none()
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
