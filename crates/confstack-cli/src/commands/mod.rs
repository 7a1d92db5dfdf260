//! Command implementations for confstack-cli

pub mod get;
pub mod paths;
pub mod show;

pub use get::run_get;
pub use paths::run_paths;
pub use show::run_show;

use confstack_core::{EnvMode, EnvOverlay, Resolver};

use crate::cli::Cli;
use crate::error::Result;

/// Build a resolver from the global CLI options.
///
/// Fails if a `--ns` flag names an already registered namespace
/// (including `default`).
pub fn build_resolver(cli: &Cli) -> Result<Resolver> {
    let mut builder = Resolver::builder(cli.root.as_path())
        .falsy_as_absent(!cli.keep_falsy)
        .env_overlay(if cli.env_fallback {
            EnvOverlay::FallbackToDefaultPath
        } else {
            EnvOverlay::RequireOverridePath
        });

    if let Some(dir) = &cli.override_dir {
        builder = builder.override_path(dir.as_path());
    }

    builder = match &cli.env {
        Some(mode) => builder.env_mode(EnvMode::Fixed(Some(mode.clone()))),
        None => builder.env_var(cli.env_var.clone()),
    };

    let mut resolver = builder.build();
    for ns in &cli.namespaces {
        resolver.register_namespace(
            ns.name.clone(),
            ns.default_path.as_str(),
            ns.override_path.as_deref(),
        )?;
    }

    Ok(resolver)
}
