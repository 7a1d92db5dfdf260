//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use confstack_core::DEFAULT_ENV_VAR;

/// confstack - Resolve keys from layered configuration files
#[derive(Parser, Debug)]
#[command(name = "confstack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the default config files
    #[arg(long, global = true, env = "CONFSTACK_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Directory holding override config files
    #[arg(long = "override", global = true, env = "CONFSTACK_OVERRIDE")]
    pub override_dir: Option<PathBuf>,

    /// Extra namespace as NAME=DIR[,OVERRIDE_DIR] (repeatable)
    #[arg(long = "ns", global = true, value_parser = parse_namespace)]
    pub namespaces: Vec<NamespaceArg>,

    /// Environment mode (e.g. production); takes precedence over --env-var
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Environment variable holding the environment mode
    #[arg(long, global = true, env = "CONFSTACK_ENV_VAR", default_value = DEFAULT_ENV_VAR)]
    pub env_var: String,

    /// Return false, 0 and "" instead of treating them as missing
    #[arg(long, global = true)]
    pub keep_falsy: bool,

    /// Look for environment files in the default directory when no override directory is set
    #[arg(long, global = true)]
    pub env_fallback: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the value of a key
    ///
    /// Examples:
    ///   confstack get app.port
    ///   confstack get db:conn.host --default localhost
    ///   confstack get services/billing/queue.retries --json
    Get {
        /// Key in the form [namespace:]dir/file.key1.key2
        key: String,

        /// Value to print when the key is missing (parsed as JSON when valid)
        #[arg(short, long)]
        default: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the candidate files consulted for a key
    Paths {
        /// Key in the form [namespace:]dir/file.key1.key2
        key: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the merged configuration of the file a key addresses
    Show {
        /// Key in the form [namespace:]dir/file
        key: String,
    },
}

/// A namespace given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceArg {
    pub name: String,
    pub default_path: String,
    pub override_path: Option<String>,
}

/// Parse `NAME=DIR[,OVERRIDE_DIR]`.
pub fn parse_namespace(s: &str) -> Result<NamespaceArg, String> {
    let (name, paths) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=DIR[,OVERRIDE_DIR], got '{s}'"))?;
    if name.is_empty() {
        return Err("namespace name cannot be empty".to_string());
    }

    let (default_path, override_path) = match paths.split_once(',') {
        Some((default, over)) => (default, Some(over.to_string())),
        None => (paths, None),
    };
    if default_path.is_empty() {
        return Err(format!("namespace '{name}' needs a default directory"));
    }

    Ok(NamespaceArg {
        name: name.to_string(),
        default_path: default_path.to_string(),
        override_path: override_path.filter(|p| !p.is_empty()),
    })
}
