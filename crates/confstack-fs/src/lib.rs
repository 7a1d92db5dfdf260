//! Filesystem layer for confstack
//!
//! Provides normalized path joining and format-agnostic loading of config
//! files into [`serde_json::Value`] trees.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigObject, ConfigStore};
pub use error::{Error, Result};
pub use path::NormalizedPath;
