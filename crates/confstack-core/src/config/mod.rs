//! Configuration resolution
//!
//! # Configuration Hierarchy
//!
//! For every key, up to three files are loaded and merged (later files
//! override earlier ones, one level deep):
//!
//! 1. **Default** - `<default_path>/<dir>/<file>`
//! 2. **Override** - `<override_path>/<dir>/<file>`, when the namespace has one
//! 3. **Environment** - `<override_path>/<dir>/<file>.<mode>`, when an
//!    environment mode is active (see [`EnvOverlay`](crate::EnvOverlay))
//!
//! Missing or unreadable files contribute an empty layer.
//!
//! # Example
//!
//! ```ignore
//! use confstack_core::Resolver;
//!
//! let resolver = Resolver::new("/srv/config/default", Some("/srv/config/local"));
//! let port = resolver.get_or("server.port", 8080);
//! ```

mod merge;
mod paths;
mod resolver;
mod source;
mod walk;

pub use merge::{merge_into, merge_layers};
pub use paths::ResolvedPaths;
pub use resolver::{Resolver, ResolverBuilder};
pub use source::{ConfigSource, MemorySource};
pub use walk::{find_value, is_truthy};
