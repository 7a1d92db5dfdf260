//! Shared test utilities for the confstack workspace.
//!
//! This crate provides standardised config-tree fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`tree`]: [`ConfigTree`](tree::ConfigTree) builder for on-disk config layouts

pub mod tree;

pub use tree::ConfigTree;
