//! Configuration types for sailkit.
//!
//! This crate provides the configuration read from `.sailkit/config.yaml`.
//! Every field has a default matching the conventional project layout, so the
//! file is optional.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
