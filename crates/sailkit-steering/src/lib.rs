//! Steering document system for sailkit.
//!
//! This crate reads the public declaration files of the installed design-system
//! package, groups the exported components into a fixed taxonomy, and keeps two
//! generated markdown documents in sync with what is actually installed. It
//! also hosts the advisory version gate run before syncing.

pub mod categorize;
pub mod error;
pub mod introspect;
pub mod pipeline;
pub mod render;
pub mod sync;
pub mod version_gate;

pub use categorize::*;
pub use error::*;
pub use introspect::*;
pub use pipeline::*;
pub use render::*;
pub use sync::*;
pub use version_gate::*;
