//! Palette rules and the color-class linter.
//!
//! The palette is a fixed set of approved numeric steps; the linter scans
//! source files for Tailwind-style color utilities (`bg-blue-300`) and
//! reports steps outside that set together with the nearest approved step.
//! Findings are advisory.

pub mod lint;
pub mod palette;

pub use lint::*;
pub use palette::*;
