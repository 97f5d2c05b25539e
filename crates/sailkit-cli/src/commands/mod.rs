//! Command implementations.

mod check_update;
mod lint_colors;
mod predev;
mod sync;

pub use check_update::CheckUpdateCommand;
pub use lint_colors::LintColorsCommand;
pub use predev::PredevCommand;
pub use sync::SyncCommand;
