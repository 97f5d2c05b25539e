//! Unicode icons for CLI output.

use std::env;

/// Status icons
pub struct Icons;

impl Icons {
    pub const CHECK: &'static str = "✓";
    pub const WARNING: &'static str = "⚠";
    pub const UPDATE: &'static str = "⬆";

    /// Fallback ASCII versions
    pub const CHECK_ASCII: &'static str = "[ok]";
    pub const WARNING_ASCII: &'static str = "[warn]";
    pub const UPDATE_ASCII: &'static str = "[update]";
}

/// Picks unicode or ASCII icons for the current terminal
#[derive(Debug, Clone, Copy)]
pub struct IconContext {
    unicode: bool,
}

impl IconContext {
    pub fn new() -> Self {
        Self {
            unicode: detect_unicode_support(),
        }
    }

    pub fn with_unicode(unicode: bool) -> Self {
        Self { unicode }
    }

    pub fn check(&self) -> &'static str {
        if self.unicode { Icons::CHECK } else { Icons::CHECK_ASCII }
    }

    pub fn warning(&self) -> &'static str {
        if self.unicode { Icons::WARNING } else { Icons::WARNING_ASCII }
    }

    pub fn update(&self) -> &'static str {
        if self.unicode { Icons::UPDATE } else { Icons::UPDATE_ASCII }
    }
}

impl Default for IconContext {
    fn default() -> Self {
        Self::new()
    }
}

fn detect_unicode_support() -> bool {
    env::var("TERM")
        .map(|t| !t.contains("linux"))
        .unwrap_or(true)
        && env::var("LANG")
            .map(|l| l.to_uppercase().contains("UTF"))
            .unwrap_or(true)
}
