//! Terminal UI utilities: status messages and color detection.

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if color output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise colors
/// follow whether stderr is a terminal.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether status messages are colored. `--no-color` always wins.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_disables_colors() {
        init_colors(true);
        assert!(!colors_enabled());
    }
}
