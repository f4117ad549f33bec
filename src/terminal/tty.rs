//! Global color state and tty detection.

use std::sync::atomic::{AtomicBool, Ordering};

/// Color output flag, off until the CLI turns it on.
static COLOR: AtomicBool = AtomicBool::new(false);

pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::SeqCst);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

/// Check if stdout is a tty.
pub fn stdout_is_terminal() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}
