//! Exit handling: exit codes, signal handlers, and color cleanup.

use crate::terminal;

pub const SUCCESS: i32 = 0;
/// The password could not be built.
pub const FAILURE: i32 = 1;
/// Bad command line.
pub const USAGE: i32 = 2;
pub const INTERRUPTED: i32 = 130;

/// Cleanup function registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    let reset = terminal::reset_sequence();
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if !reset.is_empty() && libc::isatty(libc::STDOUT_FILENO) == 1 {
            libc::write(
                libc::STDOUT_FILENO,
                reset.as_ptr() as *const libc::c_void,
                reset.len(),
            );
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(INTERRUPTED) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep the process out of core dumps so a crash cannot leak a password.
#[cfg(target_os = "linux")]
pub fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}
