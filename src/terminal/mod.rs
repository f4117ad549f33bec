//! Shared terminal utilities.
//!
//! Box drawing, ANSI styling, and tty detection.

mod output;
mod tty;

pub use output::*;
pub use tty::*;
