mod context;
mod parse;
pub mod prompts;

pub use context::{Context, Done};
pub use parse::{LengthArg, check_range, parse};

use crate::exits;

/// Run one CLI invocation and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = Context::new(args);
    match ctx.run() {
        Ok(()) => exits::SUCCESS,
        Err(Done(code)) => code,
    }
}
