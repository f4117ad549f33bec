use std::env;

use tracing_subscriber::EnvFilter;

mod cli;
mod exits;
mod pass;
mod settings;
mod terminal;

/// Filter directives for diagnostics, e.g. `STRONGPASS_LOG=debug`.
const LOG_ENV: &str = "STRONGPASS_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    exits::harden();
    exits::install_handlers();
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let code = cli::run(args);
    std::process::exit(code);
}
