//! CLI entry point for the slots pipeline.

use pagefold_slots::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Default to WARN so slot-conflict diagnostics surface without RUST_LOG set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
