//! Portal Studio - Main entry point
//!
//! Parses command-line arguments and runs the selected command.
//! Links go to stdout, log output to stderr.
//!
//! # Usage
//!
//! ```bash
//! portal-studio --help                                    # Show help
//! portal-studio link --file omniverse://h/scene.usd       # Print a sharing link
//! portal-studio --log-level debug config show             # Enable debug logging
//! ```

mod cli;
mod commands;
mod sinks;

pub use cli::Args;

use std::process::ExitCode;

use sinks::WriterSink;

fn main() -> ExitCode {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Configure logging based on CLI args
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_filter()),
    )
    .init();

    log::debug!("CLI args: {:?}", args);

    if args.legacy_catalog {
        log::info!("Using legacy runtime catalog");
    }

    match commands::run(&args, &WriterSink::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
