//! Yubin CLI binary.

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;
use yubin::cli::{args::YubinArgs, commands::execute_command};

fn init_tracing(verbosity: u8) {
    let filter = if let Ok(env) = std::env::var("RUST_LOG") {
        EnvFilter::new(env)
    } else {
        match verbosity {
            0 => EnvFilter::new("error"),
            1 => EnvFilter::new("warn"),
            2 => EnvFilter::new("info"),
            _ => EnvFilter::new("debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = YubinArgs::parse();
    init_tracing(args.verbosity());

    if let Err(e) = execute_command(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
