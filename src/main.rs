// file: src/main.rs
// version: 1.0.0
// guid: c7f90b1d-f90a-4f3b-8b1d-f90a1b2c3d45

//! safe-rsync - Main entry point

use clap::Parser;
use colored::Colorize;
use safe_rsync::{
    cli::{args::Cli, commands::sync_command},
    logging::logger,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() {
    // clap exits with 2 on usage errors by default; this tool promises 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Forward Ctrl+C as an early exit; rsync in the same process group
    // receives the signal and terminates on its own
    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, aborting...");
    };

    let result = tokio::select! {
        result = sync_command(cli) => result,
        _ = shutdown_signal => {
            eprintln!("{}", "❌ Interrupted by user.".bright_red().bold());
            std::process::exit(130); // standard exit code for Ctrl+C
        }
    };

    if let Err(e) = result {
        eprintln!("{}", format!("❌ {}", e).bright_red().bold());
        std::process::exit(e.exit_code());
    }
}
