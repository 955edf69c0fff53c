// file: src/cli/commands.rs
// version: 1.0.0
// guid: b6e8fa0c-e8f9-4e2a-ba0c-e8f90a1b2c34

//! Command implementation for the CLI

use tracing::{debug, info};

use crate::cli::args::Cli;
use crate::reporter;
use crate::rsync::{detect_rsync, RsyncRunner, SyncPlan, SyncStats};
use crate::utils::paths;
use crate::{Result, SafeRsyncError};

/// Run the full sync workflow: validate, preflight, plan, execute, report.
pub async fn sync_command(cli: Cli) -> Result<()> {
    if cfg!(windows) {
        return Err(SafeRsyncError::validation(
            "Only macOS and Linux are supported",
        ));
    }

    ensure_local("Source", &cli.src)?;
    ensure_local("Destination", &cli.dst)?;

    let src = paths::absolutize(&cli.src)?;
    let dst = paths::absolutize(&cli.dst)?;
    paths::validate_source_dir(&src)?;
    if src == dst {
        return Err(SafeRsyncError::validation(format!(
            "Source and destination are the same directory: {}",
            src.display()
        )));
    }

    let (binary, version) = detect_rsync().await?;
    reporter::print_preflight(&version);
    debug!("Using {} (version {})", binary.display(), version);

    let plan = SyncPlan::new(src, dst, cli.dry_run)?;
    plan.prepare().await?;
    reporter::print_header(&plan);

    let runner = RsyncRunner::new(binary);
    let outcome = runner.run(&plan).await?;

    if !outcome.success() {
        return Err(SafeRsyncError::RsyncFailed(outcome.exit_code));
    }

    let stats = SyncStats::from_lines(&outcome.stats_lines);
    reporter::print_summary(&plan, &stats, outcome.duration);
    if cli.json {
        reporter::print_json(&plan, &stats, outcome.duration)?;
    }

    info!("Sync finished in {:.2}s", outcome.duration.as_secs_f64());
    Ok(())
}

fn ensure_local(label: &str, raw: &str) -> Result<()> {
    if paths::is_remote_spec(raw) {
        return Err(SafeRsyncError::validation(format!(
            "{} looks like a remote rsync path: {} (only local directories are supported)",
            label, raw
        )));
    }
    Ok(())
}
