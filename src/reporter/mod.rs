// file: src/reporter/mod.rs
// version: 1.0.0
// guid: e3b5c7d9-b5c6-4bf7-87d9-b5c6d7e8f901

//! Terminal reporting: run header, colour-coded summary, JSON output

use std::time::Duration;

use colored::Colorize;
use serde::Serialize;

use crate::rsync::{RsyncVersion, SyncPlan, SyncStats};
use crate::Result;

const RULE: &str = "────────────────────────────────────────";

/// Announce the detected rsync version.
pub fn print_preflight(version: &RsyncVersion) {
    println!("{}", format!("✅ rsync version {} detected.", version).bright_green().bold());
}

/// Print an overview of the upcoming rsync run.
pub fn print_header(plan: &SyncPlan) {
    println!("{}", "🚀 Running rsync…".bright_cyan().bold());
    if plan.dry_run {
        println!(
            "{}",
            "   🔍 Dry run   : true (no changes will be made)".bright_yellow().bold()
        );
    } else {
        println!("   💾 Backup dir: {}", plan.backup_dir.display());
        println!("   📝 Log file  : {}", plan.log_file.display());
    }
    println!("{}\n", RULE);
}

/// Print the colour-coded post-run summary.
pub fn print_summary(plan: &SyncPlan, stats: &SyncStats, duration: Duration) {
    println!("\n{}", "✅ Rsync complete.".bright_green().bold());
    println!("{}", RULE);
    println!("{}", format!("📄 Files       : {}", stats.files_display()).bright_cyan());
    println!("{}", format!("📊 Total size  : {}", stats.size_display()).bright_cyan());
    println!(
        "{}",
        format!("⏱ Duration    : {:.2} seconds", duration.as_secs_f64()).bright_cyan()
    );
    println!("{}", format!("📁 Source      : {}", plan.source.display()).bright_cyan());
    println!("{}", format!("📂 Destination : {}", plan.dest.display()).bright_cyan());
    if plan.dry_run {
        println!(
            "{}",
            "🔍 Dry run     : true (nothing has been changed)".bright_yellow().bold()
        );
    } else {
        println!("{}", format!("💾 Backup dir  : {}", plan.backup_dir.display()).bright_cyan());
        println!("{}", format!("📝 Log file    : {}", plan.log_file.display()).bright_cyan());
    }
    println!("{}", RULE);
}

/// Machine-readable run summary for `--json`
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    source: String,
    destination: String,
    backup_dir: Option<String>,
    log_file: Option<String>,
    dry_run: bool,
    files: Option<u64>,
    total_size: Option<&'a str>,
    duration_secs: f64,
}

/// Emit the run summary as pretty-printed JSON on stdout.
pub fn print_json(plan: &SyncPlan, stats: &SyncStats, duration: Duration) -> Result<()> {
    let summary = RunSummary {
        source: plan.source.display().to_string(),
        destination: plan.dest.display().to_string(),
        backup_dir: (!plan.dry_run).then(|| plan.backup_dir.display().to_string()),
        log_file: (!plan.dry_run).then(|| plan.log_file.display().to_string()),
        dry_run: plan.dry_run,
        files: stats.file_count,
        total_size: stats.total_size.as_deref(),
        duration_secs: duration.as_secs_f64(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
