// file: src/rsync/runner.rs
// version: 1.0.0
// guid: d2a4b6c8-a4b5-4ae6-b6c8-a4b5c6d7e8f9

//! rsync process execution with dual-sink output capture
//!
//! The child's stdout and stderr are consumed line-by-line while the caller
//! blocks on exit. Every line lands in the run log (real runs only);
//! progress lines additionally redraw a single terminal status line, and
//! stats lines are collected for the summary.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::rsync::plan::SyncPlan;
use crate::rsync::stats;
use crate::{Result, SafeRsyncError};

/// Result of one rsync invocation
#[derive(Debug)]
pub struct RunOutcome {
    /// Captured stats2 summary lines
    pub stats_lines: Vec<String>,
    /// The child's exit code, verbatim
    pub exit_code: i32,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawns rsync and routes its output
pub struct RsyncRunner {
    binary: PathBuf,
}

impl RsyncRunner {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    /// Run the plan to completion and return the captured outcome.
    ///
    /// A non-zero rsync exit is reported through the outcome, not as an
    /// error; the caller decides how to surface it.
    pub async fn run(&self, plan: &SyncPlan) -> Result<RunOutcome> {
        let args = plan.rsync_args();
        debug!(
            "Invoking {} {}",
            self.binary.display(),
            args.iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let mut log = self.open_log(plan).await?;
        let start = Instant::now();

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SafeRsyncError::execution(format!("Failed to start rsync: {}", e)))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| SafeRsyncError::execution("Failed to capture rsync stdout"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| SafeRsyncError::execution("Failed to capture rsync stderr"))?;

        let mut stdout_lines = BufReader::new(stdout).lines();
        let mut stderr_lines = BufReader::new(stderr).lines();
        let mut stdout_done = false;
        let mut stderr_done = false;

        let progress = ProgressBar::new_spinner();
        let mut stats_lines = Vec::new();

        while !(stdout_done && stderr_done) {
            tokio::select! {
                line = stdout_lines.next_line(), if !stdout_done => match line? {
                    Some(line) => {
                        let line = line.trim_end().to_string();
                        if line.is_empty() {
                            continue;
                        }
                        log_line(&mut log, &line).await?;
                        if stats::is_stats_line(&line) {
                            stats_lines.push(line);
                        } else if stats::is_progress_line(&line) {
                            progress.set_message(line.trim_start().to_string());
                            progress.tick();
                        } else {
                            debug!("rsync: {}", line);
                        }
                    }
                    None => stdout_done = true,
                },
                line = stderr_lines.next_line(), if !stderr_done => match line? {
                    Some(line) => {
                        let line = line.trim_end().to_string();
                        if line.is_empty() {
                            continue;
                        }
                        log_line(&mut log, &line).await?;
                        warn!("rsync: {}", line);
                    }
                    None => stderr_done = true,
                },
            }
        }

        let status = child.wait().await?;
        progress.finish_and_clear();

        let duration = start.elapsed();
        // a child killed by a signal reports no code; treat it as interrupted
        let exit_code = status.code().unwrap_or(130);

        self.finish_log(&mut log, &stats_lines, duration).await?;

        Ok(RunOutcome {
            stats_lines,
            exit_code,
            duration,
        })
    }

    /// Open the run log and write its header. Dry runs get no log file.
    async fn open_log(&self, plan: &SyncPlan) -> Result<Option<File>> {
        if plan.dry_run {
            return Ok(None);
        }
        let mut file = File::create(&plan.log_file).await?;
        let header = format!(
            "Rsync log for {}\nsource: {}\ndestination: {}\nbackup: {}\n{}\n",
            plan.timestamp,
            plan.source.display(),
            plan.dest.display(),
            plan.backup_dir.display(),
            "-".repeat(40),
        );
        file.write_all(header.as_bytes()).await?;
        Ok(Some(file))
    }

    /// Append the stats block and duration, then flush.
    async fn finish_log(
        &self,
        log: &mut Option<File>,
        stats_lines: &[String],
        duration: Duration,
    ) -> Result<()> {
        if let Some(file) = log {
            let footer = format!(
                "{}\n{}\nDuration: {:.2} seconds\n",
                "-".repeat(40),
                stats_lines.join("\n"),
                duration.as_secs_f64(),
            );
            file.write_all(footer.as_bytes()).await?;
            file.flush().await?;
        }
        Ok(())
    }
}

async fn log_line(log: &mut Option<File>, line: &str) -> Result<()> {
    if let Some(file) = log {
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn write_stub(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake-rsync");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn stub_plan(tmp: &Path, dry_run: bool) -> SyncPlan {
        let plan = SyncPlan::with_timestamp(
            tmp.join("src"),
            tmp.join("dst"),
            dry_run,
            "2024-05-01_12-30-00".to_string(),
        )
        .unwrap();
        // keep the log inside the temp dir rather than the test's cwd
        SyncPlan {
            log_file: tmp.join(plan.log_file.file_name().unwrap()),
            ..plan
        }
    }

    #[tokio::test]
    async fn test_run_collects_stats_and_exit_code() {
        let tmp = tempfile::TempDir::new().unwrap();
        let stub = write_stub(
            tmp.path(),
            "echo 'Number of files: 3 (reg: 2, dir: 1)'\n\
             echo 'Total file size: 1234 bytes'\n\
             exit 0",
        );

        let plan = stub_plan(tmp.path(), false);
        let outcome = RsyncRunner::new(stub).run(&plan).await.unwrap();

        assert!(outcome.success());
        assert_eq!(outcome.stats_lines.len(), 2);
        assert!(outcome.stats_lines[0].starts_with("Number of files"));

        let log = std::fs::read_to_string(&plan.log_file).unwrap();
        assert!(log.contains("Rsync log for 2024-05-01_12-30-00"));
        assert!(log.contains("Total file size: 1234 bytes"));
        assert!(log.contains("Duration:"));
    }

    #[tokio::test]
    async fn test_run_propagates_exit_code() {
        let tmp = tempfile::TempDir::new().unwrap();
        let stub = write_stub(tmp.path(), "echo 'rsync error' >&2\nexit 23");

        let plan = stub_plan(tmp.path(), false);
        let outcome = RsyncRunner::new(stub).run(&plan).await.unwrap();

        assert!(!outcome.success());
        assert_eq!(outcome.exit_code, 23);

        // stderr lines are captured in the log as well
        let log = std::fs::read_to_string(&plan.log_file).unwrap();
        assert!(log.contains("rsync error"));
    }

    #[tokio::test]
    async fn test_dry_run_writes_no_log() {
        let tmp = tempfile::TempDir::new().unwrap();
        let stub = write_stub(tmp.path(), "echo 'Number of files: 0'\nexit 0");

        let plan = stub_plan(tmp.path(), true);
        let outcome = RsyncRunner::new(stub).run(&plan).await.unwrap();

        assert!(outcome.success());
        assert!(!plan.log_file.exists());
    }

    #[tokio::test]
    async fn test_missing_binary_is_execution_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let plan = stub_plan(tmp.path(), true);
        let result = RsyncRunner::new(tmp.path().join("nonexistent"))
            .run(&plan)
            .await;
        assert!(matches!(
            result,
            Err(SafeRsyncError::ExecutionError(_))
        ));
    }
}
