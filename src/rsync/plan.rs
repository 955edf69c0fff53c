// file: src/rsync/plan.rs
// version: 1.0.0
// guid: b0e2f4a6-8293-4ec4-94a6-8293a4b5c6d7

//! Per-run parameters and rsync argument construction

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::Local;
use tracing::debug;

use crate::utils::paths;
use crate::Result;

/// Timestamp format shared by the backup directory and the log file name
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Everything one run needs: validated paths, derived side-effect paths,
/// and the dry-run flag.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    /// Absolute source directory
    pub source: PathBuf,
    /// Absolute destination directory
    pub dest: PathBuf,
    /// Timestamped backup directory beside the destination
    pub backup_dir: PathBuf,
    /// Timestamped log file in the working directory
    pub log_file: PathBuf,
    /// Timestamp the run started, `%Y-%m-%d_%H-%M-%S`
    pub timestamp: String,
    /// Whether `--dry-run` is passed to rsync
    pub dry_run: bool,
}

impl SyncPlan {
    /// Build a plan stamped with the current local time.
    pub fn new(source: PathBuf, dest: PathBuf, dry_run: bool) -> Result<Self> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(source, dest, dry_run, timestamp)
    }

    /// Build a plan with an explicit timestamp.
    pub fn with_timestamp(
        source: PathBuf,
        dest: PathBuf,
        dry_run: bool,
        timestamp: String,
    ) -> Result<Self> {
        let backup_dir = paths::backup_dir_for(&dest, &timestamp)?;
        let log_file = PathBuf::from(format!("safe_rsync_{}.log", timestamp));
        Ok(Self {
            source,
            dest,
            backup_dir,
            log_file,
            timestamp,
            dry_run,
        })
    }

    /// The fixed rsync argument vector: archive mode, human-readable sizes,
    /// single filesystem, delete with backups into the backup directory,
    /// stats/progress output, optional dry-run, then source and destination.
    pub fn rsync_args(&self) -> Vec<OsString> {
        let mut backup_dir_arg = OsString::from("--backup-dir=");
        backup_dir_arg.push(self.backup_dir.as_os_str());

        let mut args: Vec<OsString> = vec![
            "-a".into(),
            "-h".into(),
            "-x".into(),
            "--delete".into(),
            "--backup".into(),
            backup_dir_arg,
            "--info=stats2,progress2".into(),
        ];
        if self.dry_run {
            args.push("--dry-run".into());
        }
        args.push(self.source_with_slash());
        args.push(self.dest.as_os_str().to_os_string());
        args
    }

    /// Source with a trailing slash so rsync copies the directory's
    /// *contents* rather than the directory itself.
    fn source_with_slash(&self) -> OsString {
        let mut src = self.source.as_os_str().to_os_string();
        if !src.to_string_lossy().ends_with('/') {
            src.push("/");
        }
        src
    }

    /// Create the backup directory. Dry runs mutate nothing.
    pub async fn prepare(&self) -> Result<()> {
        if self.dry_run {
            debug!("Dry run: skipping backup directory creation");
            return Ok(());
        }
        tokio::fs::create_dir_all(&self.backup_dir).await?;
        debug!("Created backup directory {}", self.backup_dir.display());
        Ok(())
    }
}
