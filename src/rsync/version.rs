// file: src/rsync/version.rs
// version: 1.0.0
// guid: a9d1e3f5-7182-4db3-83f5-718293a4b5c6

//! rsync binary detection and minimum-version enforcement

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use tokio::process::Command;
use tracing::debug;

use crate::{Result, SafeRsyncError};

/// Oldest rsync release this wrapper supports. 3.2 introduced the
/// `--info=stats2,progress2` output format the summary scraper relies on.
pub const MIN_VERSION: RsyncVersion = RsyncVersion {
    major: 3,
    minor: 2,
    patch: 0,
};

/// Parsed `major.minor.patch` rsync version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RsyncVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for RsyncVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"rsync\s+version\s+([0-9]+(?:\.[0-9]+)+)").expect("valid version regex")
    })
}

/// Scrape the version number out of `rsync --version` output.
///
/// Missing components are zero-padded, so `3.2` parses as `3.2.0`.
pub fn parse_version_output(output: &str) -> Result<RsyncVersion> {
    let caps = version_re()
        .captures(output)
        .ok_or_else(|| SafeRsyncError::version("Couldn't detect rsync version"))?;

    let mut parts = caps[1].split('.').map(|p| {
        p.parse::<u32>()
            .map_err(|_| SafeRsyncError::version(format!("Invalid version component: {}", p)))
    });

    let major = parts.next().transpose()?.unwrap_or(0);
    let minor = parts.next().transpose()?.unwrap_or(0);
    let patch = parts.next().transpose()?.unwrap_or(0);

    Ok(RsyncVersion {
        major,
        minor,
        patch,
    })
}

/// Locate rsync on PATH and verify it meets [`MIN_VERSION`].
///
/// Returns the resolved binary path and the detected version.
pub async fn detect_rsync() -> Result<(PathBuf, RsyncVersion)> {
    let binary = which::which("rsync").map_err(|_| SafeRsyncError::RsyncMissing)?;
    debug!("Found rsync at {}", binary.display());

    let output = Command::new(&binary)
        .arg("--version")
        .output()
        .await
        .map_err(|e| SafeRsyncError::execution(format!("Failed to run rsync --version: {}", e)))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = parse_version_output(&stdout)?;

    if version < MIN_VERSION {
        return Err(SafeRsyncError::RsyncTooOld {
            required: MIN_VERSION.to_string(),
            found: version.to_string(),
        });
    }

    Ok((binary, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let output = "rsync  version 3.2.7  protocol version 31\nCopyright (C) 1996-2022";
        let version = parse_version_output(output).unwrap();
        assert_eq!(
            version,
            RsyncVersion {
                major: 3,
                minor: 2,
                patch: 7
            }
        );
        assert_eq!(version.to_string(), "3.2.7");
    }

    #[test]
    fn test_parse_two_component_version_zero_pads() {
        let version = parse_version_output("rsync version 3.2").unwrap();
        assert_eq!(version.patch, 0);
        assert_eq!(version.to_string(), "3.2.0");
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_version_output("no version here").is_err());
        assert!(parse_version_output("").is_err());
    }

    #[test]
    fn test_version_ordering() {
        let old = parse_version_output("rsync version 2.6.9").unwrap();
        let new = parse_version_output("rsync version 3.2.7").unwrap();
        assert!(old < MIN_VERSION);
        assert!(new >= MIN_VERSION);
        assert!(
            RsyncVersion {
                major: 3,
                minor: 10,
                patch: 0
            } > RsyncVersion {
                major: 3,
                minor: 2,
                patch: 7
            }
        );
    }
}
