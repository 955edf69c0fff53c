// file: src/utils/paths.rs
// version: 1.0.0
// guid: e7b9c1d3-5f70-4b91-a1d3-5f7091a2b3c4

//! Path expansion, absolutization, and local-path validation

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::{Result, SafeRsyncError};

/// Matches rsync's remote-operand rule: a colon appearing before the first
/// slash marks the operand as `host:path` or `host::module/path`. This also
/// covers `rsync://host/module` URLs.
fn remote_spec_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^/]+:").expect("valid remote-spec regex"))
}

/// Check whether a raw CLI operand looks like a remote rsync path.
pub fn is_remote_spec(raw: &str) -> bool {
    remote_spec_re().is_match(raw)
}

/// Expand `~` and make a path absolute relative to the current directory.
///
/// The path is not canonicalized: the destination may not exist yet, and
/// rsync resolves symlinks on its own terms.
pub fn absolutize(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(raw);
    let path = PathBuf::from(expanded.as_ref());
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Backup directory beside the destination, named deterministically from
/// the destination path and the run timestamp:
/// `<dst parent>/<dst name>_backup_<timestamp>`.
pub fn backup_dir_for(dest: &Path, timestamp: &str) -> Result<PathBuf> {
    let name = dest.file_name().ok_or_else(|| {
        SafeRsyncError::validation(format!(
            "Destination has no usable directory name: {}",
            dest.display()
        ))
    })?;
    let parent = dest.parent().unwrap_or_else(|| Path::new("/"));
    Ok(parent.join(format!("{}_backup_{}", name.to_string_lossy(), timestamp)))
}

/// Ensure the source operand is an existing directory.
pub fn validate_source_dir(src: &Path) -> Result<()> {
    if !src.is_dir() {
        return Err(SafeRsyncError::validation(format!(
            "Source does not exist or is not a directory: {}",
            src.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_specs_are_detected() {
        assert!(is_remote_spec("host:/data"));
        assert!(is_remote_spec("host:relative/path"));
        assert!(is_remote_spec("user@host:/data"));
        assert!(is_remote_spec("host::module/path"));
        assert!(is_remote_spec("rsync://host/module"));
    }

    #[test]
    fn test_local_paths_are_not_remote() {
        assert!(!is_remote_spec("/data/photos"));
        assert!(!is_remote_spec("relative/path"));
        assert!(!is_remote_spec("~/data"));
        // colon after the first slash is a legal (if odd) local file name
        assert!(!is_remote_spec("dir/odd:name"));
        assert!(!is_remote_spec("./odd:name"));
    }

    #[test]
    fn test_absolutize_expands_home_and_relative() {
        if std::env::var_os("HOME").is_some() {
            let home = absolutize("~/data").unwrap();
            assert!(home.is_absolute());
            assert!(!home.to_string_lossy().contains('~'));
        }

        let rel = absolutize("some/dir").unwrap();
        assert!(rel.is_absolute());
        assert!(rel.ends_with("some/dir"));

        let abs = absolutize("/already/abs").unwrap();
        assert_eq!(abs, PathBuf::from("/already/abs"));
    }

    #[test]
    fn test_backup_dir_is_sibling_of_destination() {
        let dir = backup_dir_for(Path::new("/data/photos"), "2024-05-01_12-30-00").unwrap();
        assert_eq!(
            dir,
            PathBuf::from("/data/photos_backup_2024-05-01_12-30-00")
        );
    }

    #[test]
    fn test_backup_dir_deterministic() {
        let a = backup_dir_for(Path::new("/data/photos"), "ts").unwrap();
        let b = backup_dir_for(Path::new("/data/photos"), "ts").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_backup_dir_rejects_root() {
        assert!(backup_dir_for(Path::new("/"), "ts").is_err());
    }

    #[test]
    fn test_validate_source_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(validate_source_dir(tmp.path()).is_ok());
        assert!(validate_source_dir(&tmp.path().join("missing")).is_err());

        let file = tmp.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(validate_source_dir(&file).is_err());
    }
}
