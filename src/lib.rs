// file: src/lib.rs
// version: 1.0.0
// guid: 7c2d4e8f-1a3b-4c5d-9e6f-0a1b2c3d4e5f

//! # safe-rsync
//!
//! A safer wrapper around the external `rsync` binary for ad-hoc local
//! directory synchronization. Files that rsync would delete or overwrite at
//! the destination are preserved in a timestamped backup directory, the
//! run's output is streamed to both the terminal and a timestamped log
//! file, and a human-readable summary is scraped from rsync's statistics.
//!
//! All of the actual synchronization work is delegated to `rsync` itself;
//! this crate provides argument validation, command construction, output
//! capture, and reporting.

pub mod cli;
pub mod error;
pub mod logging;
pub mod reporter;
pub mod rsync;
pub mod utils;

pub use error::{Result, SafeRsyncError};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
