// file: src/rsync/mod.rs
// version: 1.0.0
// guid: f8c0d2e4-6071-4ca2-b2e4-60718293c4d5

//! rsync detection, command construction, execution, and output scraping

pub mod plan;
pub mod runner;
pub mod stats;
pub mod version;

pub use plan::SyncPlan;
pub use runner::{RsyncRunner, RunOutcome};
pub use stats::SyncStats;
pub use version::{detect_rsync, RsyncVersion, MIN_VERSION};
