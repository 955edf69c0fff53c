// file: src/cli/mod.rs
// version: 1.0.0
// guid: f4c6d8ea-c6d7-4c08-98ea-c6d7e8f90a12

//! Command line interface for safe-rsync

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::sync_command;
