// file: src/logging/mod.rs
// version: 1.0.0
// guid: b4e6f8a0-2c4d-4e6f-8a0b-2c4d6e8f0a1b

//! Logging system for safe-rsync

pub mod logger;

pub use logger::init_logger;
