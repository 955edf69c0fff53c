// file: src/utils/mod.rs
// version: 1.0.0
// guid: d6a8b0c2-4e6f-4a80-b0c2-4e6f8a90b1c3

//! Utility modules for path handling and validation

pub mod paths;
