//! Display models for CLI output
//!
//! Converts API types into rows for table and JSON output.

pub mod display;

pub use display::{AppDisplay, RecoveryPointDisplay, StagedResourceDisplay};
