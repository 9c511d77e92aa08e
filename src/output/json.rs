//! JSON output formatting

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Number of items in `data`
    pub count: usize,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T, count: usize) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                version: env!("CARGO_PKG_VERSION").to_string(),
                count,
            },
        }
    }
}

/// Format a list as pretty-printed JSON inside the metadata envelope
pub fn format_json<T: Serialize>(data: &[T]) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data, data.len());
    serde_json::to_string_pretty(&output)
}
