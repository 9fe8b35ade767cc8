#![warn(missing_docs)]
//! Shared picking fixtures and a JSONL record sink for pick results.

mod fixtures;

use anyhow::Result;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use fixtures::*;

/// One picking query and the objects it hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickRecord {
    /// Human-readable query label.
    pub query: String,
    /// Normalized device coordinates the ray was cast through.
    pub coords: [f32; 2],
    /// Names of the hit objects, in scene order.
    pub hits: Vec<String>,
    /// Scene positions of the hit objects, parallel to `hits`.
    pub indices: Vec<usize>,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append a record to the log.
    pub fn write(&mut self, record: &PickRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        tracing::trace!(query = %record.query, hits = record.hits.len(), "pick record written");
        Ok(())
    }
}
