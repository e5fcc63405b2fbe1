//! Commit object
//!
//! Commits represent full snapshots of the tracked tree at a specific point in
//! time. They contain:
//! - A timestamp with timezone offset
//! - The commit message
//! - Every tracked path mapped to its blob ID (not a delta against the parent)
//! - The parent commit ID, absent for a root commit
//!
//! ## Format
//!
//! Commits are stored as compact JSON with a pinned field order, so the same
//! commit always hashes to the same ID:
//! ```text
//! {"timestamp":"2023-01-01T12:00:00+02:00","message":"...","files":{"a.txt":"<sha>"},"parent":null}
//! ```
//! File paths are sorted and use `/` as separator.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::PathBuf;

/// Tracked paths mapped to blob IDs, ordered by path
pub type FileSet = BTreeMap<PathBuf, ObjectId>;

/// Commit object
///
/// Field declaration order is the serialization order; do not reorder.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    message: String,
    files: FileSet,
    parent: Option<ObjectId>,
}

impl Commit {
    pub fn new(
        timestamp: chrono::DateTime<chrono::FixedOffset>,
        message: String,
        files: FileSet,
        parent: Option<ObjectId>,
    ) -> Self {
        Commit {
            timestamp,
            message,
            files,
            parent,
        }
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = serde_json::to_vec(self).context("Unable to serialize commit")?;

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("Invalid commit object")
    }
}

impl Object for Commit {
    fn display(&self) -> String {
        let mut lines = vec![];

        if let Some(parent) = &self.parent {
            lines.push(format!("parent {}", parent));
        }
        lines.push(format!("date {}", self.readable_timestamp()));
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
