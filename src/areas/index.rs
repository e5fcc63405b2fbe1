//! Index (staging area)
//!
//! The index records what will go into the next commit: one blob ID per
//! tracked path, last write wins. It has no history of its own and is wiped
//! after every successful commit and every checkout.
//!
//! ## Index File Format
//!
//! The index file holds a JSON object mapping `/`-separated relative paths to
//! blob IDs, sorted by path:
//! ```text
//! {"a.txt":"<sha>","dir/b.txt":"<sha>"}
//! ```
//! An empty or missing file reads as an empty index.

use crate::artifacts::objects::commit::FileSet;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.snap/index`)
    path: Box<Path>,
    /// Staged paths mapped to blob IDs
    entries: FileSet,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: FileSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    /// Load the index from disk
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .with_context(|| format!("failed to open index file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut().read_to_string(&mut content)?;

        if content.trim().is_empty() {
            return Ok(());
        }

        self.entries = serde_json::from_str(&content)
            .with_context(|| format!("corrupt index file at {:?}", self.path))?;

        Ok(())
    }

    /// Insert or replace the entry for `path`
    pub fn stage(&mut self, path: PathBuf, oid: ObjectId) {
        if self.entries.get(&path) != Some(&oid) {
            self.entries.insert(path, oid);
            self.changed = true;
        }
    }

    /// Remove the entry for `path`; absent paths are a no-op
    pub fn unstage(&mut self, path: &Path) -> bool {
        let removed = self.entries.remove(path).is_some();
        self.changed |= removed;

        removed
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.changed = true;
        }
    }

    /// Current entries, ordered by path
    pub fn snapshot(&self) -> FileSet {
        self.entries.clone()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&PathBuf, &ObjectId)> {
        self.entries.iter()
    }

    /// Persist the index to disk
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let content = serde_json::to_vec(&self.entries).context("Unable to serialize index")?;

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("failed to open index file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(&content)?;

        self.changed = false;

        Ok(())
    }
}
