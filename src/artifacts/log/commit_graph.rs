//! Commit creation
//!
//! A commit freezes the staged file set together with the commit HEAD
//! currently resolves to. Nothing is written when the index is empty or when
//! it matches the parent's files exactly.

use crate::areas::database::Database;
use crate::artifacts::core::outcome::{NoOpReason, Outcome};
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::{Commit, FileSet};
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(new)]
pub struct CommitGraph<'r> {
    database: &'r Database,
}

impl<'r> CommitGraph<'r> {
    /// Files recorded by `parent`
    ///
    /// Empty for a root commit, and also for a parent that does not resolve:
    /// a dangling parent is reported and then treated as no parent at all.
    pub fn parent_files(&self, parent: Option<&ObjectId>) -> anyhow::Result<FileSet> {
        let Some(parent) = parent else {
            return Ok(FileSet::new());
        };

        match self.database.try_load_commit(parent)? {
            Some(commit) => Ok(commit.files().clone()),
            None => {
                tracing::warn!(
                    "parent commit {} is missing from the object store, treating it as a root",
                    parent
                );
                Ok(FileSet::new())
            }
        }
    }

    /// Build and store a commit from `snapshot`
    ///
    /// # Returns
    ///
    /// The new commit and its ID, or the reason nothing was written
    pub fn commit(
        &self,
        message: &str,
        snapshot: FileSet,
        parent: Option<&ObjectId>,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> anyhow::Result<Outcome<(ObjectId, Commit)>> {
        if snapshot.is_empty() {
            return Ok(Outcome::NoOp(NoOpReason::NothingToCommit));
        }

        if snapshot == self.parent_files(parent)? {
            return Ok(Outcome::NoOp(NoOpReason::NoChanges));
        }

        let commit = Commit::new(
            timestamp,
            message.trim().to_string(),
            snapshot,
            parent.cloned(),
        );
        let commit_id = self.database.store(commit.clone())?;
        tracing::debug!("stored commit {}", commit_id);

        Ok(Outcome::Done((commit_id, commit)))
    }

    /// Walk history from `start` back to the root
    pub fn walk(&self, start: Option<ObjectId>) -> RevList<'r> {
        RevList::new(self.database, start)
    }
}
