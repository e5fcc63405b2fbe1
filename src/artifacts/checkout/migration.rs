//! Checkout migration
//!
//! Applies the move from one file set to another onto the working tree:
//!
//! 1. Delete every path the current set tracks and the target does not
//! 2. Write every path of the target set, whether it changed or not
//!
//! Deletions strictly precede writes, so a path that turns from a file into
//! a directory (or back) is cleared before its new shape is written.
//!
//! ## Failure Handling
//!
//! A file that is already gone counts as deleted. Any other deletion failure
//! is logged, recorded in the report and skipped. Failing to write a target
//! file aborts the migration.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::diff::tree_diff::TreeDiff;
use crate::artifacts::objects::commit::FileSet;
use anyhow::Context;
use std::path::PathBuf;

/// What a migration did to the working tree
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub deleted: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    /// Paths that could not be deleted, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

pub struct Migration<'r> {
    workspace: &'r Workspace,
    database: &'r Database,
    tree_diff: TreeDiff,
    new_files: &'r FileSet,
}

impl<'r> Migration<'r> {
    pub fn new(
        workspace: &'r Workspace,
        database: &'r Database,
        current_files: &FileSet,
        new_files: &'r FileSet,
    ) -> Self {
        Migration {
            workspace,
            database,
            tree_diff: TreeDiff::between(current_files, new_files),
            new_files,
        }
    }

    pub fn tree_diff(&self) -> &TreeDiff {
        &self.tree_diff
    }

    pub fn apply_changes(&self) -> anyhow::Result<MigrationReport> {
        let mut report = MigrationReport::default();

        self.delete_stale_files(&mut report);
        self.write_new_files(&mut report)?;

        Ok(report)
    }

    fn delete_stale_files(&self, report: &mut MigrationReport) {
        for (path, _) in self.tree_diff.deleted() {
            match self.workspace.remove_file(path) {
                Ok(true) => report.deleted.push(path.clone()),
                Ok(false) => {
                    tracing::debug!("{:?} was already absent from the working tree", path);
                }
                Err(e) => {
                    tracing::warn!("could not delete {:?}: {:#}", path, e);
                    report.failed.push((path.clone(), format!("{:#}", e)));
                }
            }
        }
    }

    fn write_new_files(&self, report: &mut MigrationReport) -> anyhow::Result<()> {
        for (path, oid) in self.new_files {
            let blob = self
                .database
                .load_blob(oid)
                .with_context(|| format!("cannot restore {:?}", path))?;

            self.workspace.write_file(path, blob.content())?;
            report.written.push(path.clone());
        }

        Ok(())
    }
}
