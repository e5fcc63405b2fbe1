use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::FileSet;
use crate::artifacts::status::file_change::FileChangeType;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, FileChangeType>;

#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub(crate) head_files: FileSet,
    pub(crate) staged_files: FileSet,
    pub(crate) working_files: FileSet,
    pub(crate) changeset: ChangeSet,
}

impl StatusInfo {
    pub fn is_clean(&self) -> bool {
        self.changeset.is_empty()
    }

    pub fn changeset(&self) -> &ChangeSet {
        &self.changeset
    }

    pub fn head_files(&self) -> &FileSet {
        &self.head_files
    }

    pub fn staged_files(&self) -> &FileSet {
        &self.staged_files
    }

    pub fn working_files(&self) -> &FileSet {
        &self.working_files
    }

    /// Paths carrying `change`, in path order
    pub fn paths_with(&self, change: FileChangeType) -> impl Iterator<Item = &PathBuf> {
        self.changeset
            .iter()
            .filter(move |(_, c)| **c == change)
            .map(|(path, _)| path)
    }

    pub fn staged_changes(&self) -> impl Iterator<Item = (&PathBuf, &FileChangeType)> {
        self.changeset.iter().filter(|(_, c)| c.is_staged())
    }

    pub fn unstaged_changes(&self) -> impl Iterator<Item = (&PathBuf, &FileChangeType)> {
        self.changeset
            .iter()
            .filter(|(_, c)| !c.is_staged() && **c != FileChangeType::Untracked)
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Compare HEAD, the index and the working tree
    ///
    /// Reads only; neither the index nor the working tree is touched.
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let inspector = Inspector::new(self.repository);

        let head_files = inspector.head_files()?;
        let staged_files = index.snapshot();
        let working_files = inspector.working_files()?;

        let changeset = head_files
            .keys()
            .chain(staged_files.keys())
            .chain(working_files.keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(|path| {
                Inspector::classify(
                    head_files.get(path),
                    staged_files.get(path),
                    working_files.get(path),
                )
                .map(|change| (path.clone(), change))
            })
            .collect();

        Ok(StatusInfo {
            head_files,
            staged_files,
            working_files,
            changeset,
        })
    }
}
