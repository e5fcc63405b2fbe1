use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::FileSet;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChangeType;
use derive_new::new;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Hash every non-excluded file of the working tree
    pub fn working_files(&self) -> anyhow::Result<FileSet> {
        let workspace = self.repository.workspace();

        workspace
            .list_files(None)?
            .into_iter()
            .map(|path| {
                let oid = workspace.parse_blob(&path)?.object_id()?;
                Ok::<_, anyhow::Error>((path, oid))
            })
            .collect()
    }

    /// Files of the commit HEAD resolves to
    ///
    /// Empty when HEAD is unborn or its commit is missing from the store.
    pub fn head_files(&self) -> anyhow::Result<FileSet> {
        let Some(head_oid) = self.repository.refs().resolve_head()? else {
            return Ok(FileSet::new());
        };

        match self.repository.database().try_load_commit(&head_oid)? {
            Some(commit) => Ok(commit.files().clone()),
            None => {
                tracing::warn!("HEAD points at missing commit {}", head_oid);
                Ok(FileSet::new())
            }
        }
    }

    /// Label one path from its HEAD, staged and working blob IDs
    ///
    /// The first matching rule wins; a clean path gets no label.
    pub fn classify(
        head: Option<&ObjectId>,
        staged: Option<&ObjectId>,
        working: Option<&ObjectId>,
    ) -> Option<FileChangeType> {
        match (head, staged, working) {
            (None, None, Some(_)) => Some(FileChangeType::Untracked),
            (_, Some(s), Some(w)) if s != w => Some(FileChangeType::Modified),
            (Some(h), None, Some(w)) if w != h => Some(FileChangeType::Modified),
            (None, Some(_), _) => Some(FileChangeType::StagedNew),
            (Some(h), Some(s), _) if s != h => Some(FileChangeType::StagedModified),
            (Some(_), _, None) => Some(FileChangeType::DeletedStaged),
            _ => None,
        }
    }
}
