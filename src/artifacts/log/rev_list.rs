use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Lazy walk from a commit to the root, following parent links
///
/// A parent that is missing from the store ends the walk with a warning:
/// history simply stops there. Any other failure to load a commit is yielded
/// as an error and ends the walk.
#[derive(Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.try_load_commit(&commit_oid) {
            Ok(Some(commit)) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Ok(None) => {
                tracing::warn!("history ends at missing commit {}", commit_oid);
                None
            }
            Err(e) => Some(Err(e)),
        }
    }
}
