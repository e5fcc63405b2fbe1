use crate::areas::refs::HeadState;
use crate::areas::repository::Repository;
use crate::artifacts::core::outcome::Outcome;
use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Record the staged files as a new commit on top of HEAD
    ///
    /// On success HEAD (or the branch it points at) moves to the new commit
    /// and the index is emptied.
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<Outcome<ObjectId>> {
        let _lock = self.lock()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let parent = self.refs().resolve_head()?;
        let graph = CommitGraph::new(self.database());

        let outcome = graph.commit(
            message,
            index.snapshot(),
            parent.as_ref(),
            self.config().commit_timestamp(),
        )?;

        let (commit_id, commit) = match outcome {
            Outcome::Done(commit) => commit,
            Outcome::NoOp(reason) => {
                writeln!(self.writer(), "{}", reason)?;
                return Ok(Outcome::NoOp(reason));
            }
        };

        let head_state = self.refs().advance(&commit_id)?;

        index.clear();
        index.write_updates()?;

        let head_name = match &head_state {
            HeadState::Branch(branch_name) => branch_name.to_string(),
            HeadState::Detached(_) | HeadState::Unset => "detached HEAD".to_string(),
        };
        let is_root = if commit.is_root() { " (root-commit)" } else { "" };

        writeln!(
            self.writer(),
            "[{}{} {}] {}",
            head_name,
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        if head_state.is_detached() {
            eprintln!(
                "Note: HEAD is detached, no branch follows {}. Use the branch command to keep it.",
                commit_id.to_short_oid()
            );
        }

        Ok(Outcome::Done(commit_id))
    }
}
