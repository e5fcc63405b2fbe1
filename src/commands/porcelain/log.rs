use crate::areas::repository::Repository;
use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Print the commit chain from HEAD back to the root commit
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let Some(head_oid) = self.refs().resolve_head()? else {
            writeln!(self.writer(), "No commits yet")?;
            return Ok(());
        };

        let graph = CommitGraph::new(self.database());
        for (index, entry) in graph.walk(Some(head_oid)).enumerate() {
            let (commit_oid, commit) = entry?;
            if opts.oneline {
                self.show_commit_oneline(&commit_oid, &commit)?;
            } else {
                if index > 0 {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(&commit_oid, &commit)?;
            }
        }

        Ok(())
    }

    pub(crate) fn show_commit_medium(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit_oid).yellow()
        )?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit_oid.to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
