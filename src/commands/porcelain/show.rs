use crate::areas::repository::Repository;
use crate::artifacts::diff::line_diff::{Hunk, LineTag, diff_lines, is_binary};
use crate::artifacts::diff::tree_diff::TreeChangeType;
use crate::artifacts::diff::tree_diff::TreeDiff;
use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Print a commit and the changes it makes to its parent's files
    pub fn show(&self, commit_id: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let commit_oid = ObjectId::try_parse(commit_id.to_string())?;
        let commit = self.database().load_commit(&commit_oid)?;

        self.show_commit_medium(&commit_oid, &commit)?;

        let parent_files = CommitGraph::new(self.database()).parent_files(commit.parent())?;
        let tree_diff = TreeDiff::between(&parent_files, commit.files());

        for (path, change) in tree_diff.changes() {
            writeln!(self.writer())?;
            self.show_file_change(path, change)?;
        }

        Ok(())
    }

    fn show_file_change(&self, path: &Path, change: &TreeChangeType) -> anyhow::Result<()> {
        let path = path.display();
        writeln!(
            self.writer(),
            "{}",
            format!("diff --snap a/{} b/{}", path, path).bold()
        )?;

        match change {
            TreeChangeType::Added(_) => writeln!(self.writer(), "new file")?,
            TreeChangeType::Deleted(_) => writeln!(self.writer(), "deleted file")?,
            TreeChangeType::Modified { .. } => {}
        }

        let old_content = self.blob_content(change.old_oid())?;
        let new_content = self.blob_content(change.new_oid())?;

        if is_binary(&old_content) || is_binary(&new_content) {
            writeln!(self.writer(), "Binary files differ")?;
            return Ok(());
        }

        let old_label = match change.old_oid() {
            Some(_) => format!("a/{}", path),
            None => "/dev/null".to_string(),
        };
        let new_label = match change.new_oid() {
            Some(_) => format!("b/{}", path),
            None => "/dev/null".to_string(),
        };
        writeln!(self.writer(), "{}", format!("--- {}", old_label).bold())?;
        writeln!(self.writer(), "{}", format!("+++ {}", new_label).bold())?;

        for hunk in diff_lines(&old_content, &new_content) {
            self.show_hunk(&hunk)?;
        }

        Ok(())
    }

    fn show_hunk(&self, hunk: &Hunk) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header.cyan())?;

        for line in &hunk.lines {
            let text = format!("{}{}", line.tag.marker(), line.text);
            match line.tag {
                LineTag::Insert => writeln!(self.writer(), "{}", text.green())?,
                LineTag::Delete => writeln!(self.writer(), "{}", text.red())?,
                LineTag::Equal => writeln!(self.writer(), "{}", text)?,
            }
        }

        Ok(())
    }

    fn blob_content(&self, oid: Option<&ObjectId>) -> anyhow::Result<Bytes> {
        match oid {
            Some(oid) => Ok(self.database().load_blob(oid)?.content().clone()),
            None => Ok(Bytes::new()),
        }
    }
}
