use crate::areas::refs::HeadState;
use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileChangeType;
use crate::artifacts::status::status_info::StatusInfo;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

const LABEL_WIDTH: usize = 8;

impl Repository {
    /// Report how the working tree and the index differ from HEAD
    pub async fn status(&self, porcelain: bool) -> anyhow::Result<StatusInfo> {
        let _lock = self.lock()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let status_info = self.status_report().initialize(&index)?;

        if porcelain {
            self.print_porcelain_format(&status_info)?;
        } else {
            self.print_long_format(&status_info)?;
        }

        Ok(status_info)
    }

    fn print_porcelain_format(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        for (path, change) in status_info.changeset() {
            writeln!(
                self.writer(),
                "{} {}",
                change.porcelain_code(),
                path.display()
            )?;
        }

        Ok(())
    }

    fn print_long_format(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        match self.refs().head_state()? {
            HeadState::Branch(branch_name) => {
                writeln!(self.writer(), "On branch {}", branch_name)?
            }
            HeadState::Detached(oid) => writeln!(
                self.writer(),
                "{}",
                format!("HEAD detached at {}", oid.to_short_oid()).red()
            )?,
            HeadState::Unset => {}
        }

        if self.refs().resolve_head()?.is_none() {
            writeln!(self.writer(), "\nNo commits yet")?;
        }

        if status_info.is_clean() {
            writeln!(self.writer(), "\nnothing to commit, working tree clean")?;
            return Ok(());
        }

        self.print_changes(
            "Changes to be committed:",
            status_info.staged_changes().collect(),
        )?;
        self.print_changes(
            "Changes not staged for commit:",
            status_info.unstaged_changes().collect(),
        )?;

        let untracked = status_info
            .paths_with(FileChangeType::Untracked)
            .collect::<Vec<_>>();
        if !untracked.is_empty() {
            writeln!(self.writer(), "\nUntracked files:")?;
            for path in untracked {
                writeln!(
                    self.writer(),
                    "{:>width$}{}",
                    "",
                    path.display().to_string().red(),
                    width = LABEL_WIDTH
                )?;
            }
        }

        Ok(())
    }

    fn print_changes(
        &self,
        header: &str,
        changes: Vec<(&PathBuf, &FileChangeType)>,
    ) -> anyhow::Result<()> {
        if changes.is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "\n{}", header)?;
        for (path, change) in changes {
            writeln!(self.writer(), "{}{}", change, path.display())?;
        }

        Ok(())
    }
}
