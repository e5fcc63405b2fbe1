use crate::areas::config::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::outcome::{NoOpReason, Outcome};
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the control directory with an empty default branch and index
    ///
    /// Running it again on an initialized repository changes nothing.
    pub async fn init(&mut self) -> anyhow::Result<Outcome<()>> {
        if self.is_initialized() {
            writeln!(
                self.writer(),
                "Reinitialized existing snap repository in {}",
                self.control_path().display()
            )?;
            return Ok(Outcome::NoOp(NoOpReason::AlreadyInitialized));
        }

        fs::create_dir_all(self.control_path())
            .context("Failed to create .snap directory")?;
        let _lock = self.lock()?;

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .snap/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .snap/refs/heads directory")?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs()
            .create_unborn_branch(&default_branch)
            .context("Failed to create default branch")?;
        self.refs()
            .switch_to(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        let index = self.index();
        let mut index = index.lock().await;
        index
            .write_updates()
            .context("Failed to create .snap/index file")?;

        writeln!(
            self.writer(),
            "Initialized empty snap repository in {}",
            self.control_path().display()
        )?;

        Ok(Outcome::Done(()))
    }
}
