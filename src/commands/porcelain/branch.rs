use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::outcome::Outcome;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Create a branch pointing at the current HEAD commit
    ///
    /// An existing branch of the same name is left untouched.
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<Outcome<ObjectId>> {
        let _lock = self.lock()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let outcome = self.refs().create_branch(&branch_name)?;

        if let Some(reason) = outcome.no_op_reason() {
            writeln!(self.writer(), "{}", reason)?;
        }

        Ok(outcome)
    }

    /// Print every branch in name order, marking the one HEAD is on
    pub fn list_branches(&self) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let current_branch = self.refs().current_branch()?;

        for branch_name in self.refs().list_branches()? {
            if current_branch.as_ref() == Some(&branch_name) {
                writeln!(self.writer(), "* {}", branch_name.as_ref().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch_name)?;
            }
        }

        Ok(())
    }
}
