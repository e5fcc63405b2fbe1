use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::{Migration, MigrationReport};
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around, make experimental
changes and commit them, and you can discard any commits you make in this
state without impacting any branches by performing another checkout.

If you want to create a new branch to retain commits you create, you may
do so (now or later) by using the branch command. Example:

    snap branch <new-branch-name>
"#;

/// What a checkout target resolved to
enum CheckoutTarget {
    Branch(BranchName, ObjectId),
    Detached(ObjectId),
}

impl CheckoutTarget {
    fn oid(&self) -> &ObjectId {
        match self {
            CheckoutTarget::Branch(_, oid) | CheckoutTarget::Detached(oid) => oid,
        }
    }
}

impl Repository {
    /// Rewrite the working tree to match a branch (or a commit) and move HEAD
    ///
    /// The index is emptied afterwards. Local edits to tracked files are
    /// overwritten.
    pub async fn checkout(&mut self, target: &str) -> anyhow::Result<MigrationReport> {
        let _lock = self.lock()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let target = self.resolve_checkout_target(target)?;
        let target_commit = self.database().load_commit(target.oid())?;

        let current_branch = self.refs().current_branch()?;
        let current_oid = self.refs().resolve_head()?;
        let current_files = Inspector::new(self).head_files()?;

        let report = Migration::new(
            self.workspace(),
            self.database(),
            &current_files,
            target_commit.files(),
        )
        .apply_changes()?;

        for (path, reason) in &report.failed {
            eprintln!("warning: unable to remove '{}': {}", path.display(), reason);
        }

        match &target {
            CheckoutTarget::Branch(branch_name, _) => self.refs().switch_to(branch_name)?,
            CheckoutTarget::Detached(oid) => self.refs().detach_to(oid)?,
        }

        index.clear();
        index.write_updates()?;

        match &target {
            CheckoutTarget::Branch(branch_name, _) => {
                if current_branch.as_ref() == Some(branch_name) {
                    eprintln!("Already on '{}'", branch_name);
                } else {
                    eprintln!("Switched to branch '{}'", branch_name);
                }
            }
            CheckoutTarget::Detached(oid) => {
                if let Some(current_oid) = current_oid
                    && current_branch.is_none()
                    && current_oid != *oid
                    && let Some(previous) = self.database().try_load_commit(&current_oid)?
                {
                    Self::print_head_position("Previous HEAD position was", &current_oid, &previous);
                }
                if current_branch.is_some() {
                    eprintln!("Note: checking out '{}'.\n{}", oid, DETACHMENT_NOTICE);
                }
                Self::print_head_position("HEAD is now at", oid, &target_commit);
            }
        }

        Ok(report)
    }

    fn resolve_checkout_target(&self, target: &str) -> anyhow::Result<CheckoutTarget> {
        if let Ok(branch_name) = BranchName::try_parse(target.to_string()) {
            match self.refs().read_branch(&branch_name)? {
                Some(Some(oid)) => return Ok(CheckoutTarget::Branch(branch_name, oid)),
                Some(None) => {
                    return Err(RepositoryError::BranchHasNoCommits(target.to_string()).into());
                }
                None => {}
            }
        }

        if ObjectId::is_valid(target) {
            let oid = ObjectId::try_parse(target.to_string())?;
            if self.database().exists(&oid) {
                return Ok(CheckoutTarget::Detached(oid));
            }
        }

        Err(RepositoryError::BranchNotFound(target.to_string()).into())
    }

    fn print_head_position(message: &str, oid: &ObjectId, commit: &Commit) {
        eprintln!("{} {} {}", message, oid.to_short_oid(), commit.short_message());
    }
}
