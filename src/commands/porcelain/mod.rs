//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Freeze the index into a new commit
//! - `log`: Show commit history
//! - `show`: Show a commit and its diff against its parent
//! - `branch`: Create or list branches
//! - `checkout`: Reconcile the working tree to a branch or commit
//! - `status`: Show the three-way working tree status

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
pub mod status;
