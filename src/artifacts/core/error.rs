//! Domain error kinds
//!
//! These are raised wrapped in `anyhow::Error` so they carry context like any
//! other failure, while callers that need to branch on the kind can still
//! `downcast_ref::<RepositoryError>()`.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("object {0} is not a commit")]
    NotACommit(ObjectId),

    #[error("branch '{0}' not found")]
    BranchNotFound(String),

    #[error("branch '{0}' has no commits yet")]
    BranchHasNoCommits(String),

    #[error("no commits yet, cannot create branch '{0}'")]
    NoCommitsYet(String),

    #[error("invalid branch name: '{0}'")]
    InvalidBranchName(String),

    #[error("invalid object id: '{0}'")]
    InvalidObjectId(String),

    #[error("not a snap repository: {}", .0.display())]
    NotARepository(PathBuf),
}

impl RepositoryError {
    /// Extract the domain error kind from an `anyhow` chain, if any
    pub fn kind_of(error: &anyhow::Error) -> Option<&RepositoryError> {
        error.chain().find_map(|cause| cause.downcast_ref())
    }
}
