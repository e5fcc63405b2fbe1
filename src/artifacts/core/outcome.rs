//! Named outcomes for operations that can legitimately do nothing
//!
//! Benign no-ops (re-initializing, committing an unchanged index, creating a
//! branch that already exists) are reported as data so the command layer can
//! branch on them without treating them as failures.

/// Why an operation chose not to change anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOpReason {
    /// The control directory already exists
    AlreadyInitialized,
    /// The index is empty
    NothingToCommit,
    /// The index matches the parent commit's files exactly
    NoChanges,
    /// A branch with this name already exists and was left untouched
    BranchExists(String),
}

impl std::fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoOpReason::AlreadyInitialized => write!(f, "repository already initialized"),
            NoOpReason::NothingToCommit => write!(f, "nothing to commit"),
            NoOpReason::NoChanges => write!(f, "no changes added to commit"),
            NoOpReason::BranchExists(name) => write!(f, "a branch named '{}' already exists", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Done(T),
    NoOp(NoOpReason),
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::NoOp(_) => None,
        }
    }

    pub fn no_op_reason(&self) -> Option<&NoOpReason> {
        match self {
            Outcome::Done(_) => None,
            Outcome::NoOp(reason) => Some(reason),
        }
    }
}
