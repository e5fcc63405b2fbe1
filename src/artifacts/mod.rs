//! Snapshot data structures and algorithms
//!
//! - `branch`: Branch and symbolic ref names
//! - `checkout`: Working tree reconciliation between two commits
//! - `core`: Shared utilities (outcomes, error kinds, pager wrapper)
//! - `diff`: File set comparison and line diffs
//! - `log`: Commit creation and history traversal
//! - `objects`: Object types (blob, commit) and their identifiers
//! - `status`: Three-way working tree classification

pub mod branch;
pub mod checkout;
pub mod core;
pub mod diff;
pub mod log;
pub mod objects;
pub mod status;
