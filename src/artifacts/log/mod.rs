//! Commit history
//!
//! - `commit_graph`: Freezing the index into new commits
//! - `rev_list`: Lazy traversal from a commit back to the root
//!
//! History is a singly-linked chain per lineage: every commit names at most
//! one parent, so traversal never has to deduplicate.

pub mod commit_graph;
pub mod rev_list;
