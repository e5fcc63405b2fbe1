//! Checkout (working tree reconciliation)
//!
//! Moving to another commit rewrites the working tree so that it holds
//! exactly the target commit's files: paths only the current commit tracks
//! are deleted first, then every target file is written out. Local edits are
//! not protected; reconciliation overwrites unconditionally.

pub mod migration;
