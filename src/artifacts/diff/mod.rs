//! Diffing between snapshots
//!
//! - `tree_diff`: which paths changed between two file sets
//! - `line_diff`: what changed inside one file, line by line

pub mod line_diff;
pub mod tree_diff;
