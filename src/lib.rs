//! snap: a local snapshot tracker
//!
//! Records point-in-time states of a file tree as immutable, content-addressed
//! objects, links them into a branching history and reconstructs any recorded
//! state on demand.
//!
//! - `areas`: the persisted parts of a repository (objects, index, refs, workspace)
//! - `artifacts`: data types and algorithms built on top of the areas
//! - `commands`: user-facing operations implemented on `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
