//! Working tree status inspection
//!
//! Status compares three snapshots of the repository (the HEAD commit's
//! files, the index and the freshly hashed working tree) and gives each path
//! at most one label.
//!
//! ## Components
//!
//! - `file_change`: the labels and their short codes
//! - `inspector`: snapshot loading and the per-path classification rules
//! - `status_info`: the aggregated report

pub mod file_change;
pub mod inspector;
pub mod status_info;
