//! Command implementations
//!
//! Every user-facing operation is an `impl Repository` block living in
//! `porcelain`. The binary only parses arguments and dispatches here.

pub mod porcelain;
