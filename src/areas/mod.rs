//! Core repository components
//!
//! This module contains the fundamental building blocks of a snap repository:
//!
//! - `config`: Settings loaded from the environment once per invocation
//! - `database`: Content-addressed object store for blobs and commits
//! - `index`: Staging area mapping tracked paths to blob hashes
//! - `refs`: HEAD and branch pointer management
//! - `repository`: The context value threaded through every operation
//! - `workspace`: Working tree file system operations

pub mod config;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
