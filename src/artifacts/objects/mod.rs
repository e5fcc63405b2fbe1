//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. There are two types:
//!
//! - **Blob**: File content (raw bytes, hashed without any header)
//! - **Commit**: Full snapshot of tracked paths with message, timestamp and parent
//!
//! Both share one namespace in the object store; nothing on disk records which
//! type an object is.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
