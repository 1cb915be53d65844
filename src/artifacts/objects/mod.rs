//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 digests. Two kinds
//! exist:
//!
//! - **Blob**: one file's content (text, or hex-encoded binary)
//! - **Commit**: snapshot record with message, parent link, timestamp, and
//!   the staged tree (path → entry mapping, embedded rather than stored as
//!   a separate object)

pub mod blob;
pub mod commit;
pub mod object_id;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
