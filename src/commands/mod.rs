//! Command implementations
//!
//! User-facing operations are implemented as `impl Repository` blocks, one
//! file per command under `porcelain`. Each command reports its outcome
//! through the repository writer and returns a negative result (rather than
//! an error) for recoverable conditions.

pub mod porcelain;
