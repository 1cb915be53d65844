//! jot: a local, single-user version-control engine
//!
//! Snapshots file content into a content-addressable object store, tracks
//! pending changes in a staging index, links snapshots into per-branch
//! commit history, and reconciles the working directory against any point
//! in that history.

pub mod areas;
pub mod artifacts;
pub mod commands;
