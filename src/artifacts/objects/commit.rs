//! Commit object
//!
//! Commits are immutable snapshots chained by parent pointers. Each commit
//! carries the full tree staged at commit time, not a diff against its
//! parent: the tree only holds the paths that were explicitly staged.
//!
//! ## Format
//!
//! Canonical JSON with stable field order:
//!
//! ```text
//! {"message": ..., "parent": <digest|null>, "timestamp": <secs>, "tree": {...}}
//! ```
//!
//! The object ID is the SHA-1 of that serialization, so re-serializing an
//! unchanged commit reproduces the same digest.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::TreeEntry;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Tree = BTreeMap<String, TreeEntry>;

/// Commit record: message, parent link, timestamp, and staged tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    message: String,
    parent: Option<ObjectId>,
    timestamp: i64,
    tree: Tree,
}

impl Commit {
    pub fn new(message: String, parent: Option<ObjectId>, timestamp: i64, tree: Tree) -> Self {
        Commit {
            message,
            parent,
            timestamp,
            tree,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Re-parent the commit (used by rebase replay)
    pub fn set_parent(&mut self, parent: Option<ObjectId>) {
        self.parent = parent;
    }

    /// Count of non-deleted entries in the tree
    pub fn changed_count(&self) -> usize {
        self.tree.values().filter(|e| !e.is_deleted()).count()
    }

    /// Count of deletion entries in the tree
    pub fn deleted_count(&self) -> usize {
        self.tree.values().filter(|e| e.is_deleted()).count()
    }

    /// Canonical serialization the object ID is computed over
    pub fn serialize(&self) -> anyhow::Result<Vec<u8>> {
        serde_json::to_vec(self).context("Unable to serialize commit")
    }

    pub fn deserialize(bytes: &[u8]) -> anyhow::Result<Self> {
        serde_json::from_slice(bytes).context("Unable to parse commit object")
    }

    pub fn object_id(&self) -> anyhow::Result<ObjectId> {
        Ok(ObjectId::hash_bytes(&self.serialize()?))
    }
}
