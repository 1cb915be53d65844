//! Staging index
//!
//! The index tracks which paths should be included in the next commit. Each
//! entry records staged intent: a snapshotted blob, or a pending deletion.
//!
//! ## Index File Format
//!
//! One JSON object mapping workspace-relative paths to entries, rewritten
//! wholesale on every mutation. A missing or empty file is the valid empty
//! state; a successful commit always leaves the index empty.

use crate::artifacts::objects::commit::Tree;
use crate::artifacts::objects::tree::TreeEntry;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

/// Staging area: uncommitted path → intent records
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.jot/index`)
    path: Box<Path>,
    /// Staged entries mapped by workspace-relative path
    entries: BTreeMap<String, TreeEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, path: &str) -> Option<&TreeEntry> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &TreeEntry)> {
        self.entries.iter()
    }

    /// Stage an entry, replacing any previous intent for the path
    pub fn stage(&mut self, path: String, entry: TreeEntry) {
        self.entries.insert(path, entry);
        self.changed = true;
    }

    /// Drop every staged entry (a commit consumed them)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    /// Snapshot the staged entries as a commit tree
    pub fn to_tree(&self) -> Tree {
        self.entries.clone()
    }

    /// Load the index from disk
    ///
    /// A missing or empty file yields the empty mapping; unparseable content
    /// is an error rather than silently discarded staged intent.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        if content.trim().is_empty() {
            return Ok(());
        }

        self.entries = serde_json::from_str(&content)
            .with_context(|| format!("Corrupt index file {}", self.path.display()))?;

        Ok(())
    }

    /// Persist the index if it changed since loading
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let content = serde_json::to_string(&self.entries).context("Unable to serialize index")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Unable to write index file {}", self.path.display()))?;
        self.changed = false;

        Ok(())
    }
}
