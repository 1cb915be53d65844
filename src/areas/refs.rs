//! References (branches and HEAD)
//!
//! References are human-readable names pointing to commits:
//!
//! - HEAD: `ref: refs/heads/<branch>` when attached to a branch, or a raw
//!   commit digest when detached
//! - Branches: `refs/heads/*` text files holding a commit digest, or empty
//!   for an unborn branch
//!
//! Branch refs only move forward through commit, checkout -b, and rebase;
//! nothing here mutates commit objects.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Current position: a branch, or a raw commit (detached)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Branch(BranchName),
    Detached(ObjectId),
}

/// Reference manager over `.jot/HEAD` and `.jot/refs/heads/*`
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.jot`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.heads_path().join(name.as_ref())
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// Parse the HEAD file into the current position
    pub fn read_head(&self) -> anyhow::Result<Head> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("Unable to read HEAD at {}", head_path.display()))?;
        let content = content.trim();

        let symref = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        match symref {
            Some(captures) => Ok(Head::Branch(BranchName::try_parse(captures[1].to_string())?)),
            None => Ok(Head::Detached(ObjectId::try_parse(content.to_string())?)),
        }
    }

    /// The current branch, or `None` when HEAD is detached
    pub fn current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        match self.read_head()? {
            Head::Branch(name) => Ok(Some(name)),
            Head::Detached(_) => Ok(None),
        }
    }

    /// The commit HEAD points at, through the branch ref when attached
    ///
    /// `None` for an unborn branch (empty ref file).
    pub fn head_commit(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.read_head()? {
            Head::Branch(name) => self.read_ref(&name),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    /// Read a branch ref; `None` means the branch is unborn
    pub fn read_ref(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);
        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("Unable to read ref {}", branch_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string())?))
        }
    }

    /// Create a branch ref pointing at a commit (or empty when unborn)
    pub fn create_branch(&self, name: &BranchName, oid: Option<&ObjectId>) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            anyhow::bail!("branch {} already exists", name);
        }

        self.write_ref_file(
            &self.branch_path(name),
            oid.map(|oid| oid.as_ref()).unwrap_or(""),
        )
    }

    /// Advance a branch ref to a new commit
    pub fn update_ref(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.write_ref_file(&self.branch_path(name), oid.as_ref())
    }

    /// Attach HEAD to a branch
    pub fn set_head_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        self.write_ref_file(&self.head_path(), &format!("ref: refs/heads/{}", name))
    }

    fn write_ref_file(&self, path: &Path, content: &str) -> anyhow::Result<()> {
        // hierarchical branch names need their parent directories
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!("failed to resolve parent directory for ref file {:?}", path)
        })?)?;

        std::fs::write(path, content)
            .with_context(|| format!("failed to write ref file at {:?}", path))?;

        Ok(())
    }

    /// List every branch ref, sorted by name
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();
        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(&heads_path).ok()?;
                BranchName::try_parse(relative.to_string_lossy().to_string()).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }
}
