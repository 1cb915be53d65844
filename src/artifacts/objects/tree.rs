//! Tree entries
//!
//! A commit's tree maps workspace-relative paths to entries. The same entry
//! type backs the staging index, since a commit consumes the index verbatim.
//!
//! ## Wire format
//!
//! `{"hash": <digest>, "binary": <bool>, "timestamp": <secs>}` for a present
//! file, `{"deleted": true, "timestamp": <secs>}` for a staged deletion.

use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};

/// One path's entry in a commit tree or the staging index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub enum TreeEntry {
    /// A snapshotted file: digest plus binary flag
    Present {
        hash: ObjectId,
        binary: bool,
        timestamp: i64,
    },
    /// A staged/recorded deletion
    Deleted { timestamp: i64 },
}

impl TreeEntry {
    pub fn is_deleted(&self) -> bool {
        matches!(self, TreeEntry::Deleted { .. })
    }

    pub fn hash(&self) -> Option<&ObjectId> {
        match self {
            TreeEntry::Present { hash, .. } => Some(hash),
            TreeEntry::Deleted { .. } => None,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            TreeEntry::Present { timestamp, .. } | TreeEntry::Deleted { timestamp } => *timestamp,
        }
    }
}

/// Raw record bridging the enum to its JSON shape
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    binary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
    timestamp: i64,
}

impl From<TreeEntry> for RawEntry {
    fn from(entry: TreeEntry) -> Self {
        match entry {
            TreeEntry::Present {
                hash,
                binary,
                timestamp,
            } => RawEntry {
                hash: Some(hash),
                binary: Some(binary),
                deleted: None,
                timestamp,
            },
            TreeEntry::Deleted { timestamp } => RawEntry {
                hash: None,
                binary: None,
                deleted: Some(true),
                timestamp,
            },
        }
    }
}

impl TryFrom<RawEntry> for TreeEntry {
    type Error = anyhow::Error;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        match raw {
            RawEntry {
                deleted: Some(true),
                timestamp,
                ..
            } => Ok(TreeEntry::Deleted { timestamp }),
            RawEntry {
                hash: Some(hash),
                binary,
                timestamp,
                ..
            } => Ok(TreeEntry::Present {
                hash,
                binary: binary.unwrap_or(false),
                timestamp,
            }),
            _ => Err(anyhow::anyhow!(
                "Invalid tree entry: neither a hash nor a deletion marker"
            )),
        }
    }
}
