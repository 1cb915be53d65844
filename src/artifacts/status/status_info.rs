/// Working-tree status partition
///
/// Staged buckets compare the index against the HEAD commit's tree; unstaged
/// buckets compare the working directory against the index or, for paths not
/// in the index, against the HEAD tree. All buckets are sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub staged_new: Vec<String>,
    pub staged_modified: Vec<String>,
    pub staged_deleted: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
    pub untracked: Vec<String>,
}

impl StatusReport {
    pub fn has_staged_changes(&self) -> bool {
        !self.staged_new.is_empty()
            || !self.staged_modified.is_empty()
            || !self.staged_deleted.is_empty()
    }

    pub fn has_unstaged_changes(&self) -> bool {
        !self.modified.is_empty() || !self.deleted.is_empty()
    }

    /// Paths `add .` would sweep up
    pub fn has_changes_to_add(&self) -> bool {
        self.has_unstaged_changes() || !self.untracked.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_staged_changes() && !self.has_changes_to_add()
    }
}
