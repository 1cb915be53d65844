use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusReport;
use derive_new::new;

/// Computes the working-tree status partition
///
/// Pure with respect to repository state: the inspector reads the index, the
/// HEAD tree, and the working directory, and mutates nothing.
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl Inspector<'_> {
    pub fn collect(&self, index: &Index) -> anyhow::Result<StatusReport> {
        let mut report = StatusReport::default();
        let tracked = self.repository.tracked_files()?;

        // index vs. HEAD tree: the staged buckets
        for (path, entry) in index.entries() {
            if entry.is_deleted() {
                report.staged_deleted.push(path.clone());
            } else {
                match tracked.get(path) {
                    None => report.staged_new.push(path.clone()),
                    Some(head_entry) if head_entry.hash() != entry.hash() => {
                        report.staged_modified.push(path.clone())
                    }
                    Some(_) => {}
                }
            }
        }

        // working directory vs. index-or-HEAD, index taking precedence
        for path in self.repository.workspace().list_files()? {
            if let Some(entry) = index.entry(&path) {
                if !entry.is_deleted() {
                    let disk_oid = self.repository.workspace().read_blob(&path)?.object_id()?;
                    if Some(&disk_oid) != entry.hash() {
                        report.modified.push(path);
                    }
                }
            } else if let Some(head_entry) = tracked.get(&path) {
                let disk_oid = self.repository.workspace().read_blob(&path)?.object_id()?;
                if Some(&disk_oid) != head_entry.hash() {
                    report.modified.push(path);
                }
            } else {
                report.untracked.push(path);
            }
        }

        // tracked, unstaged, and gone from disk
        for path in tracked.keys() {
            if index.entry(path).is_none() && !self.repository.workspace().exists(path) {
                report.deleted.push(path.clone());
            }
        }

        Ok(report)
    }
}
