use crate::areas::index::Index;
use crate::areas::repository::{Repository, now_timestamp};
use crate::artifacts::core::report;
use crate::artifacts::objects::tree::TreeEntry;
use crate::artifacts::status::inspector::Inspector;
use std::io::Write;

impl Repository {
    /// Stage the given paths; `.` stages everything status would report
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        if paths.iter().any(|path| path == ".") {
            self.add_all(&mut index)?;
        } else {
            for path in paths {
                self.add_path(&mut index, path)?;
            }
        }

        index.write_updates()?;

        Ok(())
    }

    fn add_path(&self, index: &mut Index, path: &str) -> anyhow::Result<()> {
        let Ok(relative) = self.workspace().relativize(path) else {
            writeln!(
                self.writer(),
                "{}",
                report::error(&format!("Error: '{}' did not match any files", path)),
            )?;
            return Ok(());
        };

        // a missing path doubles as the deletion-staging mechanism when the
        // last commit still tracks it
        if !self.workspace().exists(&relative) {
            if self.tracked_files()?.contains_key(&relative) {
                index.stage(
                    relative.clone(),
                    TreeEntry::Deleted {
                        timestamp: now_timestamp(),
                    },
                );
                writeln!(self.writer(), "Staged deletion of '{}'", relative)?;
            } else {
                writeln!(
                    self.writer(),
                    "{}",
                    report::error(&format!("Error: '{}' did not match any files", relative)),
                )?;
            }
            return Ok(());
        }

        if self.workspace().ignore().is_ignored(&relative) {
            writeln!(
                self.writer(),
                "Ignoring '{}' (matches ignore pattern)",
                relative
            )?;
            return Ok(());
        }

        let status = if self.tracked_files()?.contains_key(&relative) {
            "modified"
        } else {
            "new file"
        };

        let blob = self.workspace().read_blob(&relative)?;
        let oid = self.database().store_blob(&blob)?;

        index.stage(
            relative.clone(),
            TreeEntry::Present {
                hash: oid,
                binary: blob.is_binary(),
                timestamp: now_timestamp(),
            },
        );

        writeln!(self.writer(), "Staged {}: '{}'", status, relative)?;

        Ok(())
    }

    fn add_all(&self, index: &mut Index) -> anyhow::Result<()> {
        let status = Inspector::new(self).collect(index)?;

        if !status.has_changes_to_add() {
            writeln!(self.writer(), "No changes to add")?;
            return Ok(());
        }

        for path in status
            .modified
            .iter()
            .chain(status.deleted.iter())
            .chain(status.untracked.iter())
        {
            self.add_path(index, path)?;
        }

        Ok(())
    }
}
