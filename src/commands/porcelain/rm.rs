use crate::areas::repository::{Repository, now_timestamp};
use crate::artifacts::core::report;
use crate::artifacts::objects::tree::TreeEntry;
use std::io::Write;

impl Repository {
    /// Remove a file from the working tree and stage its deletion
    ///
    /// Untracked paths are refused unless `force` is set. The deletion is
    /// only staged once the on-disk delete (when the file exists) succeeded.
    pub fn remove(&mut self, path: &str, force: bool) -> anyhow::Result<bool> {
        let Ok(relative) = self.workspace().relativize(path) else {
            writeln!(
                self.writer(),
                "{}",
                report::error(&format!("Error: '{}' is not tracked", path)),
            )?;
            return Ok(false);
        };

        let is_tracked = self.tracked_files()?.contains_key(&relative);

        if !is_tracked && !force {
            writeln!(
                self.writer(),
                "{}",
                report::error(&format!("Error: '{}' is not tracked", relative)),
            )?;
            return Ok(false);
        }

        if self.workspace().exists(&relative) {
            match self.workspace().remove_file(&relative) {
                Ok(()) => {
                    writeln!(self.writer(), "Removed '{}' from workspace", relative)?;
                }
                Err(err) => {
                    writeln!(
                        self.writer(),
                        "{}",
                        report::error(&format!("Error removing '{}': {}", relative, err)),
                    )?;
                    return Ok(false);
                }
            }
        }

        // force stages the deletion even for untracked paths
        let mut index = self.index();
        index.rehydrate()?;
        index.stage(
            relative.clone(),
            TreeEntry::Deleted {
                timestamp: now_timestamp(),
            },
        );
        index.write_updates()?;
        drop(index);

        writeln!(self.writer(), "Staged deletion of '{}'", relative)?;

        Ok(true)
    }
}
