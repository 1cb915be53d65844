use crate::areas::repository::Repository;
use crate::artifacts::core::report;
use crate::artifacts::status::inspector::Inspector;
use std::io::Write;

impl Repository {
    /// Delete every untracked file reported by status
    ///
    /// Without `force`, asks for confirmation first; any non-affirmative
    /// answer aborts. Deletion is best-effort: a failing path is reported
    /// and the rest of the batch proceeds.
    pub fn clean(&mut self, force: bool) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;
        let status = Inspector::new(self).collect(&index)?;
        drop(index);

        if status.untracked.is_empty() {
            writeln!(self.writer(), "No untracked files to clean")?;
            return Ok(());
        }

        writeln!(self.writer(), "The following files would be removed:")?;
        for path in &status.untracked {
            writeln!(self.writer(), "  {}", report::highlight(path))?;
        }

        if !force && !self.confirm("\nRemove these files? [y/N] ")? {
            writeln!(self.writer(), "Aborting clean operation")?;
            return Ok(());
        }

        for path in &status.untracked {
            match self.workspace().remove_file(path) {
                Ok(()) => writeln!(self.writer(), "Removed {}", path)?,
                Err(err) => writeln!(
                    self.writer(),
                    "{}",
                    report::error(&format!("Error removing {}: {}", path, err)),
                )?,
            }
        }

        Ok(())
    }

    fn confirm(&self, prompt: &str) -> anyhow::Result<bool> {
        write!(self.writer(), "{}", prompt)?;
        self.writer().flush()?;

        let mut answer = String::new();
        self.input().read_line(&mut answer)?;

        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}
