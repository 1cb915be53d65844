use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::core::report;
use crate::artifacts::status::inspector::Inspector;
use crate::artifacts::status::status_info::StatusReport;
use std::io::Write;

impl Repository {
    /// Show the working tree status
    pub fn status(&mut self) -> anyhow::Result<StatusReport> {
        let mut index = self.index();
        index.rehydrate()?;

        match self.refs().read_head()? {
            Head::Branch(branch) => writeln!(
                self.writer(),
                "On branch {}",
                report::success(branch.as_ref())
            )?,
            Head::Detached(oid) => writeln!(
                self.writer(),
                "HEAD detached at {}",
                report::highlight(&oid.to_short_oid())
            )?,
        }

        let status = Inspector::new(self).collect(&index)?;
        drop(index);

        if status.has_staged_changes() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "{}", report::success("Changes to be committed:"))?;
            for path in &status.staged_new {
                writeln!(
                    self.writer(),
                    "  {}",
                    report::success(&format!("new file:   {}", path))
                )?;
            }
            for path in &status.staged_modified {
                writeln!(
                    self.writer(),
                    "  {}",
                    report::warning(&format!("modified:   {}", path))
                )?;
            }
            for path in &status.staged_deleted {
                writeln!(
                    self.writer(),
                    "  {}",
                    report::error(&format!("deleted:    {}", path))
                )?;
            }
        }

        if status.has_unstaged_changes() {
            writeln!(self.writer())?;
            writeln!(
                self.writer(),
                "{}",
                report::warning("Changes not staged for commit:")
            )?;
            for path in &status.modified {
                writeln!(
                    self.writer(),
                    "  {}",
                    report::warning(&format!("modified:   {}", path))
                )?;
            }
            for path in &status.deleted {
                writeln!(
                    self.writer(),
                    "  {}",
                    report::error(&format!("deleted:    {}", path))
                )?;
            }
        }

        if !status.untracked.is_empty() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "{}", report::info("Untracked files:"))?;
            for path in &status.untracked {
                writeln!(self.writer(), "  {}", report::highlight(path))?;
            }
        }

        if status.is_clean() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "{}", report::success("Working tree clean"))?;
        }

        Ok(status)
    }
}
