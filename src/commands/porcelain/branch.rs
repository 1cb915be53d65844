use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::report;
use std::io::Write;

impl Repository {
    /// Create a branch at the current commit, or list branches when no name
    /// is given
    pub fn branch(&mut self, name: Option<&str>) -> anyhow::Result<()> {
        match name {
            Some(name) => {
                self.create_branch(name)?;
            }
            None => self.list_branches()?,
        }

        Ok(())
    }

    pub fn create_branch(&mut self, name: &str) -> anyhow::Result<bool> {
        let branch_name = match BranchName::try_parse(name.to_string()) {
            Ok(branch_name) => branch_name,
            Err(err) => {
                writeln!(
                    self.writer(),
                    "{}",
                    report::error(&format!("Error: {}", err)),
                )?;
                return Ok(false);
            }
        };

        if self.refs().branch_exists(&branch_name) {
            writeln!(
                self.writer(),
                "{}",
                report::error(&format!("Error: Branch '{}' already exists", branch_name)),
            )?;
            return Ok(false);
        }

        // a new branch points where HEAD points, or nowhere in an unborn repo
        let current_commit = self.refs().head_commit()?;
        self.refs()
            .create_branch(&branch_name, current_commit.as_ref())?;

        let position = current_commit
            .map(|oid| oid.to_short_oid())
            .unwrap_or_else(|| "HEAD".to_string());
        writeln!(
            self.writer(),
            "Created branch '{}' at {}",
            branch_name,
            report::highlight(&position)
        )?;

        Ok(true)
    }

    fn list_branches(&self) -> anyhow::Result<()> {
        let branches = self.refs().list_branches()?;

        if branches.is_empty() {
            writeln!(self.writer(), "{}", report::info("No branches found"))?;
            return Ok(());
        }

        let current_branch = self.refs().current_branch()?;

        writeln!(self.writer(), "{}", report::bold("Branches:"))?;
        for branch in branches {
            let position = self
                .refs()
                .read_ref(&branch)?
                .map(|oid| oid.to_short_oid())
                .unwrap_or_default();

            if Some(&branch) == current_branch.as_ref() {
                writeln!(
                    self.writer(),
                    "{} (current) - {}",
                    report::success(&format!("* {}", branch)),
                    position
                )?;
            } else {
                writeln!(
                    self.writer(),
                    "  {} - {}",
                    report::highlight(branch.as_ref()),
                    position
                )?;
            }
        }

        Ok(())
    }
}
