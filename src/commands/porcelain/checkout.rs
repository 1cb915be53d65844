use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::report;
use std::io::Write;

impl Repository {
    /// Switch to a branch, reconciling the working tree with its tip
    ///
    /// With `create`, the branch is created at the current commit first.
    /// Uncommitted (staged) changes block the switch; there is no stashing.
    /// HEAD moves only after the file sync succeeded, so an aborted checkout
    /// never leaves HEAD pointing somewhere the working tree doesn't match.
    pub fn checkout(&mut self, branch: &str, create: bool) -> anyhow::Result<bool> {
        if create && !self.create_branch(branch)? {
            return Ok(false);
        }

        let branch_name = match BranchName::try_parse(branch.to_string()) {
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

        if !self.refs().branch_exists(&branch_name) {
            writeln!(
                self.writer(),
                "{}",
                report::error(&format!("Error: Branch '{}' does not exist", branch_name)),
            )?;
            return Ok(false);
        }

        let mut index = self.index();
        index.rehydrate()?;
        if !index.is_empty() {
            writeln!(
                self.writer(),
                "{}",
                report::error(
                    "Error: You have uncommitted changes. Commit or stash them before switching branches."
                ),
            )?;
            return Ok(false);
        }
        drop(index);

        if self.refs().current_branch()? == Some(branch_name.clone()) {
            writeln!(self.writer(), "Already on branch '{}'", branch_name)?;
            return Ok(true);
        }

        let Some(target_oid) = self.refs().read_ref(&branch_name)? else {
            // unborn branch: nothing to reconcile, just move HEAD
            self.refs().set_head_branch(&branch_name)?;
            writeln!(
                self.writer(),
                "Switched to branch '{}' (empty branch)",
                branch_name
            )?;
            return Ok(true);
        };

        let Some(target_commit) = self.database().load_commit(&target_oid)? else {
            writeln!(
                self.writer(),
                "{}",
                report::error(&format!("Error: Commit {} not found", target_oid)),
            )?;
            return Ok(false);
        };

        Migration::new(self, target_commit.tree(), false).apply()?;
        self.refs().set_head_branch(&branch_name)?;

        writeln!(self.writer(), "Switched to branch '{}'", branch_name)?;

        Ok(true)
    }
}
