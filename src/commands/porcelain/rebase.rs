use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::report;
use std::io::Write;

impl Repository {
    /// Replay the current branch's commits onto the target branch's tip
    ///
    /// The walk follows only the current branch's ancestor chain looking for
    /// the target tip; there is no merge-base search, so a target that has
    /// advanced past the fork point is reported as having no common
    /// ancestor. Replayed commits are written as new objects through the
    /// content-addressed store and the originals remain, unreferenced. No
    /// content re-application and no conflict detection: trees are assumed
    /// valid as-is.
    pub fn rebase(&mut self, target_branch: &str) -> anyhow::Result<bool> {
        let target_name = match BranchName::try_parse(target_branch.to_string()) {
            Ok(target_name) => target_name,
            Err(err) => {
                writeln!(
                    self.writer(),
                    "{}",
                    report::error(&format!("Error: {}", err)),
                )?;
                return Ok(false);
            }
        };

        if !self.refs().branch_exists(&target_name) {
            writeln!(
                self.writer(),
                "{}",
                report::error(&format!("Error: Branch '{}' does not exist", target_name)),
            )?;
            return Ok(false);
        }

        let Some(current_branch) = self.refs().current_branch()? else {
            writeln!(
                self.writer(),
                "{}",
                report::error("Error: Cannot rebase in detached HEAD state"),
            )?;
            return Ok(false);
        };

        let target_tip = self.refs().read_ref(&target_name)?;
        let current_tip = self.refs().read_ref(&current_branch)?;

        if current_tip == target_tip {
            writeln!(self.writer(), "Already up to date with '{}'", target_name)?;
            return Ok(true);
        }

        // an unborn target tip can never appear on the chain
        let Some(target_tip) = target_tip else {
            writeln!(
                self.writer(),
                "{}",
                report::error("Error: Branches do not share a common ancestor"),
            )?;
            return Ok(false);
        };

        // collect the current chain from the tip down to the target tip
        let mut to_replay = Vec::new();
        let mut cursor = current_tip;
        let reached_target = loop {
            match cursor {
                None => break false,
                Some(oid) if oid == target_tip => break true,
                Some(oid) => {
                    let Some(commit) = self.database().load_commit(&oid)? else {
                        writeln!(
                            self.writer(),
                            "{}",
                            report::error(&format!("Error: Commit {} not found", oid)),
                        )?;
                        return Ok(false);
                    };
                    cursor = commit.parent().cloned();
                    to_replay.push(commit);
                }
            }
        };

        if !reached_target {
            writeln!(
                self.writer(),
                "{}",
                report::error("Error: Branches do not share a common ancestor"),
            )?;
            return Ok(false);
        }

        // replay oldest first, chaining each rewrite onto the previous one
        to_replay.reverse();
        let mut new_parent = target_tip;
        for mut commit in to_replay {
            commit.set_parent(Some(new_parent));
            new_parent = self.database().store_commit(&commit)?;
        }

        self.refs().update_ref(&current_branch, &new_parent)?;

        writeln!(
            self.writer(),
            "{}",
            report::success(&format!(
                "Successfully rebased '{}' onto '{}'",
                current_branch, target_name
            )),
        )?;

        Ok(true)
    }
}
