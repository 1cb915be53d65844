use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::report;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashMap;
use std::io::Write;

impl Repository {
    /// Show commit history for HEAD, or for every branch with `all`
    pub fn log(&mut self, all: bool) -> anyhow::Result<()> {
        if all {
            self.show_all_logs()
        } else {
            self.show_log()
        }
    }

    fn show_log(&self) -> anyhow::Result<()> {
        let Some(head_commit) = self.refs().head_commit()? else {
            writeln!(self.writer(), "{}", report::info("No commits yet"))?;
            return Ok(());
        };

        writeln!(self.writer(), "{}", report::bold("Commit history:"))?;
        for item in RevList::new(self.database(), Some(head_commit)) {
            let (oid, commit) = match item {
                Ok(entry) => entry,
                Err(err) => {
                    writeln!(
                        self.writer(),
                        "{}",
                        report::error(&format!("Error: {}", err)),
                    )?;
                    break;
                }
            };

            writeln!(
                self.writer(),
                "{} {}",
                report::warning("Commit:"),
                report::highlight(oid.as_ref())
            )?;
            writeln!(
                self.writer(),
                "Date:    {}",
                report::dimmed(&readable_timestamp(commit.timestamp()))
            )?;
            writeln!(
                self.writer(),
                "Message: {}",
                report::bold(commit.message())
            )?;

            let (added, modified, deleted) = partition_tree_paths(&commit);

            if !added.is_empty() {
                writeln!(self.writer(), "{}", report::success("Added files (+):"))?;
                for path in added {
                    writeln!(self.writer(), "  {}", report::success(path))?;
                }
            }
            if !modified.is_empty() {
                writeln!(self.writer(), "{}", report::warning("Modified files (~):"))?;
                for path in modified {
                    writeln!(self.writer(), "  {}", report::warning(path))?;
                }
            }
            if !deleted.is_empty() {
                writeln!(self.writer(), "{}", report::error("Deleted files (-):"))?;
                for path in deleted {
                    writeln!(self.writer(), "  {}", report::error(path))?;
                }
            }

            writeln!(self.writer())?;
        }

        Ok(())
    }

    fn show_all_logs(&self) -> anyhow::Result<()> {
        let mut branch_tips = HashMap::<ObjectId, Vec<BranchName>>::new();
        let mut tips = Vec::new();

        for branch in self.refs().list_branches()? {
            if let Some(tip) = self.refs().read_ref(&branch)? {
                branch_tips.entry(tip.clone()).or_default().push(branch);
                tips.push(tip);
            }
        }

        if tips.is_empty() {
            writeln!(self.writer(), "No commits found in any branch")?;
            return Ok(());
        }

        // walk every branch chain, deduplicating shared history
        let mut all_commits = HashMap::<ObjectId, Commit>::new();
        for tip in tips {
            for item in RevList::new(self.database(), Some(tip)) {
                let Ok((oid, commit)) = item else { break };
                if all_commits.insert(oid, commit).is_some() {
                    break;
                }
            }
        }

        let mut ordered = all_commits.into_iter().collect::<Vec<_>>();
        ordered.sort_by(|a, b| {
            b.1.timestamp()
                .cmp(&a.1.timestamp())
                .then_with(|| a.0.cmp(&b.0))
        });

        let current_branch = self.refs().current_branch()?;

        writeln!(self.writer(), "All commits across branches:")?;
        writeln!(self.writer(), "===========================")?;

        for (oid, commit) in ordered {
            let branches_note = branch_tips
                .get(&oid)
                .map(|branches| {
                    let labels = branches
                        .iter()
                        .map(|branch| {
                            if Some(branch) == current_branch.as_ref() {
                                format!("*{}", branch)
                            } else {
                                branch.to_string()
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!(" ({})", labels)
                })
                .unwrap_or_default();

            writeln!(self.writer(), "Commit: {}{}", oid, branches_note)?;
            writeln!(
                self.writer(),
                "Date: {}",
                readable_timestamp(commit.timestamp())
            )?;
            writeln!(self.writer(), "Message: {}", commit.message())?;

            let (added, modified, deleted) = partition_tree_paths(&commit);
            writeln!(
                self.writer(),
                "Changes: +{} ~{} -{}",
                added.len(),
                modified.len(),
                deleted.len()
            )?;
            writeln!(self.writer())?;
        }

        writeln!(self.writer(), "Legend:")?;
        writeln!(self.writer(), "* - current branch")?;

        Ok(())
    }
}

/// Split a commit's tree into added / modified / deleted path lists
///
/// A root commit's entries read as additions; with a parent present they
/// read as modifications (the tree doesn't record which kind of change a
/// staged path was).
fn partition_tree_paths(commit: &Commit) -> (Vec<&String>, Vec<&String>, Vec<&String>) {
    let mut added = Vec::new();
    let mut modified = Vec::new();
    let mut deleted = Vec::new();

    for (path, entry) in commit.tree() {
        if entry.is_deleted() {
            deleted.push(path);
        } else if commit.parent().is_some() {
            modified.push(path);
        } else {
            added.push(path);
        }
    }

    (added, modified, deleted)
}

fn readable_timestamp(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|utc| {
            utc.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| timestamp.to_string())
}
