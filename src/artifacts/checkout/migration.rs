use crate::areas::repository::Repository;
use crate::artifacts::core::report;
use crate::artifacts::objects::commit::Tree;
use crate::artifacts::objects::tree::TreeEntry;
use std::io::Write;

/// Working-tree reconciliation against a target commit tree
///
/// Computes the minimal set of filesystem changes to realize the target
/// state: currently tracked paths missing from the target are deleted, then
/// every target entry is materialized (or deleted, for deletion entries).
/// File operations are best-effort: a failing path is reported and the rest
/// of the batch proceeds.
pub struct Migration<'r> {
    repository: &'r Repository,
    target_tree: &'r Tree,
    /// Report each restored/deleted path (restore does, checkout doesn't)
    verbose: bool,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, target_tree: &'r Tree, verbose: bool) -> Self {
        Migration {
            repository,
            target_tree,
            verbose,
        }
    }

    pub fn apply(&self) -> anyhow::Result<()> {
        self.remove_stale_files()?;
        self.materialize_target_entries()?;

        Ok(())
    }

    /// Delete tracked paths with no entry at all in the target tree
    ///
    /// Deletion is derived strictly from verified tree membership, never
    /// from wildcards.
    fn remove_stale_files(&self) -> anyhow::Result<()> {
        let tracked = self.repository.tracked_files()?;

        for path in tracked.keys() {
            if self.target_tree.contains_key(path) || !self.repository.workspace().exists(path) {
                continue;
            }

            match self.repository.workspace().remove_file(path) {
                Ok(()) => {
                    if self.verbose {
                        writeln!(self.repository.writer(), "Removed {}", path)?;
                    }
                }
                Err(err) => writeln!(
                    self.repository.writer(),
                    "{}",
                    report::warning(&format!("Warning: Could not remove {}: {}", path, err)),
                )?,
            }
        }

        Ok(())
    }

    fn materialize_target_entries(&self) -> anyhow::Result<()> {
        for (path, entry) in self.target_tree {
            match entry {
                TreeEntry::Deleted { .. } => {
                    if self.repository.workspace().exists(path) {
                        match self.repository.workspace().remove_file(path) {
                            Ok(()) => {
                                if self.verbose {
                                    writeln!(self.repository.writer(), "Deleted {}", path)?;
                                }
                            }
                            Err(err) => writeln!(
                                self.repository.writer(),
                                "{}",
                                report::warning(&format!(
                                    "Warning: Could not remove {}: {}",
                                    path, err
                                )),
                            )?,
                        }
                    } else if self.verbose {
                        writeln!(self.repository.writer(), "Deleted {}", path)?;
                    }
                }
                TreeEntry::Present { hash, binary, .. } => {
                    let Some(blob) = self.repository.database().load_blob(hash, *binary)? else {
                        writeln!(
                            self.repository.writer(),
                            "{}",
                            report::error(&format!("Error: Object {} not found", hash)),
                        )?;
                        continue;
                    };

                    match self.repository.workspace().write_blob(path, &blob) {
                        Ok(()) => {
                            if self.verbose {
                                writeln!(self.repository.writer(), "Restored {}", path)?;
                            }
                        }
                        Err(err) => writeln!(
                            self.repository.writer(),
                            "{}",
                            report::warning(&format!(
                                "Warning: Could not restore {}: {}",
                                path, err
                            )),
                        )?,
                    }
                }
            }
        }

        Ok(())
    }
}
