use crate::areas::repository::{DEFAULT_BRANCH, METADATA_DIR, Repository};
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create refs/heads directory")?;

        // reserved for reflog-style history
        fs::create_dir_all(self.path().join(METADATA_DIR).join("logs"))
            .context("Failed to create logs directory")?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs()
            .set_head_branch(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        // make sure the default branch file exists, unborn
        let head_ref_path = self.refs().heads_path().join(DEFAULT_BRANCH);
        if !head_ref_path.exists() {
            fs::write(&head_ref_path, b"").context("Failed to create default branch file")?;
        }

        // the valid empty state of the index is an empty mapping
        let index = self.index();
        if !index.path().exists() {
            fs::write(index.path(), b"{}").context("Failed to create index file")?;
        }
        drop(index);

        writeln!(
            self.writer(),
            "Initialized empty Jot repository in {}",
            self.path().display()
        )?;
        writeln!(self.writer(), "Repository ready for your first commit")?;

        Ok(())
    }
}
