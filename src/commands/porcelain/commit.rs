use crate::areas::repository::{Repository, now_timestamp};
use crate::artifacts::core::report;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Commit the staged index as a new snapshot on the current branch
    ///
    /// Refuses on an empty index or a detached HEAD. The commit object is
    /// written before the branch ref advances, so a crash in between never
    /// leaves a ref pointing at a nonexistent commit. The index is cleared
    /// only after both succeed.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<Option<ObjectId>> {
        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "Nothing to commit, working tree clean")?;
            return Ok(None);
        }

        let Some(branch) = self.refs().current_branch()? else {
            writeln!(
                self.writer(),
                "{}",
                report::error("Error: Cannot commit in detached HEAD state"),
            )?;
            return Ok(None);
        };

        let parent = self.refs().read_ref(&branch)?;
        let commit = Commit::new(
            message.trim().to_string(),
            parent,
            now_timestamp(),
            index.to_tree(),
        );

        let commit_id = self.database().store_commit(&commit)?;
        self.refs().update_ref(&branch, &commit_id)?;

        index.clear();
        index.write_updates()?;
        drop(index);

        writeln!(
            self.writer(),
            "[{}] {}",
            report::highlight(&commit_id.to_short_oid()),
            commit.short_message()
        )?;
        writeln!(
            self.writer(),
            " {} file(s) changed, {} deletion(s)",
            commit.changed_count(),
            commit.deleted_count()
        )?;

        Ok(Some(commit_id))
    }
}
