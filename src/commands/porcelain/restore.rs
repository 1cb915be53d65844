use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::report;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Reset the working tree to an arbitrary commit's snapshot
    ///
    /// Applies the same reconciliation as checkout's file sync, but against
    /// a raw commit digest: HEAD and branch refs are left untouched.
    pub fn restore(&mut self, commit_hash: &str) -> anyhow::Result<bool> {
        let oid = match ObjectId::try_parse(commit_hash.to_string()) {
            Ok(oid) => oid,
            Err(_) => {
                writeln!(
                    self.writer(),
                    "{}",
                    report::error(&format!("Error: Commit {} not found", commit_hash)),
                )?;
                return Ok(false);
            }
        };

        let Some(commit) = self.database().load_commit(&oid)? else {
            writeln!(
                self.writer(),
                "{}",
                report::error(&format!("Error: Commit {} not found", oid)),
            )?;
            return Ok(false);
        };

        Migration::new(self, commit.tree(), true).apply()?;

        writeln!(
            self.writer(),
            "Working directory restored to commit {}",
            report::highlight(&oid.to_short_oid())
        )?;

        Ok(true)
    }
}
