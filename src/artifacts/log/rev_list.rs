use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Iterator over a commit chain, tip first
///
/// Follows parent links until the chain ends. A missing commit object is
/// yielded once as an `Err` item (the caller reports it), and a cycle guard
/// stops the walk on any repeated digest.
pub struct RevList<'r> {
    database: &'r Database,
    current: Option<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: Option<ObjectId>) -> Self {
        RevList {
            database,
            current: start,
            visited: HashSet::new(),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.current.take()?;

        if !self.visited.insert(oid.clone()) {
            return None;
        }

        match self.database.load_commit(&oid) {
            Ok(Some(commit)) => {
                self.current = commit.parent().cloned();
                Some(Ok((oid, commit)))
            }
            Ok(None) => Some(Err(anyhow::anyhow!("Commit {} not found", oid))),
            Err(err) => Some(Err(err)),
        }
    }
}
