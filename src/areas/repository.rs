use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::ignore::IgnoreList;
use crate::artifacts::objects::commit::Tree;
use std::cell::{RefCell, RefMut};
use std::io::BufRead;
use std::path::Path;

/// Name of the repository metadata directory
pub const METADATA_DIR: &str = ".jot";

/// Default branch a fresh repository attaches HEAD to
pub const DEFAULT_BRANCH: &str = "main";

/// Repository handle bundling the four on-disk areas
///
/// Every operation receives this handle explicitly; there is no process-wide
/// repository state, so tests isolate by pointing a handle at a temp dir.
/// The engine is synchronous and single-invocation by design, hence plain
/// interior mutability rather than any locking.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    input: RefCell<Box<dyn BufRead>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = Path::new(path).canonicalize()?;

        let metadata_path = path.join(METADATA_DIR);
        let index = Index::new(metadata_path.join("index").into_boxed_path());
        let database = Database::new(metadata_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path(), IgnoreList::default());
        let refs = Refs::new(metadata_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            input: RefCell::new(Box::new(std::io::BufReader::new(std::io::stdin()))),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    /// Replace the confirmation-prompt input source (stdin by default)
    pub fn set_input(&mut self, input: Box<dyn BufRead>) {
        self.input = RefCell::new(input);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn input(&'_ self) -> RefMut<'_, Box<dyn BufRead>> {
        self.input.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// The set of paths tracked by the current HEAD commit
    ///
    /// A commit's tree holds only the paths staged for it, so "tracked" here
    /// is a flat read of HEAD's own tree with deletion entries filtered out,
    /// not an accumulation over ancestors.
    pub fn tracked_files(&self) -> anyhow::Result<Tree> {
        let mut tracked = Tree::new();

        let Some(head_oid) = self.refs.head_commit()? else {
            return Ok(tracked);
        };
        let Some(commit) = self.database.load_commit(&head_oid)? else {
            return Ok(tracked);
        };

        for (path, entry) in commit.tree() {
            if !entry.is_deleted() {
                tracked.insert(path.clone(), entry.clone());
            }
        }

        Ok(tracked)
    }
}

/// Seconds since epoch, the timestamp unit for commits and index entries
pub fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
