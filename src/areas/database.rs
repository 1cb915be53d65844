use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Content-addressed object store
///
/// One file per object under `objects/<digest>`. Objects are write-once:
/// storing content that already exists is a no-op, and nothing ever rewrites
/// or deletes an object file.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.path.join(oid.as_ref())
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.object_path(oid).exists()
    }

    /// Store a blob, keyed by the digest of its canonical byte form
    pub fn store_blob(&self, blob: &Blob) -> anyhow::Result<ObjectId> {
        let oid = blob.object_id()?;
        self.write_object(&oid, blob.stored_repr().as_bytes())?;

        Ok(oid)
    }

    /// Store a commit record, keyed by the digest of its canonical serialization
    pub fn store_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let oid = commit.object_id()?;
        self.write_object(&oid, &commit.serialize()?)?;

        Ok(oid)
    }

    /// Load an object's raw stored content
    ///
    /// Returns `None` when the object is missing (corrupted or externally
    /// deleted store); the caller reports and recovers.
    pub fn load_raw(&self, oid: &ObjectId) -> anyhow::Result<Option<String>> {
        let object_path = self.object_path(oid);

        if !object_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&object_path).with_context(|| {
            format!("Unable to read object file {}", object_path.display())
        })?;

        Ok(Some(content))
    }

    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Option<Commit>> {
        match self.load_raw(oid)? {
            Some(content) => Ok(Some(Commit::deserialize(content.as_bytes())?)),
            None => Ok(None),
        }
    }

    pub fn load_blob(&self, oid: &ObjectId, is_binary: bool) -> anyhow::Result<Option<Blob>> {
        match self.load_raw(oid)? {
            Some(content) => Ok(Some(Blob::from_stored(content, is_binary))),
            None => Ok(None),
        }
    }

    fn write_object(&self, oid: &ObjectId, content: &[u8]) -> anyhow::Result<()> {
        let object_path = self.object_path(oid);

        // write-once: a second store of identical content is a no-op
        if object_path.exists() {
            return Ok(());
        }

        std::fs::create_dir_all(&self.path).with_context(|| {
            format!("Unable to create object directory {}", self.path.display())
        })?;

        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .with_context(|| {
                format!("Unable to open object file {}", temp_object_path.display())
            })?;

        file.write_all(content).with_context(|| {
            format!("Unable to write object file {}", temp_object_path.display())
        })?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).with_context(|| {
            format!("Unable to rename object file to {}", object_path.display())
        })?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
