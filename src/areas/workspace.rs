use crate::artifacts::core::ignore::IgnoreList;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Working-tree file system operations
///
/// All paths crossing this boundary are workspace-relative, `/`-separated
/// strings, matching the keys used by the index and commit trees.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    ignore: IgnoreList,
}

impl Workspace {
    pub fn new(path: Box<Path>, ignore: IgnoreList) -> Self {
        Workspace { path, ignore }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ignore(&self) -> &IgnoreList {
        &self.ignore
    }

    /// Normalize a user-supplied path into a workspace-relative key
    ///
    /// Accepts both absolute paths under the workspace root and already
    /// relative paths; rejects paths escaping the workspace.
    pub fn relativize(&self, path: &str) -> anyhow::Result<String> {
        let candidate = Path::new(path);
        let relative = if candidate.is_absolute() {
            candidate
                .strip_prefix(self.path.as_ref())
                .with_context(|| format!("path {} is outside the workspace", path))?
                .to_path_buf()
        } else {
            candidate.to_path_buf()
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                std::path::Component::Normal(name) => {
                    segments.push(name.to_string_lossy().into_owned())
                }
                std::path::Component::CurDir => {}
                _ => anyhow::bail!("path {} is outside the workspace", path),
            }
        }

        if segments.is_empty() {
            anyhow::bail!("path {} does not name a file", path);
        }

        Ok(segments.join("/"))
    }

    fn absolute(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.path.to_path_buf(), |acc, seg| acc.join(seg))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.absolute(relative).is_file()
    }

    /// List every non-ignored file under the workspace root, sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(self.path.as_ref())
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if !entry.path().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(self.path.as_ref())
                .map(|p| {
                    p.components()
                        .map(|c| c.as_os_str().to_string_lossy().into_owned())
                        .collect::<Vec<_>>()
                        .join("/")
                })
                .unwrap_or_default();

            if relative.is_empty() || self.ignore.is_ignored(&relative) {
                continue;
            }

            files.push(relative);
        }

        Ok(files)
    }

    /// Read a workspace file into a blob, detecting binary content
    pub fn read_blob(&self, relative: &str) -> anyhow::Result<Blob> {
        let bytes = std::fs::read(self.absolute(relative))
            .with_context(|| format!("Unable to read file {}", relative))?;

        Ok(Blob::from_workspace_bytes(bytes))
    }

    /// Materialize a blob at a workspace path, creating parent directories
    pub fn write_blob(&self, relative: &str, blob: &Blob) -> anyhow::Result<()> {
        let path = self.absolute(relative);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory for {}", relative))?;
        }

        std::fs::write(&path, blob.workspace_bytes()?)
            .with_context(|| format!("Unable to write file {}", relative))?;

        Ok(())
    }

    pub fn remove_file(&self, relative: &str) -> anyhow::Result<()> {
        std::fs::remove_file(self.absolute(relative))
            .with_context(|| format!("Unable to remove file {}", relative))?;

        Ok(())
    }
}
