//! Working tree file system operations
//!
//! All paths handed to and returned from the workspace are relative to the
//! repository root. Tree walks skip whatever the configured `PathExclusion`
//! rejects (the control directory and hidden entries by default).

use crate::areas::config::CONTROL_DIR;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Predicate deciding which paths tree walks leave out
#[derive(Debug, Clone)]
pub struct PathExclusion {
    /// Component names that are always excluded
    names: Vec<String>,
    /// Whether components starting with `.` are excluded
    hidden: bool,
}

impl PathExclusion {
    pub fn new(extra_names: impl IntoIterator<Item = String>) -> Self {
        let names = std::iter::once(CONTROL_DIR.to_string())
            .chain(extra_names)
            .collect();

        PathExclusion {
            names,
            hidden: true,
        }
    }

    /// Check whether any component of a relative path is excluded
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(name) => {
                let name = name.to_string_lossy();
                (self.hidden && name.starts_with('.'))
                    || self.names.iter().any(|excluded| *excluded == name)
            }
            _ => false,
        })
    }
}

impl Default for PathExclusion {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    exclusion: PathExclusion,
}

impl Workspace {
    pub fn new(path: Box<Path>, exclusion: PathExclusion) -> Self {
        Workspace { path, exclusion }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exclusion(&self) -> &PathExclusion {
        &self.exclusion
    }

    /// Turn a user supplied path into a normalized path relative to the root
    ///
    /// Relative inputs are taken relative to the root; absolute inputs must
    /// live inside it.
    pub fn relative_path(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let path = if path.is_absolute() {
            let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            path.strip_prefix(&self.path)
                .with_context(|| {
                    format!("path {:?} is outside the repository at {:?}", path, self.path)
                })?
                .to_path_buf()
        } else {
            path.to_path_buf()
        };

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => normalized.push(name),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        anyhow::bail!("path {:?} is outside the repository", path);
                    }
                }
                Component::RootDir | Component::Prefix(_) => {}
            }
        }

        Ok(normalized)
    }

    /// List every file under `root` (the whole tree by default), sorted
    pub fn list_files(&self, root: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        self.walk_files(root, &|path| self.exclusion.is_excluded(path))
    }

    /// Walk files under `root`, pruning every path `excluded` accepts
    pub fn walk_files(
        &self,
        root: Option<&Path>,
        excluded: &dyn Fn(&Path) -> bool,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let root_path = match root {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        if !root_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root_path);
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .map(|relative| !excluded(relative))
                    .unwrap_or(false)
            });

        for entry in walker {
            let entry = entry.with_context(|| format!("failed to walk {:?}", root_path))?;

            if entry.file_type().is_file() {
                let relative = entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .with_context(|| format!("{:?} escaped the repository", entry.path()))?;
                files.push(relative.to_path_buf());
            }
        }

        Ok(files)
    }

    pub fn is_file(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn is_dir(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_dir()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }

    pub fn parse_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }

    /// Create or overwrite a file with exactly `data`
    ///
    /// Parent directories are created as needed; a directory occupying the
    /// file's own path is removed first.
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if path.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove existing directory: {:?}", file_path))?;
        }

        if let Some(parent) = path.parent() {
            self.make_directory(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete a file and prune the empty directories it leaves behind
    ///
    /// Once the file itself is gone the removal counts as done; a directory
    /// that cannot be pruned is only logged.
    ///
    /// # Returns
    ///
    /// `false` if the file was already absent
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<bool> {
        let path = self.path.join(file_path);

        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to remove file: {:?}", file_path));
            }
        }

        if let Err(e) = self.prune_empty_parent_dirs(&path) {
            tracing::warn!("left empty directories behind {:?}: {:#}", file_path, e);
        }

        Ok(true)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("failed to remove empty directory at {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn make_directory(&self, dir_path: &Path) -> anyhow::Result<()> {
        // a file sitting where a directory is needed gets replaced
        for ancestor in dir_path.ancestors() {
            if ancestor == self.path.as_ref() {
                break;
            }

            if ancestor.is_file() {
                std::fs::remove_file(ancestor)
                    .with_context(|| format!("Failed to remove file in the way: {:?}", ancestor))?;
            }
        }

        std::fs::create_dir_all(dir_path)
            .with_context(|| format!("Failed to create directory: {:?}", dir_path))
    }
}
