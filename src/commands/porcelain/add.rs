use crate::areas::index::Index;
use crate::areas::repository::Repository;
use std::path::{Path, PathBuf};

impl Repository {
    /// Stage files, or whole directories, from the working tree
    ///
    /// Staging a path that is gone from disk but still in the index drops it
    /// from the index. Paths that are neither are skipped with a warning.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        for path in paths {
            let relative_path = self.workspace().relative_path(Path::new(path))?;
            self.add_path(&relative_path, &mut index)?;
        }

        if index.is_changed() {
            index.write_updates()?;
        }

        Ok(())
    }

    fn add_path(&self, path: &Path, index: &mut Index) -> anyhow::Result<()> {
        if path.as_os_str().is_empty() {
            return self.add_directory(None, index);
        }

        if self.workspace().exclusion().is_excluded(path) {
            tracing::warn!("ignoring excluded path {:?}", path);
            return Ok(());
        }

        if self.workspace().is_file(path) {
            self.add_file(path.to_path_buf(), index)
        } else if self.workspace().is_dir(path) {
            self.add_directory(Some(path), index)
        } else if self.unstage_missing(path, index) == 0 {
            tracing::warn!("pathspec {:?} did not match any files", path);
            Ok(())
        } else {
            Ok(())
        }
    }

    fn add_file(&self, path: PathBuf, index: &mut Index) -> anyhow::Result<()> {
        let blob = self.workspace().parse_blob(&path)?;
        let blob_id = self.database().store(blob)?;
        tracing::debug!("staging {:?} as {}", path, blob_id);

        index.stage(path, blob_id);

        Ok(())
    }

    fn add_directory(&self, dir: Option<&Path>, index: &mut Index) -> anyhow::Result<()> {
        for path in self.workspace().list_files(dir)? {
            self.add_file(path, index)?;
        }

        // staged files under the directory that were deleted since
        let missing = index
            .entries()
            .map(|(path, _)| path.clone())
            .filter(|path| dir.is_none_or(|dir| path.starts_with(dir)))
            .filter(|path| !self.workspace().is_file(path))
            .collect::<Vec<_>>();
        for path in missing {
            index.unstage(&path);
        }

        Ok(())
    }

    /// Drop `path`, and anything staged beneath it, from the index
    fn unstage_missing(&self, path: &Path, index: &mut Index) -> usize {
        let staged = index
            .entries()
            .map(|(staged, _)| staged.clone())
            .filter(|staged| staged.starts_with(path))
            .collect::<Vec<_>>();

        staged
            .iter()
            .filter(|staged| index.unstage(staged))
            .count()
    }
}
