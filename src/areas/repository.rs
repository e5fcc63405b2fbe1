use crate::areas::config::{CONTROL_DIR, Config};
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{PathExclusion, Workspace};
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::status::status_info::Status;
use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::cell::{RefCell, RefMut};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Exclusive lock over the control directory, held for one command
///
/// Released when dropped.
pub struct OperationLock {
    _guard: FileGuard<Box<File>>,
}

/// Handle to one repository, threaded through every operation
///
/// Creating a handle never reads HEAD or the index; commands take the
/// operation lock first and then read what they need.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    config: Config,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        Self::with_config(path, writer, Config::load_from_env()?)
    }

    pub fn with_config(
        path: &str,
        writer: Box<dyn std::io::Write>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("failed to create directory {:?}", path))?;
        }
        let path = path.canonicalize()?;
        let control_path = path.join(CONTROL_DIR);

        let index = Index::new(control_path.join("index").into_boxed_path());
        let database = Database::new(control_path.join("objects").into_boxed_path());
        let exclusion = PathExclusion::new(config.excluded_names.iter().cloned());
        let workspace = Workspace::new(path.clone().into_boxed_path(), exclusion);
        let refs = Refs::new(control_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn control_path(&self) -> Box<Path> {
        self.path.join(CONTROL_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.control_path().is_dir()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
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

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn status_report(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    /// Take the exclusive per-command lock on the control directory
    ///
    /// Fails with `NotARepository` if the control directory does not exist.
    pub fn lock(&self) -> anyhow::Result<OperationLock> {
        if !self.is_initialized() {
            return Err(RepositoryError::NotARepository(self.path.to_path_buf()).into());
        }

        let lock_path = self.control_path().join("lock");
        let lock_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("failed to open lock file at {:?}", lock_path))?;

        tracing::debug!("acquiring operation lock at {:?}", lock_path);
        let guard = file_guard::lock(Box::new(lock_file), Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock {:?}", lock_path))?;

        Ok(OperationLock { _guard: guard })
    }
}
