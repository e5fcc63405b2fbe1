//! Content-addressed object store
//!
//! Every payload is stored verbatim in `.snap/objects/<sha1>`, where the file
//! name is the SHA-1 of the stored bytes. Blobs and commits share the same
//! directory and carry no type tag, so the caller decides how to read an
//! object. The store is append-only: objects are never rewritten or deleted.

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable, hash_bytes};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

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

    /// Hash a payload and write it under its hash unless already present
    ///
    /// Writing is idempotent: the same payload always maps to the same ID
    /// and the same stored bytes.
    pub fn put(&self, payload: &[u8]) -> anyhow::Result<ObjectId> {
        let object_id = hash_bytes(payload);
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            self.write_object(object_path, payload)?;
        }

        Ok(object_id)
    }

    /// Read the raw bytes stored under `object_id`
    ///
    /// A missing object surfaces as `RepositoryError::ObjectNotFound`.
    pub fn get(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::ObjectNotFound(object_id.clone()).into())
            }
            Err(e) => Err(e).context(format!(
                "Unable to read object file {}",
                object_path.display()
            )),
        }
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    pub fn store(&self, object: impl Object) -> anyhow::Result<ObjectId> {
        let content = object.serialize()?;
        self.put(&content)
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let content = self.get(object_id)?;
        Blob::deserialize(Cursor::new(content))
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let content = self.get(object_id)?;

        Commit::deserialize(Cursor::new(content))
            .map_err(|_| RepositoryError::NotACommit(object_id.clone()).into())
    }

    /// Load a commit, mapping an absent object to `None`
    ///
    /// Used wherever a dangling reference must degrade to "no commit" instead
    /// of aborting the operation.
    pub fn try_load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        match self.load_commit(object_id) {
            Ok(commit) => Ok(Some(commit)),
            Err(e)
                if matches!(
                    RepositoryError::kind_of(&e),
                    Some(RepositoryError::ObjectNotFound(_))
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn write_object(&self, object_path: PathBuf, object_content: &[u8]) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.path).context(format!(
            "Unable to create object directory {}",
            self.path.display()
        ))?;
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
