//! References (HEAD and branches)
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/<name>`, containing a commit ID or nothing at all
//!   when the branch exists but has no commits yet
//! - HEAD: either symbolic (`ref: refs/heads/<name>`), detached (a raw commit
//!   ID), or empty before anything has been set up
//!
//! ## File Format
//!
//! References are stored as text files containing either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references
//! - Nothing (unborn)

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::core::outcome::{NoOpReason, Outcome};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory (typically `.snap`)
    path: Box<Path>,
}

/// Internal representation of a reference value
#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { sym_ref_name: SymRefName },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].to_string()),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }
}

/// What HEAD currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadState {
    /// HEAD is missing or empty
    Unset,
    /// HEAD points symbolically at a branch
    Branch(BranchName),
    /// HEAD holds a raw commit ID
    Detached(ObjectId),
}

impl HeadState {
    pub fn is_detached(&self) -> bool {
        matches!(self, HeadState::Detached(_))
    }
}

impl Refs {
    pub fn head_state(&self) -> anyhow::Result<HeadState> {
        match SymRefOrOid::read_symref_or_oid(&self.head_path())? {
            Some(SymRefOrOid::SymRef { sym_ref_name }) => Ok(HeadState::Branch(
                BranchName::try_parse_sym_ref_name(&sym_ref_name)?,
            )),
            Some(SymRefOrOid::Oid(oid)) => Ok(HeadState::Detached(oid)),
            None => Ok(HeadState::Unset),
        }
    }

    /// Resolve HEAD to a commit ID
    ///
    /// # Returns
    ///
    /// The branch tip when HEAD is symbolic (None for an empty or missing
    /// branch), the raw ID when detached, None when HEAD is unset.
    pub fn resolve_head(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.head_state()? {
            HeadState::Branch(branch_name) => Ok(self.read_branch(&branch_name)?.flatten()),
            HeadState::Detached(oid) => Ok(Some(oid)),
            HeadState::Unset => Ok(None),
        }
    }

    pub fn current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        match self.head_state()? {
            HeadState::Branch(branch_name) => Ok(Some(branch_name)),
            _ => Ok(None),
        }
    }

    /// Move whatever HEAD designates to `oid`
    ///
    /// A symbolic HEAD moves its branch; a detached (or unset) HEAD is
    /// overwritten with the raw ID.
    ///
    /// # Returns
    ///
    /// The HEAD state after the update
    pub fn advance(&self, oid: &ObjectId) -> anyhow::Result<HeadState> {
        match self.head_state()? {
            HeadState::Branch(branch_name) => {
                self.update_ref_file(self.branch_path(&branch_name), oid.as_ref())?;
                Ok(HeadState::Branch(branch_name))
            }
            HeadState::Detached(_) | HeadState::Unset => {
                self.detach_to(oid)?;
                Ok(HeadState::Detached(oid.clone()))
            }
        }
    }

    /// Read a branch ref
    ///
    /// # Returns
    ///
    /// None if the ref file does not exist, Some(None) if the branch exists
    /// without commits, Some(Some(oid)) otherwise
    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<Option<ObjectId>>> {
        let branch_path = self.branch_path(branch_name);

        if !branch_path.is_file() {
            return Ok(None);
        }

        match SymRefOrOid::read_symref_or_oid(&branch_path)? {
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(Some(oid))),
            Some(SymRefOrOid::SymRef { sym_ref_name }) => anyhow::bail!(
                "branch {} unexpectedly points at {}",
                branch_name,
                sym_ref_name.as_ref_path()
            ),
            None => Ok(Some(None)),
        }
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    /// Create a branch at the current HEAD commit
    ///
    /// Existing refs are never overwritten; asking for one again is reported
    /// as a no-op.
    pub fn create_branch(&self, branch_name: &BranchName) -> anyhow::Result<Outcome<ObjectId>> {
        let head_oid = self
            .resolve_head()?
            .ok_or_else(|| RepositoryError::NoCommitsYet(branch_name.to_string()))?;

        if self.branch_exists(branch_name) {
            return Ok(Outcome::NoOp(NoOpReason::BranchExists(
                branch_name.to_string(),
            )));
        }

        self.update_ref_file(self.branch_path(branch_name), head_oid.as_ref())?;

        Ok(Outcome::Done(head_oid))
    }

    /// Create an empty branch ref unless it already exists
    pub fn create_unborn_branch(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let branch_path = self.branch_path(branch_name);

        if !branch_path.exists() {
            self.update_ref_file(branch_path, "")?;
        }

        Ok(())
    }

    /// Point HEAD symbolically at an existing branch without moving the branch
    pub fn switch_to(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        if !self.branch_exists(branch_name) {
            return Err(RepositoryError::BranchNotFound(branch_name.to_string()).into());
        }

        self.update_ref_file(
            self.head_path(),
            &format!("ref: {}", branch_name.to_sym_ref_name().as_ref_path()),
        )
    }

    /// Write a raw commit ID into HEAD
    pub fn detach_to(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.head_path(), oid.as_ref())
    }

    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        if !heads_path.exists() {
            return Ok(Vec::new());
        }

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(self.path.as_ref()).ok()?;
                let sym_ref_name = SymRefName::new(relative_path.to_string_lossy().to_string());
                BranchName::try_parse_sym_ref_name(&sym_ref_name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    /// Overwrite a ref file with `raw_ref`
    ///
    /// # Locking
    ///
    /// Acquires exclusive lock on the reference file during update.
    fn update_ref_file(&self, path: Box<Path>, raw_ref: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    pub fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.path
            .join(branch_name.to_sym_ref_name().as_ref_path())
            .into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
