use crate::artifacts::objects::commit::FileSet;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChangeType {
    Added(ObjectId),
    Deleted(ObjectId),
    Modified { old: ObjectId, new: ObjectId },
}

impl TreeChangeType {
    pub fn from_entries(old: Option<&ObjectId>, new: Option<&ObjectId>) -> Option<Self> {
        match (old, new) {
            (None, Some(new)) => Some(TreeChangeType::Added(new.clone())),
            (Some(old), None) => Some(TreeChangeType::Deleted(old.clone())),
            (Some(old), Some(new)) if old != new => Some(TreeChangeType::Modified {
                old: old.clone(),
                new: new.clone(),
            }),
            _ => None,
        }
    }

    pub fn old_oid(&self) -> Option<&ObjectId> {
        match self {
            TreeChangeType::Deleted(oid) => Some(oid),
            TreeChangeType::Modified { old, .. } => Some(old),
            TreeChangeType::Added(_) => None,
        }
    }

    pub fn new_oid(&self) -> Option<&ObjectId> {
        match self {
            TreeChangeType::Added(oid) => Some(oid),
            TreeChangeType::Modified { new, .. } => Some(new),
            TreeChangeType::Deleted(_) => None,
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            TreeChangeType::Added(_) => 'A',
            TreeChangeType::Deleted(_) => 'D',
            TreeChangeType::Modified { .. } => 'M',
        }
    }
}

pub type ChangeSet = BTreeMap<PathBuf, TreeChangeType>;

/// Path-level difference between two file sets
#[derive(Debug, Default)]
pub struct TreeDiff {
    change_set: ChangeSet,
}

impl TreeDiff {
    pub fn between(old: &FileSet, new: &FileSet) -> Self {
        let change_set = old
            .keys()
            .chain(new.keys())
            .filter_map(|path| {
                TreeChangeType::from_entries(old.get(path), new.get(path))
                    .map(|change| (path.clone(), change))
            })
            .collect();

        TreeDiff { change_set }
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.change_set
    }

    pub fn is_empty(&self) -> bool {
        self.change_set.is_empty()
    }

    pub fn added(&self) -> impl Iterator<Item = (&PathBuf, &ObjectId)> {
        self.change_set
            .iter()
            .filter_map(|(path, change)| match change {
                TreeChangeType::Added(oid) => Some((path, oid)),
                _ => None,
            })
    }

    pub fn deleted(&self) -> impl Iterator<Item = (&PathBuf, &ObjectId)> {
        self.change_set
            .iter()
            .filter_map(|(path, change)| match change {
                TreeChangeType::Deleted(oid) => Some((path, oid)),
                _ => None,
            })
    }
}
