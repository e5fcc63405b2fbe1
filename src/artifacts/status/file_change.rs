use colored::Colorize;

const LABEL_WIDTH: usize = 8;

/// The single label a path gets in a status report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChangeType {
    /// Staged and absent from HEAD
    StagedNew,
    /// Staged with content different from HEAD
    StagedModified,
    /// Tracked by HEAD and gone from disk, with the index either dropping it
    /// or still holding the committed content
    DeletedStaged,
    /// Working copy differs from what is staged (or from HEAD when unstaged)
    Modified,
    /// Present on disk only
    Untracked,
}

impl FileChangeType {
    /// Whether the change is already reflected in the index
    pub fn is_staged(&self) -> bool {
        matches!(
            self,
            FileChangeType::StagedNew
                | FileChangeType::StagedModified
                | FileChangeType::DeletedStaged
        )
    }

    /// Two-column short code used by `status --porcelain`
    pub fn porcelain_code(&self) -> &'static str {
        match self {
            FileChangeType::Untracked => "??",
            FileChangeType::Modified => " M",
            FileChangeType::StagedNew => "A ",
            FileChangeType::StagedModified => "M ",
            FileChangeType::DeletedStaged => "D ",
        }
    }
}

impl From<&FileChangeType> for &str {
    fn from(change: &FileChangeType) -> Self {
        match change {
            FileChangeType::StagedNew => "new file:   ",
            FileChangeType::StagedModified => "modified:   ",
            FileChangeType::DeletedStaged => "deleted:    ",
            FileChangeType::Modified => "modified:   ",
            FileChangeType::Untracked => "",
        }
    }
}

impl std::fmt::Display for FileChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_label = if self.is_staged() {
            label.green()
        } else {
            label.red()
        };

        write!(f, "{:>width$}{}", "", colored_label, width = LABEL_WIDTH)
    }
}
