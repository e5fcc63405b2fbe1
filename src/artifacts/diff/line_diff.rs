//! Line-level diff of two blob payloads, grouped into unified hunks

use similar::{ChangeTag, TextDiff};

const CONTEXT_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    Equal,
    Insert,
    Delete,
}

impl LineTag {
    pub fn marker(&self) -> char {
        match self {
            LineTag::Equal => ' ',
            LineTag::Insert => '+',
            LineTag::Delete => '-',
        }
    }
}

impl From<ChangeTag> for LineTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => LineTag::Equal,
            ChangeTag::Insert => LineTag::Insert,
            ChangeTag::Delete => LineTag::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub tag: LineTag,
    /// Line text without its trailing newline
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// `@@ -a,b +c,d @@`
    pub header: String,
    pub lines: Vec<DiffLine>,
}

/// Check if content is binary (contains null bytes in first 8KB)
pub fn is_binary(content: &[u8]) -> bool {
    content.iter().take(8192).any(|&b| b == 0)
}

pub fn diff_lines(old_content: &[u8], new_content: &[u8]) -> Vec<Hunk> {
    let old_text = String::from_utf8_lossy(old_content);
    let new_text = String::from_utf8_lossy(new_content);
    let diff = TextDiff::from_lines(&*old_text, &*new_text);

    diff.unified_diff()
        .context_radius(CONTEXT_LINES)
        .iter_hunks()
        .map(|hunk| Hunk {
            header: hunk.header().to_string(),
            lines: hunk
                .iter_changes()
                .map(|change| DiffLine {
                    tag: change.tag().into(),
                    text: change.value().trim_end_matches('\n').to_string(),
                })
                .collect(),
        })
        .collect()
}
