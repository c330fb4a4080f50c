use serde::Deserialize;

/// A page from a Roam JSON export: a title and an ordered tree of blocks.
///
/// Missing fields deserialize to empty defaults; unknown fields (uids,
/// edit timestamps, user metadata) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Page {
    pub title: String,
    pub children: Vec<Block>,
}

/// A single outline block: raw text, an optional heading level, and
/// nested child blocks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Block {
    pub string: String,
    pub heading: Option<u8>,
    pub children: Vec<Block>,
}

impl Page {
    /// Whether this page should be exported at all.
    ///
    /// Only the page's direct children count: a page whose top-level
    /// blocks are all empty or whitespace is skipped, even if deeper
    /// descendants carry text.
    pub fn has_text_content(&self) -> bool {
        self.children
            .iter()
            .any(|block| !block.string.trim().is_empty())
    }
}
