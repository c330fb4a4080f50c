mod block;
mod error;
mod export;
mod links;
mod render;
mod sanitize;

pub use block::{Block, Page};
pub use error::{Error, Result};
pub use export::{export, link_map_path, output_filename};
pub use links::rewrite_links;

/// Which Markdown dialect to produce. Exactly one mode is selected
/// per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain Markdown: bare top-level lines, two-space list indent,
    /// asset links rewritten to local paths.
    Standard,
    /// Outline-flavored Markdown: every line starts life as a list
    /// item, tags become `#[[...]]` references, task markers become
    /// checkboxes, five-space list indent.
    Outline,
}

/// Sanitize a single block's raw text for the given mode.
pub fn sanitize(raw: &str, mode: Mode) -> String {
    sanitize::sanitize(raw, mode)
}

/// Render one page to Markdown text, without touching the filesystem.
pub fn page_to_markdown(page: &Page, mode: Mode) -> String {
    render::page_to_markdown(page, mode)
}
