use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading input or writing output.
///
/// Each variant names the file involved so the CLI can report a single
/// self-contained message. Malformed pages or blocks are never errors;
/// missing fields fall back to empty defaults during deserialization.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to prepare output directory {}: {source}", path.display())]
    PrepareDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
