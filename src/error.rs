use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the generation pipeline. Every variant is fatal:
/// the run stops and the error surfaces once at the binary edge.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("meetup pages directory '{}' is unreadable: {}", dir.display(), source)]
    DirectoryUnreadable { dir: PathBuf, source: io::Error },
    #[error("no previous meetup page found under '{}' within the last {} weeks", dir.display(), attempts)]
    SourceNotFound { dir: PathBuf, attempts: u32 },
    #[error("{matches} files match the expected page name '{name}'")]
    AmbiguousSource { name: String, matches: usize },
    #[error("template line {line} is invalid: {reason}")]
    TemplateInvalid { line: usize, reason: String },
    #[error("duplicate template field: {0}")]
    DuplicateField(String),
    #[error("template defines no field rules")]
    EmptyTemplate,
    #[error("template matched no record in the source page")]
    NoRecordMatched,
    #[error("field '{field}' matched {matches} records, expected exactly one")]
    AmbiguousRecord { field: String, matches: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
