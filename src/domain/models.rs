use std::path::PathBuf;

use chrono::NaiveDateTime;
use indexmap::IndexMap;

/// Ordered field mapping for one meetup record: template header order
/// first, derived fields appended after.
pub type EventRecord = IndexMap<String, String>;

/// Explicit per-run configuration, assembled once from the CLI in `main`.
/// Nothing below the entry point reads process-global state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// SESH credential, forwarded to downstream publishing steps only.
    pub token: Option<String>,
    pub pages_dir: PathBuf,
    pub template_path: PathBuf,
    /// Explicit previous page; locator discovery runs when `None`.
    pub source_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Resolved once at startup; every derived field comes from it.
    pub now: NaiveDateTime,
}
