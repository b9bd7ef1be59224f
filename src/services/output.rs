use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::models::EventRecord;
use crate::error::GenError;

/// Serialize the merged record and overwrite the artifact at `path`.
/// Returns the JSON text so the caller can echo it.
pub fn write_artifact(path: &Path, record: &EventRecord) -> Result<String, GenError> {
    let json = serde_json::to_string_pretty(record)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &json)?;
    info!(path = %path.display(), bytes = json.len(), "wrote meetup record");
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn overwrites_prior_artifact_and_preserves_non_ascii() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("meetup_information.json");

        let mut record = EventRecord::new();
        record.insert("TITLE".to_string(), "Rust 語言".to_string());
        write_artifact(&path, &record).unwrap();

        record.insert("SPEAKER".to_string(), "Jane".to_string());
        let json = write_artifact(&path, &record).unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, json);
        assert!(on_disk.contains("Rust 語言"));
        assert!(on_disk.contains("SPEAKER"));
    }
}
