//! JSON export of the finished wizard session
//!
//! Field names stay camelCase so exports remain interchangeable with the
//! web version of this tool.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

/// Default export file name
pub const DEFAULT_EXPORT_FILE: &str = "prompt-magic-export.json";

/// Errors that can occur while exporting
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The exported session payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub initial_prompt: String,
    pub refined_prompt: String,
    pub feedback: String,
    pub exported_at: String,
}

impl ExportData {
    /// Build the payload with the current timestamp
    pub fn new(initial_prompt: String, refined_prompt: String, feedback: String) -> Self {
        Self {
            initial_prompt,
            refined_prompt,
            feedback,
            exported_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Write the export payload as pretty-printed JSON
pub fn write_json(data: &ExportData, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    log::info!("exported session to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExportData {
        ExportData::new(
            "write me a poem".to_string(),
            "Write a four-line poem about autumn.".to_string(),
            "satisfied".to_string(),
        )
    }

    #[test]
    fn test_export_uses_camel_case_field_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"initialPrompt\""));
        assert!(json.contains("\"refinedPrompt\""));
        assert!(json.contains("\"feedback\""));
        assert!(json.contains("\"exportedAt\""));
    }

    #[test]
    fn test_write_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);

        write_json(&sample(), &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["initialPrompt"], "write me a poem");
        assert_eq!(
            value["refinedPrompt"],
            "Write a four-line poem about autumn."
        );
    }

    #[test]
    fn test_write_json_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(matches!(
            write_json(&sample(), &path),
            Err(ExportError::Io(_))
        ));
    }

    #[test]
    fn test_exported_at_is_rfc3339() {
        let data = sample();
        assert!(chrono::DateTime::parse_from_rfc3339(&data.exported_at).is_ok());
    }
}
