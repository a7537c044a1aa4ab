//! Media file inspection.

use crate::error::{Error, Result};
use crate::estimate::estimate_duration_ms;
use crate::format::classify_format;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Information about a media file.
///
/// Serialized field names match the bridge wire contract. When
/// `success` is false only `file_path` and `error` carry meaning; the
/// remaining fields are zeroed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    /// Whether the inspection completed.
    pub success: bool,
    /// Path that was inspected.
    pub file_path: String,
    /// File size in bytes.
    pub file_size_bytes: u64,
    /// Estimated duration in milliseconds.
    pub duration_ms: u64,
    /// Canonical format label derived from the extension.
    pub format: String,
    /// Whether the file exists.
    pub exists: bool,
    /// Human-readable failure message; absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MediaInfo {
    fn found(path: &str, size_bytes: u64) -> Self {
        Self {
            success: true,
            file_path: path.to_string(),
            file_size_bytes: size_bytes,
            duration_ms: estimate_duration_ms(size_bytes),
            format: classify_format(path),
            exists: true,
            error: None,
        }
    }

    fn unavailable(path: &str, message: String) -> Self {
        Self {
            success: false,
            file_path: path.to_string(),
            file_size_bytes: 0,
            duration_ms: 0,
            format: String::new(),
            exists: false,
            error: Some(message),
        }
    }
}

/// Inspect the file at `path` and report its size, estimated duration,
/// and format.
///
/// A missing file is a normal outcome reported through the returned
/// [`MediaInfo`] with `success = false`; filesystem errors (e.g.
/// permission denied on stat) are caught and surfaced the same way.
/// Never panics.
pub fn inspect(path: &str) -> MediaInfo {
    match stat_len(Path::new(path)) {
        Ok(size_bytes) => MediaInfo::found(path, size_bytes),
        Err(e) => MediaInfo::unavailable(path, e.to_string()),
    }
}

fn stat_len(path: &Path) -> Result<u64> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    Ok(fs::metadata(path)?.len())
}
