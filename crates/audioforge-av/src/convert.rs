//! Audio transfer engine.

use crate::error::{Error, Result};
use crate::estimate::estimate_duration_ms;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Outcome of a conversion request.
///
/// Exactly one of `output`/`error` is meaningful depending on
/// `success`. Serialized field names match the bridge wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Whether the conversion completed.
    pub success: bool,
    /// Human-readable completion message; empty on failure.
    pub output: String,
    /// Human-readable failure message; absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Estimated duration of the converted audio in milliseconds.
    pub duration_ms: u64,
}

impl ConversionResult {
    fn completed(duration_ms: u64) -> Self {
        Self {
            success: true,
            output: "conversion completed".to_string(),
            error: None,
            duration_ms,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(message),
            duration_ms: 0,
        }
    }
}

/// Convert the audio at `input`, writing the result to `output`.
///
/// Missing ancestor directories of `output` are created; an existing
/// file at `output` is overwritten. `command` is advisory only and
/// does not alter the transfer. On success the result carries the
/// estimated duration of the transferred audio.
///
/// Every failure (missing input, permissions, disk full) is reported
/// through the returned [`ConversionResult`] rather than panicking or
/// propagating. Concurrent calls targeting the same `output` race at
/// the filesystem level; the last writer wins.
pub fn convert(input: &str, output: &str, command: &str) -> ConversionResult {
    if !command.is_empty() {
        debug!(command, "conversion command is advisory and ignored by the transfer");
    }

    match transcode_stub(Path::new(input), Path::new(output)) {
        Ok(bytes) => {
            let duration_ms = estimate_duration_ms(bytes);
            debug!(input, output, bytes, duration_ms, "conversion completed");
            ConversionResult::completed(duration_ms)
        }
        Err(e) => ConversionResult::failed(e.to_string()),
    }
}

/// Byte-for-byte transfer standing in for a real encoder.
///
/// The output is an exact copy of the input; no codec or bitrate
/// change happens here. A real transcoder can replace this function
/// without touching the [`convert`] contract. Returns the number of
/// bytes transferred.
fn transcode_stub(input: &Path, output: &Path) -> Result<u64> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    if !input.exists() {
        return Err(Error::input_not_found(input));
    }

    Ok(fs::copy(input, output)?)
}
