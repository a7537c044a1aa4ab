//! Bridge API route handlers.
//!
//! Thin adapter translating the external request format into calls on
//! the engine's operations. Argument checks happen here, before the
//! engine runs; everything else is the engine's structured result
//! passed through unchanged. Engine calls perform blocking file I/O
//! and are dispatched onto the blocking thread pool.

use crate::server::AppContext;
use audioforge_av::{ConversionResult, MediaInfo};
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

pub fn api_routes() -> Router<AppContext> {
    Router::new()
        .route("/commands/execute", post(execute_command))
        .route("/media/info", post(get_media_info))
        .route("/available", get(is_available))
        .route("/version", get(get_version))
}

/// Request body for `executeCommand`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteCommandRequest {
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    input_path: Option<String>,
    #[serde(default)]
    output_path: Option<String>,
}

/// `executeCommand` response: the conversion result plus a numeric
/// return code (`0` on success, `-1` otherwise).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteCommandResponse {
    #[serde(flatten)]
    result: ConversionResult,
    return_code: i32,
}

impl From<ConversionResult> for ExecuteCommandResponse {
    fn from(result: ConversionResult) -> Self {
        let return_code = if result.success { 0 } else { -1 };
        Self {
            result,
            return_code,
        }
    }
}

async fn execute_command(
    Json(payload): Json<ExecuteCommandRequest>,
) -> Result<Json<ExecuteCommandResponse>, (StatusCode, String)> {
    let (input, output) = match (
        non_empty(payload.input_path),
        non_empty(payload.output_path),
    ) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            let rejected = ConversionResult {
                success: false,
                output: String::new(),
                error: Some("input and output paths are required".to_string()),
                duration_ms: 0,
            };
            return Ok(Json(rejected.into()));
        }
    };
    let command = payload.command.unwrap_or_default();

    tracing::debug!(%input, %output, %command, "executing conversion command");

    let result =
        tokio::task::spawn_blocking(move || audioforge_av::convert(&input, &output, &command))
            .await
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(result.into()))
}

/// Request body for `getMediaInfo`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaInfoRequest {
    #[serde(default)]
    file_path: Option<String>,
}

async fn get_media_info(
    Json(payload): Json<MediaInfoRequest>,
) -> Result<Json<MediaInfo>, (StatusCode, String)> {
    let Some(file_path) = non_empty(payload.file_path) else {
        return Err((StatusCode::BAD_REQUEST, "file path is required".to_string()));
    };

    let info = tokio::task::spawn_blocking(move || audioforge_av::inspect(&file_path))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(info))
}

async fn is_available() -> Json<bool> {
    Json(audioforge_av::is_available())
}

async fn get_version() -> Json<&'static str> {
    Json(audioforge_av::version())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
