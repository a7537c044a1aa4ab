//! Integration tests for the bridge API routes.

mod common;

use common::TestHarness;
use std::fs;

// ---------------------------------------------------------------------------
// executeCommand
// ---------------------------------------------------------------------------

#[tokio::test]
async fn execute_command_converts_file() {
    let (_h, addr) = TestHarness::with_server().await;
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("recording.m4a");
    let output = dir.path().join("cache/converted.aac");
    fs::write(&input, vec![7u8; 32_000]).unwrap();

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/commands/execute"))
        .json(&serde_json::json!({
            "command": "-i recording.m4a converted.aac",
            "inputPath": input.to_str().unwrap(),
            "outputPath": output.to_str().unwrap(),
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["returnCode"], 0);
    assert_eq!(json["output"], "conversion completed");
    // 32 000 bytes at 16 000 bytes/s is two seconds.
    assert_eq!(json["durationMs"], 2_000);
    assert!(json.get("error").is_none());

    assert_eq!(fs::read(&output).unwrap(), vec![7u8; 32_000]);
}

#[tokio::test]
async fn execute_command_requires_paths() {
    let (_h, addr) = TestHarness::with_server().await;

    let client = reqwest::Client::new();
    for body in [
        serde_json::json!({}),
        serde_json::json!({ "command": "-i a.m4a b.aac" }),
        serde_json::json!({ "inputPath": "/tmp/a.m4a", "outputPath": "" }),
        serde_json::json!({ "inputPath": "  ", "outputPath": "/tmp/b.aac" }),
    ] {
        let resp = client
            .post(format!("http://{addr}/api/commands/execute"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["returnCode"], -1);
        assert_eq!(json["error"], "input and output paths are required");
        assert_eq!(json["durationMs"], 0);
    }
}

#[tokio::test]
async fn execute_command_missing_input_leaves_output_untouched() {
    let (_h, addr) = TestHarness::with_server().await;
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.m4a");
    let output = dir.path().join("existing.aac");
    fs::write(&output, b"keep me").unwrap();

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/commands/execute"))
        .json(&serde_json::json!({
            "inputPath": input.to_str().unwrap(),
            "outputPath": output.to_str().unwrap(),
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["returnCode"], -1);
    let error = json["error"].as_str().unwrap();
    assert!(error.starts_with("input file not found: "));

    assert_eq!(fs::read(&output).unwrap(), b"keep me");
}

// ---------------------------------------------------------------------------
// getMediaInfo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_media_info_existing_file() {
    let (_h, addr) = TestHarness::with_server().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sound.wav");
    fs::write(&path, vec![0u8; 16_000]).unwrap();

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/media/info"))
        .json(&serde_json::json!({ "filePath": path.to_str().unwrap() }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["exists"], true);
    assert_eq!(json["filePath"], path.to_str().unwrap());
    assert_eq!(json["fileSizeBytes"], 16_000);
    assert_eq!(json["durationMs"], 1_000);
    assert_eq!(json["format"], "WAV");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn get_media_info_missing_file() {
    let (_h, addr) = TestHarness::with_server().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nothing.mp3");

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/media/info"))
        .json(&serde_json::json!({ "filePath": path.to_str().unwrap() }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["exists"], false);
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn get_media_info_requires_file_path() {
    let (_h, addr) = TestHarness::with_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/media/info"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// isAvailable / getVersion / health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn is_available_always_true() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/api/available"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json, serde_json::json!(true));
}

#[tokio::test]
async fn version_is_static_label() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/api/version"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let version: String = resp.json().await.unwrap();
    assert!(version.starts_with("audioforge engine v"));
}

#[tokio::test]
async fn health_check_responds() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
}
