use axum::http::StatusCode;
use modfetch_e2e_tests::{TestFileServer, init_tracing, write_manifest, write_settings};
use modfetch_lib::cli::{Command, run_command};
use modfetch_lib::report::Reporter;
use serde_json::json;
use std::io::Cursor;
use std::path::Path;
use std::process::ExitCode;

async fn run_with_manifest(
    work_dir: &Path,
    manifest_path: &Path,
    output_root: &Path,
) -> (ExitCode, String) {
    let config_path =
        write_settings(work_dir, output_root).expect("Failed to write settings file");
    let command = Command::Fetch {
        config_path: config_path.display().to_string(),
        manifest_path: Some(manifest_path.display().to_string()),
        output_dir: None,
    };
    let mut reporter = Reporter::new(Vec::new());

    let code = run_command(command, &mut Cursor::new(""), &mut reporter)
        .await
        .expect("Report stream should accept writes");

    let output = String::from_utf8_lossy(&reporter.into_inner()).into_owned();
    (code, console::strip_ansi_codes(&output).into_owned())
}

#[tokio::test]
async fn test_missing_manifest_exits_with_failure() {
    init_tracing();

    let work_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_root = work_dir.path().join("returns");
    let manifest_path = work_dir.path().join("does-not-exist.json");

    let (code, output) = run_with_manifest(work_dir.path(), &manifest_path, &output_root).await;

    assert_eq!(code, ExitCode::FAILURE);
    assert_eq!(
        output,
        format!("[ERR] File not found: {}\n", manifest_path.display())
    );
    assert!(!output_root.exists());
}

#[tokio::test]
async fn test_invalid_manifest_exits_with_failure() {
    init_tracing();

    let work_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_root = work_dir.path().join("returns");
    let manifest_path = work_dir.path().join("modrinth.index.json");
    std::fs::write(&manifest_path, "").expect("Failed to write manifest");

    let (code, output) = run_with_manifest(work_dir.path(), &manifest_path, &output_root).await;

    assert_eq!(code, ExitCode::FAILURE);
    assert_eq!(
        output,
        format!("[ERR] Invalid JSON format in {}\n", manifest_path.display())
    );
}

#[tokio::test]
async fn test_partial_failures_still_exit_with_success() {
    init_tracing();

    let server = TestFileServer::start([("/b", StatusCode::OK, b"b".to_vec())])
        .await
        .expect("Failed to start file server");
    let work_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_root = work_dir.path().join("returns");
    let manifest_path = write_manifest(
        work_dir.path(),
        &json!({"files": [
            {"path": "mods/a.jar", "downloads": [server.url("/missing")]},
            {"path": "mods/b.jar", "downloads": [server.url("/b")]}
        ]}),
    )
    .expect("Failed to write manifest");

    let (code, output) = run_with_manifest(work_dir.path(), &manifest_path, &output_root).await;

    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(
        output,
        "[404] Failed to fetch a.jar\n[200] Saving b.jar\nSaved 1/2 files\n"
    );
    assert!(output_root.join("mods/b.jar").exists());
}
