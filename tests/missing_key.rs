use assert_cmd::Command;
use news_sentiment::report::CHART_FILENAME;

#[test]
fn missing_credential_aborts_before_any_work() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::cargo_bin("news-sentiment")
        .expect("binary exists")
        .current_dir(dir.path())
        .env("NEWS_API_KEY", "")
        // Nothing listens here; a request would surface as a logged error, not this one.
        .env("NEWS_API_URL", "http://127.0.0.1:9/v2/everything")
        .args(["analyze", "--no-show"])
        .output()
        .expect("command runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("API key not found"), "stderr: {stderr}");
    assert!(!stderr.contains("searching news"), "stderr: {stderr}");
    assert!(!dir.path().join(CHART_FILENAME).exists());
}
