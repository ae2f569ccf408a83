//! Black-box CLI tests.
//!
//! Validation failures must exit nonzero without any network traffic, so
//! most cases run with no server at all; the happy path drives a mock plan
//! service.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command with a hermetic environment: plain output, one-shot token, no
/// inherited newsdesk configuration.
fn nd_cmd() -> Command {
    let mut cmd = Command::cargo_bin("nd").expect("nd binary");
    cmd.arg("--no-color");
    cmd.env_remove("NEWSDESK_SERVER");
    cmd.env_remove("NEWSDESK_PLATFORM");
    cmd.env_remove("NEWSDESK_TOKEN");
    cmd
}

#[test]
fn help_lists_command_groups() {
    nd_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("item"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn version_prints() {
    nd_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nd"));
}

#[test]
fn publish_is_refused_without_confirmation() {
    nd_cmd()
        .args(["--token", "t", "--date", "2024-05-01", "run", "publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to publish"));
}

#[test]
fn invalid_date_is_rejected_up_front() {
    nd_cmd()
        .args(["--token", "t", "--date", "yesterday", "plan", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn blank_item_id_is_a_validation_failure() {
    nd_cmd()
        .args(["--token", "t", "--date", "2024-05-01", "item", "set", "", "approved"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn bulk_mutation_rejects_the_aggregate_platform() {
    nd_cmd()
        .args([
            "--token", "t",
            "--date", "2024-05-01",
            "--platform", "all",
            "plan", "approve-all",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("concrete platform"));
}

#[test]
fn import_requires_an_existing_file() {
    nd_cmd()
        .args([
            "--token", "t",
            "--date", "2024-05-01",
            "import", "/definitely/not/here.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File error"));
}

#[test]
fn unknown_status_value_is_rejected_by_the_parser() {
    nd_cmd()
        .args(["--token", "t", "--date", "2024-05-01", "item", "set", "a", "queued"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn token_round_trips_through_the_token_file() {
    let dir = TempDir::new().expect("tempdir");
    let token_path = dir.path().join("token");
    let token_arg = token_path.to_str().expect("utf8 path");

    nd_cmd()
        .args(["--token-file", token_arg, "auth", "set", "sekrit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token stored."));
    assert_eq!(std::fs::read_to_string(&token_path).unwrap(), "sekrit");

    nd_cmd()
        .args(["--token-file", token_arg, "auth", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token cleared."));
    assert!(!token_path.exists());
}

#[tokio::test]
async fn plan_show_renders_the_server_plan() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/newsroom/plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "date": "2024-05-01",
            "platform": "telegram",
            "counts": {"draft": 1, "approved": 0, "sent": 0},
            "items": [
                {"id": "a", "platform": "telegram", "title": "Headline",
                 "snippet": "Body", "status": "draft"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        nd_cmd()
            .args(["--server", &uri, "--token", "t", "--date", "2024-05-01", "plan", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Plan 2024-05-01"))
            .stdout(predicate::str::contains("Headline"));
    })
    .await
    .expect("join");
}

#[tokio::test]
async fn approve_all_reports_server_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/newsroom/approve_all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "approved": 2, "platform": "telegram"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/newsroom/plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "date": "2024-05-01",
            "platform": "telegram",
            "counts": {"draft": 0, "approved": 2, "sent": 0},
            "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        nd_cmd()
            .args([
                "--server", &uri,
                "--token", "t",
                "--date", "2024-05-01",
                "plan", "approve-all",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Approved"))
            .stdout(predicate::str::contains("2"));
    })
    .await
    .expect("join");
}
