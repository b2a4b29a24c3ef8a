//! Integration tests for the clickup-importer CLI
//!
//! These tests exercise the binary end-to-end using assert_cmd, in dry-run
//! mode and against a local mockito server.

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command isolated from the caller's config files and environment
fn importer(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clickup-importer").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("CLICKUP_API_TOKEN")
        .env_remove("CLICKUP_LIST_ID")
        .env_remove("CLICKUP_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn write_csv(tmp: &TempDir, name: &str, contents: &str) -> String {
    let path = tmp.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let tmp = TempDir::new().unwrap();
    importer(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("template"));
}

#[test]
fn test_import_help_lists_flags() {
    let tmp = TempDir::new().unwrap();
    importer(tmp.path())
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--list-id"))
        .stdout(predicate::str::contains("--output"));
}

// ============================================================================
// Import Tests
// ============================================================================

#[test]
fn test_dry_run_writes_placeholder_results() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(
        &tmp,
        "tasks.csv",
        "name,priority,tags\nFirst,high,\"a, b\"\nSecond,low,\nThird,,x\n",
    );
    let out = tmp.path().join("results.csv");

    importer(tmp.path())
        .args(["import", &csv, "--list-id", "901", "--dry-run", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create First"))
        .stdout(predicate::str::contains("Dry run complete"));

    let rows = read_rows(&out);
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row[3], "CREATED");
        assert_eq!(row[5], "dry-run-task-id");
        assert_eq!(row[6], "https://app.clickup.com/dry-run-url");
    }
    assert_eq!(rows[0][2], "a, b");
}

#[test]
fn test_dry_run_makes_no_network_calls() {
    let tmp = TempDir::new().unwrap();
    let mut server = Server::new();
    let gets = server.mock("GET", Matcher::Any).expect(0).create();
    let posts = server.mock("POST", Matcher::Any).expect(0).create();

    let csv = write_csv(&tmp, "tasks.csv", "name,subtasks\nOne,a;b\nTwo,\n");
    importer(tmp.path())
        .env("CLICKUP_API_TOKEN", "pk_test")
        .args(["import", &csv, "--list-id", "L1", "--dry-run", "--base-url", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create Two"));

    gets.assert();
    posts.assert();
}

#[test]
fn test_unwritable_output_fails_before_any_task() {
    let tmp = TempDir::new().unwrap();
    let mut server = Server::new();
    let gets = server.mock("GET", Matcher::Any).expect(0).create();
    let posts = server.mock("POST", Matcher::Any).expect(0).create();

    let csv = write_csv(&tmp, "tasks.csv", "name\nOne\n");
    let out = tmp.path().join("missing-dir").join("results.csv");
    importer(tmp.path())
        .env("CLICKUP_API_TOKEN", "pk_test")
        .args(["import", &csv, "--list-id", "L1", "--base-url", &server.url(), "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write results"));

    gets.assert();
    posts.assert();
}

#[test]
fn test_dry_run_reports_bad_rows_and_succeeds() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(
        &tmp,
        "tasks.csv",
        "name,due_date,priority\nGood,2025-03-01,\n,2025-03-01,\nBad date,31.12.2025,\nBad prio,,p0\n",
    );
    let out = tmp.path().join("results.csv");

    importer(tmp.path())
        .args(["import", &csv, "--list-id", "901", "--dry-run", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("MissingRequiredField"));

    let statuses: Vec<String> = read_rows(&out).into_iter().map(|r| r[3].clone()).collect();
    assert_eq!(statuses, vec!["CREATED", "REJECTED", "REJECTED", "REJECTED"]);
}

#[test]
fn test_missing_name_column_fails() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(&tmp, "tasks.csv", "title,tags\nA,b\n");

    importer(tmp.path())
        .args(["import", &csv, "--list-id", "901", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name"));
}

#[test]
fn test_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    importer(tmp.path())
        .args(["import", "nope.csv", "--list-id", "901", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_live_import_requires_token() {
    let tmp = TempDir::new().unwrap();
    let csv = write_csv(&tmp, "tasks.csv", "name\nA\n");
    importer(tmp.path())
        .args(["import", &csv, "--list-id", "901"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API token is required"));
}

#[test]
fn test_list_id_from_local_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".clickup-importer.yaml"), "list_id: \"777\"\n").unwrap();
    let csv = write_csv(&tmp, "tasks.csv", "name\nA\n");

    importer(tmp.path())
        .args(["import", &csv, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to list 777"));
}

#[test]
fn test_live_import_isolates_failed_row() {
    let tmp = TempDir::new().unwrap();
    let mut server = Server::new();
    let _user = server
        .mock("GET", "/user")
        .match_header("authorization", "pk_test")
        .with_status(200)
        .with_body(r#"{"user":{"id":1}}"#)
        .create();
    let _list = server
        .mock("GET", "/list/L1")
        .with_status(200)
        .with_body(r#"{"id":"L1","name":"Backlog"}"#)
        .create();
    let one = server
        .mock("POST", "/list/L1/task")
        .match_body(Matcher::PartialJson(json!({ "name": "One" })))
        .with_status(200)
        .with_body(r#"{"id":"t1","url":"https://app.clickup.com/t/t1"}"#)
        .expect(1)
        .create();
    let two = server
        .mock("POST", "/list/L1/task")
        .match_body(Matcher::PartialJson(json!({ "name": "Two" })))
        .with_status(401)
        .with_body("Token invalid")
        .expect(1)
        .create();
    let three = server
        .mock("POST", "/list/L1/task")
        .match_body(Matcher::PartialJson(json!({ "name": "Three" })))
        .with_status(200)
        .with_body(r#"{"id":"t3"}"#)
        .expect(1)
        .create();

    let csv = write_csv(&tmp, "tasks.csv", "name\nOne\nTwo\nThree\n");
    let out = tmp.path().join("results.csv");

    importer(tmp.path())
        .env("CLICKUP_API_TOKEN", "pk_test")
        .args(["import", &csv, "--list-id", "L1", "--base-url", &server.url(), "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created t1"))
        .stdout(predicate::str::contains("HTTP 401: Token invalid"));

    one.assert();
    two.assert();
    three.assert();

    let rows = read_rows(&out);
    let statuses: Vec<&str> = rows.iter().map(|r| r[1].as_str()).collect();
    assert_eq!(statuses, vec!["CREATED", "FAILED", "CREATED"]);
    assert_eq!(rows[1][2], "HTTP 401: Token invalid");
    assert_eq!(rows[0][3], "t1");
    assert_eq!(rows[0][4], "https://app.clickup.com/t/t1");
    assert_eq!(rows[2][3], "t3");
}

#[test]
fn test_bad_token_stops_before_any_row() {
    let tmp = TempDir::new().unwrap();
    let mut server = Server::new();
    let _user = server.mock("GET", "/user").with_status(401).create();
    let tasks = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create();

    let csv = write_csv(&tmp, "tasks.csv", "name\nOne\n");
    importer(tmp.path())
        .args([
            "import",
            &csv,
            "--list-id",
            "L1",
            "--api-token",
            "bad",
            "--base-url",
            &server.url(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API token"));

    tasks.assert();
}

// ============================================================================
// Other Commands
// ============================================================================

#[test]
fn test_template_outputs_headers() {
    let tmp = TempDir::new().unwrap();
    importer(tmp.path())
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name,description,due_date,priority,status,tags,assignees,subtasks,custom_",
        ));
}

#[test]
fn test_template_round_trips_through_dry_run() {
    let tmp = TempDir::new().unwrap();
    let template = tmp.path().join("template.csv");
    importer(tmp.path())
        .args(["template", "-o"])
        .arg(&template)
        .assert()
        .success();

    importer(tmp.path())
        .args(["import", "--list-id", "1", "--dry-run"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create Write release notes"));
}

#[test]
fn test_verify_prints_list_name() {
    let tmp = TempDir::new().unwrap();
    let mut server = Server::new();
    let _user = server.mock("GET", "/user").with_status(200).with_body("{}").create();
    let _list = server
        .mock("GET", "/list/L1")
        .with_status(200)
        .with_body(r#"{"name":"Backlog"}"#)
        .create();

    importer(tmp.path())
        .env("CLICKUP_API_TOKEN", "pk_test_1234")
        .args(["verify", "--list-id", "L1", "--base-url", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog"))
        .stdout(predicate::str::contains("pk_test_1234").not());
}

#[test]
fn test_config_show_masks_token() {
    let tmp = TempDir::new().unwrap();
    importer(tmp.path())
        .env("CLICKUP_API_TOKEN", "pk_secret_9876")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9876"))
        .stdout(predicate::str::contains("pk_secret").not());
}

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();
    importer(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clickup-importer"));
}
