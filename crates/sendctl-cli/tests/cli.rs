// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const DOMAINS: &str = r#"{
    "data": [{
        "id": "dom-1", "account_id": "acc-1", "domain": "example.com",
        "dns_records": [], "dns_valid": true,
        "created_at": "2024-01-02T15:04:05Z", "updated_at": "2024-01-02T15:04:05Z"
    }],
    "pagination": {"has_more": true, "next_cursor": "c-2"}
}"#;

const API_KEY_SECRET: &str = "sk_live_0a1b2c3d4e5f";

/// Command isolated from the user's config and environment.
fn sendctl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sendctl");
    cmd.env("XDG_CONFIG_HOME", home)
        .env_remove("SENDCTL_OUTPUT__FORMAT")
        .env_remove("SENDCTL_API__RESPONSE_FILE")
        .env_remove("SENDCTL_DEFAULTS__CONFIRM_DESTRUCTIVE")
        .env_remove("RUST_LOG");
    cmd
}

/// Temp dir holding `document` as `response.json`.
fn response(document: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("response.json");
    std::fs::write(&path, document).unwrap();
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    sendctl(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sendctl"));
}

#[test]
fn test_help_contains_all_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut assert = sendctl(dir.path()).arg("--help").assert().success();
    for command in [
        "domains",
        "messages",
        "webhooks",
        "routes",
        "suppressions",
        "smtp",
        "apikeys",
        "stats",
        "auth",
        "completion",
    ] {
        assert = assert.stdout(predicate::str::contains(command));
    }
}

#[test]
fn test_domains_list_table() {
    let (dir, path) = response(DOMAINS);
    sendctl(dir.path())
        .args(["domains", "list", "--response-file", path.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com"))
        .stdout(predicate::str::contains("Valid"))
        .stdout(predicate::str::contains(
            "More results available (next cursor: c-2)",
        ));
}

#[test]
fn test_domains_list_json_is_valid() {
    let (dir, path) = response(DOMAINS);
    let output = sendctl(dir.path())
        .args(["domains", "list", "-o", "json", "--response-file", path.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"][0]["domain"], "example.com");
    assert_eq!(json["pagination"]["next_cursor"], "c-2");
}

#[test]
fn test_domains_list_csv_with_fields() {
    let (dir, path) = response(DOMAINS);
    sendctl(dir.path())
        .args([
            "domains",
            "list",
            "--output",
            "csv",
            "--fields",
            "domain,dns_valid",
            "--response-file",
            path.as_str(),
        ])
        .assert()
        .success()
        .stdout("Domain,DNS\nexample.com,true\n");
}

#[test]
fn test_domains_list_plain_with_fields() {
    let (dir, path) = response(DOMAINS);
    sendctl(dir.path())
        .args([
            "domains",
            "list",
            "-o",
            "plain",
            "--fields",
            "domain,dns_valid",
            "--response-file",
            path.as_str(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Domain: example.com\nDNS: Valid\n"));
}

#[test]
fn test_remote_error_json_passthrough_succeeds() {
    let (dir, path) = response(r#"{"status": 422, "body": {"message":"x","code":"y"}}"#);
    sendctl(dir.path())
        .args(["domains", "create", "example.com", "-o", "json", "--response-file", path.as_str()])
        .assert()
        .success()
        .stdout("{\"message\":\"x\",\"code\":\"y\"}\n");
}

#[test]
fn test_remote_error_table_fails() {
    let (dir, path) = response(r#"{"status": 422, "body": {"message":"x","code":"y"}}"#);
    sendctl(dir.path())
        .args(["domains", "create", "example.com", "--response-file", path.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("x"));
}

const DOMAIN_404: &str =
    r#"{"status": 404, "body": {"message":"domain not found","code":"not_found"}}"#;

#[test]
fn test_get_not_found_table_fails() {
    let (dir, path) = response(DOMAIN_404);
    sendctl(dir.path())
        .args(["domains", "get", "nope.com", "--response-file", path.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Error:"))
        .stdout(predicate::str::contains("domain not found"));
}

#[test]
fn test_get_not_found_json_echoes_body() {
    let (dir, path) = response(DOMAIN_404);
    sendctl(dir.path())
        .args(["domains", "get", "nope.com", "-o", "json", "--response-file", path.as_str()])
        .assert()
        .success()
        .stdout("{\"message\":\"domain not found\",\"code\":\"not_found\"}\n");
}

#[test]
fn test_get_json_keeps_unmodelled_fields() {
    let (dir, path) = response(
        r#"{"id": "dom-1", "account_id": "acc-1", "domain": "example.com",
            "dns_records": [], "dns_valid": true,
            "created_at": "2024-01-02T15:04:05Z", "updated_at": "2024-01-02T15:04:05Z",
            "beta_feature": {"x": 1}}"#,
    );
    sendctl(dir.path())
        .args(["domains", "get", "example.com", "-o", "json", "--response-file", path.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"beta_feature\""));
}

#[test]
fn test_unsupported_format_reports_on_stderr() {
    let (dir, path) = response(DOMAINS);
    sendctl(dir.path())
        .args(["domains", "list", "-o", "yaml", "--response-file", path.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unsupported output format: yaml"));
}

#[test]
fn test_delete_without_yes_is_cancelled() {
    let (dir, path) = response(r#"{"success": true}"#);
    sendctl(dir.path())
        .args(["routes", "delete", "rt-1", "-o", "json", "--response-file", path.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\": true"))
        .stdout(predicate::str::contains("operation cancelled"));
}

#[test]
fn test_delete_with_yes() {
    let (dir, path) = response(r#"{"success": true}"#);
    sendctl(dir.path())
        .args([
            "routes",
            "delete",
            "rt-1",
            "--yes",
            "-o",
            "plain",
            "--response-file",
            path.as_str(),
        ])
        .assert()
        .success()
        .stdout("Route rt-1 deleted.\n");
}

#[test]
fn test_api_key_secret_only_on_create() {
    let document = format!(
        r#"{{
            "id": "key-1", "account_id": "acc-1", "label": "deploy",
            "public_key": "pk_live_1234", "secret_key": "{API_KEY_SECRET}",
            "scopes": [{{"id": "sc-1", "scope": "messages:send:all"}}],
            "created_at": "2024-01-02T15:04:05Z", "updated_at": "2024-01-02T15:04:05Z"
        }}"#
    );
    let (dir, path) = response(&document);

    let output = sendctl(dir.path())
        .args([
            "apikeys",
            "create",
            "--label",
            "deploy",
            "--scopes",
            "messages:send:all",
            "-o",
            "plain",
            "--response-file",
            path.as_str(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches(API_KEY_SECRET).count(), 1);

    sendctl(dir.path())
        .args(["apikeys", "get", "key-1", "-o", "plain", "--response-file", path.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(API_KEY_SECRET).not());
}

#[test]
fn test_bounce_stats_csv() {
    let (dir, path) = response(
        r#"{"data": [{
            "from_timestamp": "2024-01-01T00:00:00Z",
            "to_timestamp": "2024-01-02T00:00:00Z",
            "bounces": [
                {"classification": "hard", "count": 3},
                {"classification": "soft", "count": 1},
                {"classification": "spam", "count": 1}
            ]
        }]}"#,
    );
    let output = sendctl(dir.path())
        .args(["stats", "bounce", "-o", "csv", "--response-file", path.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "From,To,Total Bounces,Classification,Count,Percentage"
    );
    assert_eq!(lines.len(), 4);
    assert!(lines[1].ends_with(",5,hard,3,60.0"));
}

#[test]
fn test_validation_error_before_request() {
    let dir = tempfile::tempdir().unwrap();
    sendctl(dir.path())
        .args(["suppressions", "check", "not-an-address", "-o", "plain"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error: Invalid email address: not-an-address",
        ));
}

#[test]
fn test_missing_response_source() {
    let dir = tempfile::tempdir().unwrap();
    sendctl(dir.path())
        .args(["auth", "status", "-o", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("config_error"));
}

#[test]
fn test_response_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    sendctl(dir.path())
        .args(["domains", "list", "-o", "csv", "--fields", "domain", "--response-file", "-"])
        .write_stdin(DOMAINS)
        .assert()
        .success()
        .stdout("Domain\nexample.com\n");
}

#[test]
fn test_completion_bash() {
    let dir = tempfile::tempdir().unwrap();
    sendctl(dir.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sendctl"));
}
