//! Integration tests for structured exit codes.
//!
//! These tests verify that wandb-cli returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{mount_graphql, wandb_cmd, wandb_cmd_for};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;
    mount_graphql(&server, json!({"data": {"viewer": {"id": "VXNlcjox"}}})).await;

    wandb_cmd_for(&server).arg("verify").assert().code(0);
}

/// A null viewer means the key was not recognised.
#[tokio::test]
async fn test_rejected_key_returns_exit_code_2() {
    let server = MockServer::start().await;
    mount_graphql(&server, json!({"data": {"viewer": null}})).await;

    wandb_cmd_for(&server)
        .arg("verify")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("is rejected"));
}

#[tokio::test]
async fn test_http_401_returns_exit_code_2() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    wandb_cmd_for(&server).arg("projects").assert().code(2);
}

#[test]
fn test_sentinel_key_returns_exit_code_2() {
    wandb_cmd()
        .env("WANDB_BASE_URL", "http://localhost:1")
        .env("WANDB_API_KEY", "error: viewer is null")
        .arg("projects")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Rejected API key"))
        .stderr(predicate::str::contains("viewer is null").not());
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    wandb_cmd()
        .env("WANDB_BASE_URL", "http://localhost:1")
        .args(["runs", "mnist-baseline"])
        .assert()
        .code(3);
}

#[tokio::test]
async fn test_graphql_errors_return_exit_code_4() {
    let server = MockServer::start().await;
    mount_graphql(
        &server,
        json!({"data": {"project": null}, "errors": [{"message": "project not found"}]}),
    )
    .await;

    wandb_cmd_for(&server)
        .args(["runs", "missing-project"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("project not found"));
}

#[tokio::test]
async fn test_malformed_response_returns_exit_code_5() {
    let server = MockServer::start().await;
    mount_graphql(&server, json!({"data": {"viewer": {"projects": "not an object"}}})).await;

    wandb_cmd_for(&server).arg("projects").assert().code(5);
}

#[tokio::test]
async fn test_bad_gateway_returns_exit_code_8() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    wandb_cmd_for(&server).arg("projects").assert().code(8);
}

/// Login validates the key before touching the keyring or the network.
#[test]
fn test_login_rejects_sentinel_key() {
    wandb_cmd()
        .env("WANDB_BASE_URL", "http://localhost:1")
        .env("WANDB_API_KEY", "null")
        .arg("login")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Rejected API key"));
}
