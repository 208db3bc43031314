//! Shared test utilities for wandb-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (key, entity, base URL).
//!
//! Invariants / Assumptions:
//! - `WANDB_API_KEY` and `WANDB_ENTITY` are always set, so the keyring is
//!   never consulted unless a test removes them.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A syntactically plausible 40-character API key.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "0123456789abcdef0123456789abcdef01234567";

#[allow(dead_code)]
pub const TEST_ENTITY: &str = "ada";

/// Returns a hermetic `wandb-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `WANDB_API_KEY` and `WANDB_ENTITY` hold dummy values.
/// - Other `WANDB_*` variables are cleared to ensure no leakage from the host.
pub fn wandb_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("wandb-cli");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("WANDB_API_KEY", TEST_API_KEY)
        .env("WANDB_ENTITY", TEST_ENTITY);

    cmd.env_remove("WANDB_BASE_URL")
        .env_remove("WANDB_TIMEOUT")
        .env_remove("WANDB_OTLP_ENDPOINT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `wandb-cli` command pointed at `server`.
#[allow(dead_code)]
pub fn wandb_cmd_for(server: &MockServer) -> Command {
    let mut cmd = wandb_cmd();
    cmd.env("WANDB_BASE_URL", server.uri());
    cmd
}

/// Mount a single 200 response with `body` on `POST /graphql`.
#[allow(dead_code)]
pub async fn mount_graphql(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
