//! Common test utilities for integration tests.
//!
//! Re-exports the fixture loader, the endpoint functions, and the wiremock
//! types every test file needs, plus helpers for the mock GraphQL endpoint.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Mock servers serve GraphQL at `/graphql`, like the real service

#[allow(unused_imports)]
pub use wandb_client::testing::load_fixture;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wandb_client::endpoints;
#[allow(unused_imports)]
pub use wandb_client::{Credential, FetchError, TransportError};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// A syntactically plausible 40-character API key.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "0123456789abcdef0123456789abcdef01234567";

/// Entity used as the credential's own namespace.
#[allow(dead_code)]
pub const TEST_ENTITY: &str = "ada";

#[allow(dead_code)]
pub fn test_credential() -> Credential {
    Credential::new(TEST_API_KEY, TEST_ENTITY)
}

/// Full GraphQL endpoint URL of a mock server.
#[allow(dead_code)]
pub fn graphql_url(server: &MockServer) -> String {
    format!("{}/graphql", server.uri())
}

/// Mount a single 200 response with `body` on `POST /graphql`.
#[allow(dead_code)]
pub async fn mount_graphql(server: &MockServer, body: serde_json::Value) {
    use wiremock::matchers::{method, path};

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
