//! `WandbClient` facade tests.
//!
//! # Invariants
//! - The client derives `<base_url>/graphql` and posts there
//! - Credentials are per call, so concurrent calls with different keys
//!   each carry their own Authorization header

mod common;

use common::*;
use std::time::Duration;
use wandb_client::{MetricsCollector, RunName, WandbClient, build_auth_header};
use wiremock::matchers::{header, method, path};

fn client_for(server: &MockServer) -> WandbClient {
    WandbClient::builder()
        .base_url(format!("{}/", server.uri()))
        .timeout(Duration::from_secs(5))
        .metrics(MetricsCollector::new())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_client_walks_the_hierarchy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(wiremock::matchers::body_string_contains("query Projects"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("projects/list_projects.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(wiremock::matchers::body_string_contains("query Runs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("runs/list_runs.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(wiremock::matchers::body_string_contains("query RunHistory"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("history/mixed_history.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let credential = test_credential();

    let projects = client.fetch_projects(&credential).await.unwrap();
    let project = &projects[0];

    let runs = client
        .fetch_runs(&credential, &project.entity, &project.name)
        .await
        .unwrap();
    let run = &runs[0];

    let series = client
        .fetch_metrics(&credential, &project.entity, &project.name, &run.name)
        .await
        .unwrap();

    assert_eq!(series.len(), 2);
}

#[tokio::test]
async fn test_verify_through_client() {
    let mock_server = MockServer::start().await;
    mount_graphql(&mock_server, load_fixture("viewer/viewer_ok.json")).await;

    let client = client_for(&mock_server);
    assert_eq!(client.verify(&test_credential()).await, Ok(true));
}

#[tokio::test]
async fn test_concurrent_calls_use_their_own_credentials() {
    let mock_server = MockServer::start().await;
    let key_a = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    let key_b = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    for key in [key_a, key_b] {
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", build_auth_header(key).as_str()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(load_fixture("viewer/viewer_ok.json")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let a = Credential::new(key_a, "team-a");
    let b = Credential::new(key_b, "team-b");

    let (ra, rb) = tokio::join!(client.verify(&a), client.verify(&b));

    assert_eq!(ra, Ok(true));
    assert_eq!(rb, Ok(true));
}

#[tokio::test]
async fn test_metrics_for_unknown_run_is_empty() {
    let mock_server = MockServer::start().await;
    mount_graphql(&mock_server, load_fixture("history/run_null.json")).await;

    let client = client_for(&mock_server);
    let series = client
        .fetch_metrics(
            &test_credential(),
            TEST_ENTITY,
            "mnist-baseline",
            &RunName::from("nope"),
        )
        .await
        .unwrap();

    assert!(series.is_empty());
}
