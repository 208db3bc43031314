//! GraphQL transport.
//!
//! Sends one POST per call and classifies the outcome, in this order:
//! 1. no response at all → [`TransportError::NetworkFailure`]
//! 2. status other than 200 → [`TransportError::HttpStatus`]
//! 3. body is not a JSON object → [`TransportError::MalformedPayload`]
//! 4. non-empty `errors` array → [`TransportError::GraphQLErrors`], even if `data` is present
//! 5. missing or null `data` → [`TransportError::MalformedPayload`]
//!
//! Nothing is retried here. Each call runs in a `graphql` span whose trace
//! context travels with the request.

use std::time::Instant;

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{Instrument, debug, info_span};

use crate::auth::Credential;
use crate::error::TransportError;
use crate::metrics::MetricsCollector;
use crate::tracing::inject_trace_context;

/// Request body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a Map<String, Value>>,
}

/// Execute a GraphQL document and return its `data` object.
///
/// # Arguments
///
/// * `client` - HTTP client for making requests
/// * `endpoint` - Full URL of the GraphQL endpoint
/// * `credential` - Credential used for the Authorization header
/// * `operation` - Short operation name used for logs and metrics
/// * `query` - GraphQL document
/// * `variables` - Optional variables object
/// * `metrics` - Optional metrics collector
pub async fn execute(
    client: &Client,
    endpoint: &str,
    credential: &Credential,
    operation: &str,
    query: &str,
    variables: Option<&Map<String, Value>>,
    metrics: Option<&MetricsCollector>,
) -> Result<Value, TransportError> {
    let span = info_span!("graphql", operation);

    async move {
        let body = GraphQLRequest { query, variables };

        let builder = client
            .post(endpoint)
            .header(AUTHORIZATION, credential.auth_header())
            .json(&body);
        let builder = inject_trace_context(builder);

        debug!(
            operation,
            key = %credential.key_preview(),
            "Sending GraphQL request"
        );

        if let Some(m) = metrics {
            m.record_request(operation);
        }

        let start = Instant::now();
        let (status, result) = send(builder).await;
        let elapsed = start.elapsed();

        if let Some(m) = metrics {
            m.record_request_duration(operation, elapsed, status);
            if let Err(ref e) = result {
                m.record_error(operation, e);
            }
        }

        match &result {
            Ok(_) => debug!(operation, ?status, ?elapsed, "GraphQL request succeeded"),
            Err(e) => debug!(operation, ?status, ?elapsed, error = %e, "GraphQL request failed"),
        }

        result
    }
    .instrument(span)
    .await
}

async fn send(builder: reqwest::RequestBuilder) -> (Option<u16>, Result<Value, TransportError>) {
    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => return (None, Err(e.into())),
    };

    let status = response.status().as_u16();
    if status != 200 {
        return (Some(status), Err(TransportError::HttpStatus(status)));
    }

    let result = match response.bytes().await {
        Ok(bytes) => parse_payload(&bytes),
        Err(e) => Err(e.into()),
    };
    (Some(status), result)
}

/// Classify the body of a 200 response.
pub fn parse_payload(body: &[u8]) -> Result<Value, TransportError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| TransportError::MalformedPayload(format!("response is not JSON: {e}")))?;

    let Value::Object(mut top) = payload else {
        return Err(TransportError::MalformedPayload(
            "response is not a JSON object".to_string(),
        ));
    };

    match top.get("errors") {
        None | Some(Value::Null) => {}
        Some(Value::Array(errors)) if errors.is_empty() => {}
        Some(Value::Array(errors)) => {
            return Err(TransportError::GraphQLErrors(
                errors.iter().map(error_message).collect(),
            ));
        }
        Some(other) => return Err(TransportError::GraphQLErrors(vec![other.to_string()])),
    }

    match top.remove("data") {
        None | Some(Value::Null) => Err(TransportError::MalformedPayload(
            "response has no data".to_string(),
        )),
        Some(data) => Ok(data),
    }
}

/// The `message` of a GraphQL error entry, or the entry's JSON text.
fn error_message(error: &Value) -> String {
    error
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}
