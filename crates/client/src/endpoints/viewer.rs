//! Credential verification.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::Credential;
use crate::endpoints::graphql;
use crate::endpoints::queries::VIEWER_QUERY;
use crate::error::AuthError;
use crate::metrics::MetricsCollector;

const OPERATION: &str = "verify_credential";

/// Check whether the service accepts the credential.
///
/// Returns `Ok(true)` when the viewer is a non-null object and `Ok(false)`
/// when the service answers with a null or missing viewer. Every transport
/// failure, and an empty key, collapse into [`AuthError::Failed`].
pub async fn verify_credential(
    client: &Client,
    endpoint: &str,
    credential: &Credential,
    metrics: Option<&MetricsCollector>,
) -> Result<bool, AuthError> {
    if credential.is_empty() {
        debug!("Refusing to verify an empty API key");
        return Err(AuthError::Failed);
    }

    let data = graphql::execute(
        client,
        endpoint,
        credential,
        OPERATION,
        VIEWER_QUERY,
        None,
        metrics,
    )
    .await
    .map_err(|e| {
        warn!(error = %e, "Credential verification failed");
        AuthError::Failed
    })?;

    let accepted = matches!(data.get("viewer"), Some(Value::Object(_)));
    debug!(accepted, key = %credential.key_preview(), "Credential verified");
    Ok(accepted)
}
