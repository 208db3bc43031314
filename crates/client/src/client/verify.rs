//! Credential verification for [`WandbClient`].

use crate::auth::Credential;
use crate::client::WandbClient;
use crate::endpoints;
use crate::error::AuthError;

impl WandbClient {
    /// Check whether the service accepts `credential`.
    ///
    /// See [`endpoints::verify_credential`] for how outcomes map to results.
    pub async fn verify(&self, credential: &Credential) -> Result<bool, AuthError> {
        endpoints::verify_credential(
            &self.http,
            &self.endpoint,
            credential,
            self.metrics.as_ref(),
        )
        .await
    }
}
