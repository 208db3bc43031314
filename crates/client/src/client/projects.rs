//! Project listing for [`WandbClient`].

use crate::auth::Credential;
use crate::client::WandbClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Project;

impl WandbClient {
    /// List the projects visible to the credential's viewer.
    pub async fn fetch_projects(&self, credential: &Credential) -> Result<Vec<Project>> {
        endpoints::list_projects(
            &self.http,
            &self.endpoint,
            credential,
            self.metrics.as_ref(),
        )
        .await
    }
}
