//! Run listing for [`WandbClient`].

use crate::auth::Credential;
use crate::client::WandbClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Run;

impl WandbClient {
    /// List the runs of `entity/project`.
    pub async fn fetch_runs(
        &self,
        credential: &Credential,
        entity: &str,
        project: &str,
    ) -> Result<Vec<Run>> {
        endpoints::list_runs(
            &self.http,
            &self.endpoint,
            credential,
            entity,
            project,
            self.metrics.as_ref(),
        )
        .await
    }
}
