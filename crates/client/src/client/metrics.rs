//! Run metrics for [`WandbClient`].

use crate::auth::Credential;
use crate::client::WandbClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{MetricSeries, RunName};

impl WandbClient {
    /// Fetch the metric series recorded by run `run` of `entity/project`.
    ///
    /// `run` is the run's name as listed in [`crate::Run::name`], not its id.
    pub async fn fetch_metrics(
        &self,
        credential: &Credential,
        entity: &str,
        project: &str,
        run: &RunName,
    ) -> Result<Vec<MetricSeries>> {
        endpoints::get_run_metrics(
            &self.http,
            &self.endpoint,
            credential,
            entity,
            project,
            run,
            self.metrics.as_ref(),
        )
        .await
    }
}
