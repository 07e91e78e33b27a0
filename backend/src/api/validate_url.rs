//! `GET /validate_url/`: ask the API whether a link serves a usable PDF.

use common::api_error::{ApiEndpoint, ApiFailure};
use common::pdf_file::looks_like_pdf_url;
use tracing::info;

use crate::api::response::{check_status, no_response};
use crate::client_utils::summarease_client::SummareaseClient;

const ENDPOINT: ApiEndpoint = ApiEndpoint::ValidateUrl;

impl SummareaseClient {
    /// `Ok(false)` when the link fails the local check and the API is never asked.
    pub async fn validate_url(&self, url: &str) -> Result<bool, ApiFailure> {
        let url = url.trim();
        if !looks_like_pdf_url(url) {
            info!("Not asking the API about {:?}: not a .pdf link", url);
            return Ok(false);
        }
        let response = self
            .http
            .get(self.settings.endpoint_url(ENDPOINT))
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| no_response(ENDPOINT, e))?;
        check_status(ENDPOINT, response).await?;
        Ok(true)
    }
}

pub async fn validate_url(url: String) -> Result<bool, ApiFailure> {
    let client = SummareaseClient::from_env().map_err(|e| {
        tracing::error!("validate_url: bad configuration: {:#?}", e);
        ApiFailure::unreachable(ENDPOINT, e.to_string())
    })?;
    client.validate_url(&url).await
}
