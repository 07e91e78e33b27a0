//! `POST /upload`: parse and summarise an uploaded article.

use common::api_error::{ApiEndpoint, ApiFailure};
use common::article::UploadResponse;
use common::pdf_file::UploadedPdf;
use reqwest::multipart::{Form, Part};
use tracing::info;

use crate::api::response::{check_status, no_response};
use crate::client_utils::summarease_client::SummareaseClient;

const ENDPOINT: ApiEndpoint = ApiEndpoint::Upload;

impl SummareaseClient {
    pub async fn upload_pdf(&self, file: UploadedPdf) -> Result<UploadResponse, ApiFailure> {
        info!("Uploading {} ({} bytes)", file.file_name, file.bytes.len());
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime_type)
            .map_err(|e| no_response(ENDPOINT, e))?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.settings.endpoint_url(ENDPOINT))
            .multipart(form)
            .send()
            .await
            .map_err(|e| no_response(ENDPOINT, e))?;
        let response = check_status(ENDPOINT, response).await?;

        // A body we cannot decode is reported like the API's own serialisation failure.
        let article = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| ApiFailure::status(ENDPOINT, 500, format!("Invalid response body: {e}")))?;
        info!("Parsed article: {:?}", article.article.bibliography.title);
        Ok(article)
    }
}

/// Uploads with settings taken from the environment.
pub async fn upload_pdf(file: UploadedPdf) -> Result<UploadResponse, ApiFailure> {
    let client = SummareaseClient::from_env().map_err(|e| {
        tracing::error!("upload_pdf: bad configuration: {:#?}", e);
        ApiFailure::unreachable(ENDPOINT, e.to_string())
    })?;
    client.upload_pdf(file).await
}
