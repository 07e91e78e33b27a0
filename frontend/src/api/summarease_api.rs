//! Server functions proxying to the parsing API.

use common::api_error::SERVER_DOWN_MESSAGE;
use common::article::UploadResponse;
use common::pdf_file::UploadedPdf;
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn api_failure_to_server_error(failure: common::api_error::ApiFailure) -> ServerFnError {
    ServerFnError::ServerError {
        message: failure.user_message().to_string(),
        code: failure.status.unwrap_or(503),
        details: serde_json::to_value(&failure).ok(),
    }
}

#[server]
pub async fn upload_pdf(file: UploadedPdf) -> Result<UploadResponse, ServerFnError> {
    backend::api::upload_pdf(file).await.map_err(api_failure_to_server_error)
}

#[server]
pub async fn validate_pdf_url(url: String) -> Result<bool, ServerFnError> {
    backend::api::validate_url(url).await.map_err(api_failure_to_server_error)
}

/// The message to show for a failed server call.
///
/// Errors raised by the parsing API already carry their message; anything else means
/// the app server itself could not be reached.
pub fn user_facing_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => SERVER_DOWN_MESSAGE.to_string(),
    }
}
