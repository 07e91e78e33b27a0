//! Status handling shared by the API calls.

use common::api_error::{ApiEndpoint, ApiFailure};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Passes successful responses through and turns everything else into an [`ApiFailure`].
pub(crate) async fn check_status(endpoint: ApiEndpoint, response: reqwest::Response) -> Result<reqwest::Response, ApiFailure> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let failure = ApiFailure::status(endpoint, status.as_u16(), error_detail(&body));
    tracing::error!("{}", failure);
    Err(failure)
}

pub(crate) fn no_response(endpoint: ApiEndpoint, error: reqwest::Error) -> ApiFailure {
    let failure = ApiFailure::unreachable(endpoint, error.to_string());
    tracing::error!("{}: {:#?}", failure, error);
    failure
}

// FastAPI wraps errors as {"detail": ...}; anything else is passed through as text.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { detail: serde_json::Value::String(detail) }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_unwrapped() {
        assert_eq!(error_detail(r#"{"detail": "Invalid document type"}"#), "Invalid document type");
        assert_eq!(error_detail(r#"{"detail": [{"loc": "file"}]}"#), r#"[{"loc":"file"}]"#);
        assert_eq!(error_detail(" upstream exploded \n"), "upstream exploded");
    }
}
