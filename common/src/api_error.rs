//! User-facing messages for failed calls to the parsing API.

use serde::{Deserialize, Serialize};

pub const SERVER_DOWN_MESSAGE: &str = "The server is down. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiEndpoint {
    Upload,
    ValidateUrl,
}

impl ApiEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Upload => "/upload",
            Self::ValidateUrl => "/validate_url/",
        }
    }
}

/// Message for a status code returned by an endpoint. `None` means no response arrived.
pub fn api_error_message(endpoint: ApiEndpoint, status: Option<u16>) -> &'static str {
    match (endpoint, status) {
        (ApiEndpoint::Upload, Some(400)) => "This PDF does not look like a scholarly article.",
        (ApiEndpoint::Upload, Some(415)) => "This PDF is broken or could not be read.",
        (ApiEndpoint::Upload, Some(500)) => "Something went wrong while processing the article.",
        (ApiEndpoint::Upload, Some(503)) => "The article parsing service is unavailable. Please try again later.",
        (ApiEndpoint::ValidateUrl, Some(415)) => "The link does not point to a PDF.",
        (ApiEndpoint::ValidateUrl, Some(500)) => "The link is invalid or could not be reached.",
        _ => SERVER_DOWN_MESSAGE,
    }
}

/// A failed API call: the endpoint, the HTTP status if one arrived, and any detail sent back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub endpoint: ApiEndpoint,
    pub status: Option<u16>,
    pub detail: String,
}

impl ApiFailure {
    pub fn status(endpoint: ApiEndpoint, status: u16, detail: impl Into<String>) -> Self {
        Self { endpoint, status: Some(status), detail: detail.into() }
    }

    pub fn unreachable(endpoint: ApiEndpoint, detail: impl Into<String>) -> Self {
        Self { endpoint, status: None, detail: detail.into() }
    }

    pub fn user_message(&self) -> &'static str {
        api_error_message(self.endpoint, self.status)
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} returned {}: {}", self.endpoint.path(), status, self.detail),
            None => write!(f, "{} unreachable: {}", self.endpoint.path(), self.detail),
        }
    }
}

impl std::error::Error for ApiFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_statuses_have_distinct_messages() {
        let messages = [400, 415, 500, 503].map(|code| api_error_message(ApiEndpoint::Upload, Some(code)));
        for (i, a) in messages.iter().enumerate() {
            assert_ne!(*a, SERVER_DOWN_MESSAGE);
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_status_and_no_response_fall_back() {
        assert_eq!(api_error_message(ApiEndpoint::Upload, Some(418)), SERVER_DOWN_MESSAGE);
        assert_eq!(api_error_message(ApiEndpoint::Upload, None), SERVER_DOWN_MESSAGE);
        assert_eq!(api_error_message(ApiEndpoint::ValidateUrl, Some(503)), SERVER_DOWN_MESSAGE);
    }

    #[test]
    fn validate_url_has_its_own_table() {
        assert_ne!(api_error_message(ApiEndpoint::ValidateUrl, Some(415)), api_error_message(ApiEndpoint::Upload, Some(415)));
        let failure = ApiFailure::status(ApiEndpoint::ValidateUrl, 500, "bad link");
        assert_eq!(failure.user_message(), "The link is invalid or could not be reached.");
        assert_eq!(failure.to_string(), "/validate_url/ returned 500: bad link");
    }
}
