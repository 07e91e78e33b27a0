//! Environment configuration for the parsing API.

use std::time::Duration;

use anyhow::Context;
use common::api_error::ApiEndpoint;

pub const API_URL_VAR: &str = "SUMMAREASE_API_URL";
pub const API_TIMEOUT_VAR: &str = "SUMMAREASE_API_TIMEOUT_SECS";
const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub api_url: String,
    pub timeout: Duration,
}

impl ApiSettings {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        let api_url = api_url.into().trim().trim_end_matches('/').to_string();
        Self { api_url, timeout }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = std::env::var(API_URL_VAR).unwrap_or(DEFAULT_API_URL.to_string());
        let timeout_secs = match std::env::var(API_TIMEOUT_VAR) {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{API_TIMEOUT_VAR} must be a whole number of seconds, got {value:?}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let settings = Self::new(api_url, Duration::from_secs(timeout_secs));
        anyhow::ensure!(!settings.api_url.is_empty(), "{API_URL_VAR} is empty");
        Ok(settings)
    }

    pub fn endpoint_url(&self, endpoint: ApiEndpoint) -> String {
        format!("{}{}", self.api_url, endpoint.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let settings = ApiSettings::new("http://api.local:8000/ ", Duration::from_secs(5));
        assert_eq!(settings.endpoint_url(ApiEndpoint::Upload), "http://api.local:8000/upload");
        assert_eq!(settings.endpoint_url(ApiEndpoint::ValidateUrl), "http://api.local:8000/validate_url/");
    }
}
