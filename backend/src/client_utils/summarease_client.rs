use anyhow::Context;

use crate::config::ApiSettings;

/// HTTP client bound to one parsing API deployment.
#[derive(Debug, Clone)]
pub struct SummareaseClient {
    pub(crate) http: reqwest::Client,
    pub(crate) settings: ApiSettings,
}

impl SummareaseClient {
    pub fn new(settings: ApiSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build http client")?;
        Ok(Self { http, settings })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(ApiSettings::from_env()?)
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }
}
