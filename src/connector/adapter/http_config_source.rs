use async_trait::async_trait;
use tracing::debug;

use crate::application::ConfigSource;
use crate::domain::{DomainError, UiConfig};

const CONFIG_DOCUMENT: &str = "/default.json";

/// Fetches `default.json` from the page the UI was loaded from.
pub struct HttpConfigSource {
    client: reqwest::Client,
    url: String,
}

impl HttpConfigSource {
    pub fn new(page_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{CONFIG_DOCUMENT}", page_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    async fn fetch(&self) -> Result<UiConfig, DomainError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("HttpConfigSource: request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::network(format!(
                "HttpConfigSource: server returned {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::network(format!("HttpConfigSource: failed to read body: {e}")))?;
        Ok(serde_json::from_str(&body)?)
    }
}
