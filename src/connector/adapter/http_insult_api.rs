use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::application::InsultApi;
use crate::domain::{DomainError, InsultResult};

const INSULT_PATH: &str = "/insult";

#[derive(Serialize)]
struct NamedInsultRequest<'a> {
    name: &'a str,
}

/// Client for the REST insult endpoint.
///
/// No timeout is configured: a request that never completes leaves the
/// caller waiting.
pub struct HttpInsultApi {
    client: reqwest::Client,
}

impl HttpInsultApi {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn url(base_url: &str) -> String {
        format!("{}{INSULT_PATH}", base_url.trim_end_matches('/'))
    }

    async fn read_insult(response: reqwest::Response) -> Result<InsultResult, DomainError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("HttpInsultApi: endpoint returned {status}: {body}");
            return Err(DomainError::network(format!(
                "HttpInsultApi: endpoint returned {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::network(format!("HttpInsultApi: failed to read body: {e}")))?;
        InsultResult::from_body(&body)
    }
}

impl Default for HttpInsultApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsultApi for HttpInsultApi {
    async fn fetch_insult(&self, base_url: &str) -> Result<InsultResult, DomainError> {
        let url = Self::url(base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("HttpInsultApi: request failed: {e}")))?;

        Self::read_insult(response).await
    }

    async fn fetch_named_insult(
        &self,
        base_url: &str,
        name: &str,
    ) -> Result<InsultResult, DomainError> {
        let url = Self::url(base_url);
        debug!("POST {} (name={})", url, name);

        let response = self
            .client
            .post(&url)
            .json(&NamedInsultRequest { name })
            .send()
            .await
            .map_err(|e| DomainError::network(format!("HttpInsultApi: request failed: {e}")))?;

        Self::read_insult(response).await
    }
}
