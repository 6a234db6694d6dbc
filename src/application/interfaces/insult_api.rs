use async_trait::async_trait;

use crate::domain::{DomainError, InsultResult};

/// The REST insult endpoint.
///
/// The base URL is passed per call because the store may replace it at any
/// time through a config load.
#[async_trait]
pub trait InsultApi: Send + Sync {
    /// `GET {base_url}/insult`
    async fn fetch_insult(&self, base_url: &str) -> Result<InsultResult, DomainError>;

    /// `POST {base_url}/insult` with `{ "name": name }`
    async fn fetch_named_insult(
        &self,
        base_url: &str,
        name: &str,
    ) -> Result<InsultResult, DomainError>;
}
