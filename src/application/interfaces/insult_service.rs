use async_trait::async_trait;

use crate::domain::{DomainError, HealthReport, InsultResult};

/// The insult service as seen from a client, whether remote or local.
#[async_trait]
pub trait InsultService: Send + Sync {
    async fn get_insult(&self) -> Result<InsultResult, DomainError>;

    /// An insult addressed to `name`.
    async fn named_insult(&self, name: &str) -> Result<InsultResult, DomainError>;

    /// Health of the service's downstream dependencies.
    async fn check(&self) -> Result<HealthReport, DomainError>;
}
