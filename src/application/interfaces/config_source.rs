use async_trait::async_trait;

use crate::domain::{DomainError, UiConfig};

/// Supplies the UI configuration document.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn fetch(&self) -> Result<UiConfig, DomainError>;
}
