use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::{InsultService, MessageHandler};
use crate::domain::{Action, DomainError, Envelope, Reply};

/// Exposes an [`InsultService`] implementation on the bus, decoding the
/// `action` header of each envelope into a service call.
pub struct InsultServiceBinder {
    service: Arc<dyn InsultService>,
}

impl InsultServiceBinder {
    pub fn new(service: Arc<dyn InsultService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MessageHandler for InsultServiceBinder {
    async fn handle(&self, envelope: Envelope) -> Result<Reply, DomainError> {
        let action = envelope.action()?;
        debug!("Handling {} on {}", action, envelope.address);

        let body = match action {
            Action::GetInsult => serde_json::to_value(self.service.get_insult().await?)?,
            Action::NamedInsult => {
                let name = envelope
                    .body
                    .get("name")
                    .and_then(|n| n.as_str())
                    .ok_or_else(|| DomainError::invalid_input("namedInsult requires a name"))?;
                serde_json::to_value(self.service.named_insult(name).await?)?
            }
            Action::Check => serde_json::to_value(self.service.check().await?)?,
        };

        Ok(Reply::new(body))
    }
}
