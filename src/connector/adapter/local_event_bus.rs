use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::application::{MessageDispatcher, MessageHandler};
use crate::domain::{DomainError, Envelope, Reply};

const CONSUMER_BUFFER: usize = 64;

type Delivery = (Envelope, oneshot::Sender<Result<Reply, DomainError>>);

/// In-process request/reply bus. Each registered address gets one consumer
/// task; every delivered envelope is handled on its own task so a slow
/// reply does not hold up the next message.
///
/// [`register`](Self::register) must be called from within a tokio runtime.
pub struct LocalEventBus {
    consumers: RwLock<HashMap<String, mpsc::Sender<Delivery>>>,
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self {
            consumers: RwLock::new(HashMap::new()),
        }
    }

    /// Binds `handler` to `address`, replacing any previous consumer.
    pub fn register(
        &self,
        address: impl Into<String>,
        handler: Arc<dyn MessageHandler>,
    ) -> Result<(), DomainError> {
        let address = address.into();
        let (tx, mut rx) = mpsc::channel::<Delivery>(CONSUMER_BUFFER);

        let consumer_address = address.clone();
        tokio::spawn(async move {
            while let Some((envelope, reply_tx)) = rx.recv().await {
                let handler = Arc::clone(&handler);
                tokio::spawn(async move {
                    let reply = handler.handle(envelope).await;
                    let _ = reply_tx.send(reply);
                });
            }
            debug!("Consumer for {} stopped", consumer_address);
        });

        let mut consumers = self
            .consumers
            .write()
            .map_err(|_| DomainError::internal("event bus lock poisoned"))?;
        if consumers.insert(address.clone(), tx).is_some() {
            debug!("Replaced consumer for {}", address);
        }
        Ok(())
    }

    /// Removes the consumer for `address`. Returns whether one was bound.
    pub fn unregister(&self, address: &str) -> Result<bool, DomainError> {
        let mut consumers = self
            .consumers
            .write()
            .map_err(|_| DomainError::internal("event bus lock poisoned"))?;
        Ok(consumers.remove(address).is_some())
    }

    pub fn is_registered(&self, address: &str) -> bool {
        self.consumers
            .read()
            .map(|consumers| consumers.contains_key(address))
            .unwrap_or(false)
    }
}

impl Default for LocalEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageDispatcher for LocalEventBus {
    async fn send(&self, envelope: Envelope) -> Result<Reply, DomainError> {
        let consumer = self
            .consumers
            .read()
            .map_err(|_| DomainError::internal("event bus lock poisoned"))?
            .get(&envelope.address)
            .cloned()
            .ok_or_else(|| DomainError::no_handlers(envelope.address.clone()))?;

        let address = envelope.address.clone();
        let (reply_tx, reply_rx) = oneshot::channel();
        consumer
            .send((envelope, reply_tx))
            .await
            .map_err(|_| DomainError::no_handlers(address.clone()))?;

        reply_rx
            .await
            .map_err(|_| DomainError::internal(format!("consumer at {} dropped the reply", address)))?
    }
}
