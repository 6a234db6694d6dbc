use async_trait::async_trait;

use crate::domain::{DomainError, Envelope, Reply};

/// Delivers a request envelope to its address and resolves with the
/// correlated reply.
///
/// Implementations must not time out or retry on their own: a reply that
/// never arrives leaves the returned future pending.
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    async fn send(&self, envelope: Envelope) -> Result<Reply, DomainError>;
}

/// Consumes envelopes delivered to an address and produces their replies.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle(&self, envelope: Envelope) -> Result<Reply, DomainError>;
}
