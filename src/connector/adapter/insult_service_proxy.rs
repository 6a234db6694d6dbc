use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::application::{InsultService, MessageDispatcher};
use crate::domain::{Action, DomainError, Envelope, HealthReport, InsultResult};

/// Default bus address the insult service is bound to.
pub const DEFAULT_INSULT_ADDRESS: &str = "insult.service";

/// Client-side stand-in for the insult service. Every call becomes exactly
/// one envelope sent through the [`MessageDispatcher`] to `address`.
///
/// Once [`close`](Self::close)d, every call fails with
/// [`DomainError::ProxyClosed`] without sending anything.
pub struct InsultServiceProxy {
    dispatcher: Arc<dyn MessageDispatcher>,
    address: String,
    closed: AtomicBool,
}

impl InsultServiceProxy {
    pub fn new(dispatcher: Arc<dyn MessageDispatcher>, address: impl Into<String>) -> Self {
        Self {
            dispatcher,
            address: address.into(),
            closed: AtomicBool::new(false),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    async fn call(&self, action: Action, body: Value) -> Result<Value, DomainError> {
        if self.is_closed() {
            return Err(DomainError::ProxyClosed);
        }

        let envelope = Envelope::new(&self.address, action, body);
        debug!(
            "Dispatching {} to {} (reply {})",
            action, self.address, envelope.reply_address
        );

        let reply = self.dispatcher.send(envelope).await?;
        Ok(reply.body)
    }
}

#[async_trait]
impl InsultService for InsultServiceProxy {
    async fn get_insult(&self) -> Result<InsultResult, DomainError> {
        let body = self.call(Action::GetInsult, json!({})).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn named_insult(&self, name: &str) -> Result<InsultResult, DomainError> {
        let body = self.call(Action::NamedInsult, json!({ "name": name })).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn check(&self) -> Result<HealthReport, DomainError> {
        let body = self.call(Action::Check, json!({})).await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::domain::Reply;

    struct RecordingDispatcher {
        sent: Mutex<Vec<Envelope>>,
        reply: Result<Value, String>,
    }

    impl RecordingDispatcher {
        fn replying(body: Value) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                reply: Ok(body),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                reply: Err(message.to_string()),
            }
        }

        fn sent(&self) -> Vec<Envelope> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageDispatcher for RecordingDispatcher {
        async fn send(&self, envelope: Envelope) -> Result<Reply, DomainError> {
            self.sent.lock().unwrap().push(envelope);
            self.reply
                .clone()
                .map(Reply::new)
                .map_err(DomainError::remote)
        }
    }

    struct SilentDispatcher;

    #[async_trait]
    impl MessageDispatcher for SilentDispatcher {
        async fn send(&self, _envelope: Envelope) -> Result<Reply, DomainError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_get_insult_sends_one_envelope() {
        let dispatcher = Arc::new(RecordingDispatcher::replying(
            json!({"adj": ["vile", "rank"], "noun": "knave"}),
        ));
        let proxy = InsultServiceProxy::new(dispatcher.clone(), DEFAULT_INSULT_ADDRESS);

        let insult = proxy.get_insult().await.unwrap();

        assert_eq!(insult.phrase(), "Thou vile, rank knave");
        let sent = dispatcher.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].address, "insult.service");
        assert_eq!(sent[0].headers.action, "getInsult");
        assert_eq!(sent[0].body, json!({}));
    }

    #[tokio::test]
    async fn test_named_insult_carries_name() {
        let dispatcher = Arc::new(RecordingDispatcher::replying(
            json!({"subject": "Bob", "adj1": "vile", "noun": "knave"}),
        ));
        let proxy = InsultServiceProxy::new(dispatcher.clone(), "insults");

        let insult = proxy.named_insult("Bob").await.unwrap();

        assert_eq!(insult.phrase(), "Bob, thou art an vile knave");
        let sent = dispatcher.sent();
        assert_eq!(sent[0].headers.action, "namedInsult");
        assert_eq!(sent[0].body, json!({"name": "Bob"}));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_not_deduplicated() {
        let dispatcher = Arc::new(RecordingDispatcher::replying(
            json!({"adj": ["vile"], "noun": "knave"}),
        ));
        let proxy = InsultServiceProxy::new(dispatcher.clone(), "insults");

        proxy.get_insult().await.unwrap();
        proxy.get_insult().await.unwrap();

        assert_eq!(dispatcher.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_check_relays_remote_failure() {
        let dispatcher = Arc::new(RecordingDispatcher::failing("UNHEALTHY"));
        let proxy = InsultServiceProxy::new(dispatcher.clone(), "insults");

        let err = proxy.check().await.unwrap_err();

        assert!(matches!(err, DomainError::RemoteError(ref m) if m == "UNHEALTHY"));
        assert_eq!(dispatcher.sent()[0].headers.action, "check");
    }

    #[tokio::test]
    async fn test_malformed_reply_is_decode_error() {
        let dispatcher = Arc::new(RecordingDispatcher::replying(json!({"adj": []})));
        let proxy = InsultServiceProxy::new(dispatcher, "insults");

        let err = proxy.get_insult().await.unwrap_err();

        assert!(matches!(err, DomainError::DecodeError(_)));
    }

    #[tokio::test]
    async fn test_closed_proxy_rejects_every_call() {
        let dispatcher = Arc::new(RecordingDispatcher::replying(json!({})));
        let proxy = InsultServiceProxy::new(dispatcher.clone(), "insults");

        proxy.close();
        proxy.close();

        assert!(proxy.is_closed());
        assert!(proxy.get_insult().await.unwrap_err().is_proxy_closed());
        assert!(proxy.named_insult("Bob").await.unwrap_err().is_proxy_closed());
        assert!(proxy.check().await.unwrap_err().is_proxy_closed());
        assert!(dispatcher.sent().is_empty());
    }

    #[tokio::test]
    async fn test_missing_reply_never_resolves() {
        let proxy = InsultServiceProxy::new(Arc::new(SilentDispatcher), "insults");

        let waited = tokio::time::timeout(Duration::from_millis(50), proxy.get_insult()).await;

        assert!(waited.is_err());
    }
}
