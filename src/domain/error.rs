use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Proxy is closed")]
    ProxyClosed,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("No handlers for address: {0}")]
    NoHandlers(String),

    #[error("Remote error: {0}")]
    RemoteError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::NetworkError(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }

    pub fn no_handlers(address: impl Into<String>) -> Self {
        Self::NoHandlers(address.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_proxy_closed(&self) -> bool {
        matches!(self, Self::ProxyClosed)
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError(_))
    }

    pub fn is_no_handlers(&self) -> bool {
        matches!(self, Self::NoHandlers(_))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeError(err.to_string())
    }
}
