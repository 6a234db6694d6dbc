use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::DomainError;

/// Operations exposed by the insult service on the event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "getInsult")]
    GetInsult,
    #[serde(rename = "namedInsult")]
    NamedInsult,
    #[serde(rename = "check")]
    Check,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetInsult => "getInsult",
            Action::NamedInsult => "namedInsult",
            Action::Check => "check",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "getInsult" => Ok(Action::GetInsult),
            "namedInsult" => Ok(Action::NamedInsult),
            "check" => Ok(Action::Check),
            unknown => Err(DomainError::invalid_input(format!(
                "unknown action '{}'",
                unknown
            ))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headers {
    pub action: String,
}

/// A request message addressed to a service on the bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub address: String,
    pub headers: Headers,
    pub body: Value,
    pub reply_address: String,
}

impl Envelope {
    pub fn new(address: impl Into<String>, action: Action, body: Value) -> Self {
        Self {
            address: address.into(),
            headers: Headers {
                action: action.as_str().to_string(),
            },
            body,
            reply_address: Uuid::new_v4().to_string(),
        }
    }

    pub fn action(&self) -> Result<Action, DomainError> {
        Action::parse(&self.headers.action)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub body: Value,
}

impl Reply {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}
