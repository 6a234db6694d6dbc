use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// An insult assembled by the backend: a list of adjectives, a noun, and
/// optionally the subject it is directed at.
///
/// Decodes both the REST shape (`adj: [..]`) and the service-proxy reply
/// shape (`adj1`, `adj2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawInsult")]
pub struct InsultResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(rename = "adj")]
    adjectives: Vec<String>,
    noun: String,
}

#[derive(Deserialize)]
struct RawInsult {
    subject: Option<String>,
    #[serde(default)]
    adj: Vec<String>,
    adj1: Option<String>,
    adj2: Option<String>,
    noun: String,
}

impl From<RawInsult> for InsultResult {
    fn from(raw: RawInsult) -> Self {
        let adjectives = if raw.adj.is_empty() {
            raw.adj1.into_iter().chain(raw.adj2).collect()
        } else {
            raw.adj
        };
        Self {
            subject: raw.subject,
            adjectives,
            noun: raw.noun,
        }
    }
}

impl InsultResult {
    pub fn new(adjectives: Vec<String>, noun: impl Into<String>) -> Self {
        Self {
            subject: None,
            adjectives,
            noun: noun.into(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Decode a response body. Bodies that are a JSON string holding the
    /// document are unwrapped once first.
    pub fn from_body(body: &str) -> Result<Self, DomainError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        let value = match value {
            serde_json::Value::String(inner) => serde_json::from_str(&inner)?,
            other => other,
        };
        Ok(serde_json::from_value(value)?)
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    pub fn noun(&self) -> &str {
        &self.noun
    }

    /// The display sentence: `Thou vile, rank knave`, or
    /// `Bob, thou art an vile knave` when a subject is set.
    pub fn phrase(&self) -> String {
        let mut words = self.adjectives.join(", ");
        if !words.is_empty() {
            words.push(' ');
        }
        words.push_str(&self.noun);

        match &self.subject {
            Some(subject) => format!("{}, thou art an {}", subject, words),
            None => format!("Thou {}", words),
        }
    }
}
