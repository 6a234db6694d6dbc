use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Written to `current_insult` when a fetch fails.
pub const REQUEST_ERROR_MARKER: &str = "[request error]";

/// UI-facing state owned by the client store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientState {
    pub current_insult: String,
    pub current_subject: String,
    pub api_base_url: String,
    pub service_proxies_enabled: bool,
}

impl ClientState {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            current_insult: String::new(),
            current_subject: String::new(),
            api_base_url: api_base_url.into(),
            service_proxies_enabled: false,
        }
    }

    /// The subject to address, if one is set. Blank subjects count as unset.
    pub fn subject(&self) -> Option<&str> {
        let subject = self.current_subject.trim();
        (!subject.is_empty()).then_some(subject)
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
