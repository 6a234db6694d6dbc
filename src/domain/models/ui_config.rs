use serde::{Deserialize, Serialize};

/// The `default.json` document served next to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    pub api_base_url: String,
}
