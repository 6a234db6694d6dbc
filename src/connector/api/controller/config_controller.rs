use anyhow::Result;

use crate::ClientState;

use super::super::Container;

pub struct ConfigController<'a> {
    container: &'a Container,
}

impl<'a> ConfigController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn show(&self, json: bool) -> Result<String> {
        let state = self.container.store().snapshot().await;

        if json {
            return Ok(serde_json::to_string_pretty(&state)?);
        }
        Ok(self.format_state(&state))
    }

    fn format_state(&self, state: &ClientState) -> String {
        format!(
            "Insult Client Configuration\n===========================\nAPI Base URL:    {}\nService Proxies: {}",
            state.api_base_url,
            if state.service_proxies_enabled {
                "enabled"
            } else {
                "disabled"
            }
        )
    }
}
