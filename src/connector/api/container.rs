use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::InsultStore;
use crate::connector::adapter::{HttpConfigSource, HttpInsultApi};
use crate::domain::{ClientState, DEFAULT_API_BASE_URL};

pub const API_BASE_URL_ENV: &str = "INSULT_API_BASE_URL";
pub const PAGE_URL_ENV: &str = "INSULT_PAGE_URL";

pub struct ContainerConfig {
    /// Base URL of the REST insult endpoint. Falls back to
    /// `INSULT_API_BASE_URL`, then to `http://localhost:8080`.
    pub api_base_url: Option<String>,
    /// URL of the page serving `default.json`. Falls back to
    /// `INSULT_PAGE_URL`; no config load happens when neither is set.
    pub page_url: Option<String>,
    pub service_proxies: bool,
}

impl ContainerConfig {
    fn resolved_api_base_url(&self) -> String {
        self.api_base_url
            .clone()
            .or_else(|| std::env::var(API_BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    fn resolved_page_url(&self) -> Option<String> {
        self.page_url
            .clone()
            .or_else(|| std::env::var(PAGE_URL_ENV).ok())
    }
}

pub struct Container {
    store: InsultStore,
}

impl Container {
    pub async fn new(config: ContainerConfig) -> Result<Self> {
        let api_base_url = config.resolved_api_base_url();
        debug!("Using insult API at {}", api_base_url);

        let mut store = InsultStore::new(
            ClientState::new(api_base_url),
            Arc::new(HttpInsultApi::new()),
        );

        if let Some(page_url) = config.resolved_page_url() {
            let source = HttpConfigSource::new(&page_url);
            debug!("Loading configuration from {}", source.url());
            store = store.with_config_source(Arc::new(source));
            store.load_config().await;
        }

        if config.service_proxies {
            store.toggle_service_proxies().await;
        }

        Ok(Self { store })
    }

    pub fn store(&self) -> &InsultStore {
        &self.store
    }
}
