use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::application::{ConfigSource, InsultApi};
use crate::domain::{ClientState, REQUEST_ERROR_MARKER};

/// Client-side state container. State changes only through the mutation
/// methods below.
///
/// The state lock is never held across a request, so concurrent
/// [`InsultStore::update_insult`] calls race and the one whose response
/// arrives last wins the final write.
pub struct InsultStore {
    state: RwLock<ClientState>,
    api: Arc<dyn InsultApi>,
    config_source: Option<Arc<dyn ConfigSource>>,
}

impl InsultStore {
    pub fn new(state: ClientState, api: Arc<dyn InsultApi>) -> Self {
        Self {
            state: RwLock::new(state),
            api,
            config_source: None,
        }
    }

    pub fn with_config_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.config_source = Some(source);
        self
    }

    pub async fn snapshot(&self) -> ClientState {
        self.state.read().await.clone()
    }

    pub async fn update_subject(&self, subject: impl Into<String>) {
        self.state.write().await.current_subject = subject.into();
    }

    /// Flips the service-proxy flag and returns the new value.
    ///
    /// Fetches go over REST regardless of the flag.
    pub async fn toggle_service_proxies(&self) -> bool {
        let mut state = self.state.write().await;
        state.service_proxies_enabled = !state.service_proxies_enabled;
        state.service_proxies_enabled
    }

    /// Fetches a fresh insult and stores its display text, or the request
    /// error marker if anything goes wrong. Returns the text written.
    pub async fn update_insult(&self) -> String {
        let (base_url, subject, proxies) = {
            let state = self.state.read().await;
            (
                state.api_base_url.clone(),
                state.subject().map(str::to_string),
                state.service_proxies_enabled,
            )
        };

        if proxies {
            debug!("Service proxies flag is set; fetching over REST");
        }

        let result = match subject {
            None => self.api.fetch_insult(&base_url).await,
            Some(name) => self
                .api
                .fetch_named_insult(&base_url, &name)
                .await
                .map(|insult| {
                    if insult.subject().is_some() {
                        insult
                    } else {
                        insult.with_subject(name)
                    }
                }),
        };

        let text = match result {
            Ok(insult) => insult.phrase(),
            Err(e) => {
                warn!("Insult request to {} failed: {}", base_url, e);
                REQUEST_ERROR_MARKER.to_string()
            }
        };

        self.state.write().await.current_insult = text.clone();
        text
    }

    /// Replaces the API base URL with the one from the config document.
    /// Failures are logged and leave the state untouched.
    pub async fn load_config(&self) {
        let Some(source) = &self.config_source else {
            warn!("No configuration source set; keeping current API base URL");
            return;
        };

        match source.fetch().await {
            Ok(config) => {
                debug!("Loaded API base URL {}", config.api_base_url);
                self.state.write().await.api_base_url = config.api_base_url;
            }
            Err(e) => {
                warn!("Error loading default configuration: {}", e);
            }
        }
    }
}
