use anyhow::Result;

use super::super::Container;

pub struct InsultController<'a> {
    container: &'a Container,
}

impl<'a> InsultController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn insult(&self, name: Option<String>) -> Result<String> {
        let store = self.container.store();

        if let Some(name) = name {
            store.update_subject(name).await;
        }

        Ok(store.update_insult().await)
    }
}
