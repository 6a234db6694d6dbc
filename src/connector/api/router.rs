use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ConfigController, InsultController};

pub struct Router<'a> {
    insult_controller: InsultController<'a>,
    config_controller: ConfigController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            insult_controller: InsultController::new(container),
            config_controller: ConfigController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Insult { name } => self.insult_controller.insult(name).await,
            Commands::Config { json } => self.config_controller.show(json).await,
        }
    }
}
