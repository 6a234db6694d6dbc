mod config_source;
mod insult_api;
mod insult_service;
mod message_dispatcher;

pub use config_source::*;
pub use insult_api::*;
pub use insult_service::*;
pub use message_dispatcher::*;
