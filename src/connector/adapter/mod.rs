mod http_config_source;
mod http_insult_api;
mod insult_service_binder;
mod insult_service_proxy;
mod local_event_bus;

pub use http_config_source::*;
pub use http_insult_api::*;
pub use insult_service_binder::*;
pub use insult_service_proxy::*;
pub use local_event_bus::*;
