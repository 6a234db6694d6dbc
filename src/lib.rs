pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ConfigSource, InsultApi, InsultService, InsultStore, MessageDispatcher, MessageHandler};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, HttpConfigSource, HttpInsultApi, InsultServiceBinder,
    InsultServiceProxy, LocalEventBus, Router, DEFAULT_INSULT_ADDRESS,
};

pub use domain::{
    Action, BreakerHealth, BreakerState, ClientState, DomainError, Envelope, HealthReport,
    HealthStatus, InsultResult, Reply, UiConfig, DEFAULT_API_BASE_URL, REQUEST_ERROR_MARKER,
};
