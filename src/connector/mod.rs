//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - REST insult endpoint and config document (reqwest)
//! - Event-bus service proxy, in-process bus and service binder
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
