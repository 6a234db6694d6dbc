//! # Domain Layer
//!
//! Core models and errors for the insult client.
//! This layer is independent of transports and HTTP clients.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
