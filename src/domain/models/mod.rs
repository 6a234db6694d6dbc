mod client_state;
mod envelope;
mod health;
mod insult;
mod ui_config;

pub use client_state::*;
pub use envelope::*;
pub use health::*;
pub use insult::*;
pub use ui_config::*;
