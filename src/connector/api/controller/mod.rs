pub mod config_controller;
pub mod insult_controller;

pub use config_controller::ConfigController;
pub use insult_controller::InsultController;
