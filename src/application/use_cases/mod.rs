mod insult_store;

pub use insult_store::*;
