//! Core: configuration, shared server state, bootstrap

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::run;
pub use state::ServerState;
