pub mod agent;
pub mod config;
pub mod model;
pub mod prompt;
pub mod server;
