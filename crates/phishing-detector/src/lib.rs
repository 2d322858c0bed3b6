pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod prompt;
pub mod render;
pub mod server;
