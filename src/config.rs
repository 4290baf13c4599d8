//! Configuration module
//!
//! Resolves the data directory and loads optional settings from TOML.

pub mod loader;
pub mod schema;

pub use loader::STORE_ENV;
pub use schema::{Config, JumpConfig, StoreConfig};
