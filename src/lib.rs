// Export modules for the binary and tests
pub mod cli;
pub mod color;
pub mod config;
pub mod store;

// Integration modules
pub mod integrations;

// Command modules
pub mod commands;

// Domain modules
pub mod domain;
