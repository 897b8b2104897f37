// ABOUTME: Folio binary support: configuration, service wiring and output helpers
// ABOUTME: Shared by the folio binary and its tests

pub mod app;
pub mod config;
pub mod table;

pub use config::{Config, ConfigError};

#[cfg(test)]
mod tests;
