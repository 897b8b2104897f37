// ABOUTME: Environment variable names and lookup helpers for Folio
// ABOUTME: Single place where every configuration key is spelled out

pub mod constants;

use std::env;

/// Read an environment variable, treating blank values as unset
pub fn env_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
