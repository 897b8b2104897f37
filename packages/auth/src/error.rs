// ABOUTME: Error types for identity-provider calls
// ABOUTME: Internal to the crate's fallible paths; the admin check itself never errors

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired or invalid")]
    InvalidToken,

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Email is not on the admin allow-list")]
    NotAllowed,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}
