// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Folio

// Server Configuration
pub const PORT: &str = "PORT";
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const SITE_URL: &str = "SITE_URL";

// GitHub
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";
pub const PORTFOLIO_MARKER: &str = "PORTFOLIO_MARKER";

// Generation Service
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

// Identity Provider & Admin
pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const ADMIN_EMAILS: &str = "ADMIN_EMAILS";

// Outbound HTTP
pub const FOLIO_HTTP_TIMEOUT_SECS: &str = "FOLIO_HTTP_TIMEOUT_SECS";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// Defaults
pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://folio.db?mode=rwc";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
