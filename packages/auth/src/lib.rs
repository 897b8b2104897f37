// ABOUTME: Folio admin authorization
// ABOUTME: Email allow-list, identity-provider lookups and the infallible admin check

pub mod allow_list;
pub mod error;
pub mod gate;
pub mod identity;

// Re-export main types
pub use allow_list::AdminAllowList;
pub use error::{AuthError, AuthResult};
pub use gate::{bearer_token, AdminGate, AdminVerification, AdminVerifier};
pub use identity::{IdentityClient, IdentityConfig, IdentityUser};
