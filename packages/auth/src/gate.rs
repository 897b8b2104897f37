// ABOUTME: Admin gate combining the identity provider with the email allow-list
// ABOUTME: Every failure path collapses to "not admin"; nothing is thrown to callers

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::allow_list::AdminAllowList;
use crate::error::{AuthError, AuthResult};
use crate::identity::IdentityClient;

/// Result of checking a bearer credential
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminVerification {
    pub is_admin: bool,
    /// Verified email of the account, when the token resolved to one
    pub email: Option<String>,
}

impl AdminVerification {
    pub fn denied() -> Self {
        Self::default()
    }
}

#[async_trait]
pub trait AdminVerifier: Send + Sync {
    /// Resolve `access_token` and test its email against the allow-list
    async fn verify(&self, access_token: &str) -> AdminVerification;

    async fn is_admin(&self, access_token: &str) -> bool {
        self.verify(access_token).await.is_admin
    }

    /// Pre-login check of a typed-in email
    fn is_allowed_email(&self, email: &str) -> bool;

    /// Send a sign-in link, refusing emails that are not allow-listed
    async fn send_login_link(&self, email: &str) -> AuthResult<()>;
}

pub struct AdminGate {
    allow_list: AdminAllowList,
    identity: Option<IdentityClient>,
    redirect_to: Option<String>,
}

impl AdminGate {
    /// `identity` is optional so the site can run without admin features
    pub fn new(allow_list: AdminAllowList, identity: Option<IdentityClient>) -> Self {
        if identity.is_none() {
            warn!("Identity provider not configured - admin access disabled");
        }
        if allow_list.is_empty() {
            warn!("Admin allow-list is empty - admin access disabled");
        }
        Self {
            allow_list,
            identity,
            redirect_to: None,
        }
    }

    /// Where sign-in links should land after the email round-trip
    pub fn with_redirect(mut self, redirect_to: Option<String>) -> Self {
        self.redirect_to = redirect_to;
        self
    }

    pub fn allow_list(&self) -> &AdminAllowList {
        &self.allow_list
    }
}

#[async_trait]
impl AdminVerifier for AdminGate {
    async fn verify(&self, access_token: &str) -> AdminVerification {
        let Some(identity) = &self.identity else {
            return AdminVerification::denied();
        };
        if access_token.trim().is_empty() {
            return AdminVerification::denied();
        }

        let user = match identity.get_user(access_token).await {
            Ok(user) => user,
            Err(e) => {
                debug!("Admin verification failed: {}", e);
                return AdminVerification::denied();
            }
        };

        let Some(email) = user.verified_email() else {
            debug!("Account {} has no verified email", user.id);
            return AdminVerification::denied();
        };

        AdminVerification {
            is_admin: self.allow_list.contains(email),
            email: Some(email.to_string()),
        }
    }

    fn is_allowed_email(&self, email: &str) -> bool {
        self.allow_list.contains(email)
    }

    async fn send_login_link(&self, email: &str) -> AuthResult<()> {
        if !self.is_allowed_email(email) {
            return Err(AuthError::NotAllowed);
        }
        let identity = self.identity.as_ref().ok_or_else(|| {
            AuthError::Configuration("Identity provider not configured".to_string())
        })?;
        identity
            .send_magic_link(email.trim(), self.redirect_to.as_deref())
            .await
    }
}

/// Extract the token from an `Authorization: Bearer <token>` value
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
