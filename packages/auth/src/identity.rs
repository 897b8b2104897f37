// ABOUTME: Client for the hosted identity provider's auth REST surface
// ABOUTME: Resolves access tokens to accounts and sends email one-time sign-in links

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::{AuthError, AuthResult};

/// Connection settings for the identity provider
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public anon key sent as the `apikey` header
    pub anon_key: String,
    pub timeout: Option<Duration>,
}

/// Account as returned by `GET /auth/v1/user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
}

impl IdentityUser {
    /// Email of the account, only if the provider has confirmed it
    pub fn verified_email(&self) -> Option<&str> {
        match (&self.email, &self.email_confirmed_at) {
            (Some(email), Some(_)) if !email.trim().is_empty() => Some(email.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct OtpRequest<'a> {
    email: &'a str,
    create_user: bool,
}

pub struct IdentityClient {
    client: Client,
    url: String,
    anon_key: String,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> AuthResult<Self> {
        if config.url.trim().is_empty() {
            return Err(AuthError::Configuration(
                "Identity provider URL is empty".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key,
        })
    }

    /// Resolve an access token to the account it belongs to
    pub async fn get_user(&self, access_token: &str) -> AuthResult<IdentityUser> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let user: IdentityUser = response.json().await?;
                debug!("Resolved identity {}", user.id);
                Ok(user)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::InvalidToken),
            status => {
                let body = response.text().await.unwrap_or_default();
                error!("Identity provider error: {} - {}", status, body);
                Err(AuthError::Provider(format!("{}: {}", status, body)))
            }
        }
    }

    /// Email a one-time sign-in link that redirects to `redirect_to`
    pub async fn send_magic_link(&self, email: &str, redirect_to: Option<&str>) -> AuthResult<()> {
        let mut request = self
            .client
            .post(format!("{}/auth/v1/otp", self.url))
            .header("apikey", &self.anon_key)
            .json(&OtpRequest {
                email,
                create_user: true,
            });
        if let Some(redirect_to) = redirect_to {
            request = request.query(&[("redirect_to", redirect_to)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Failed to send sign-in link: {} - {}", status, body);
            return Err(AuthError::Provider(format!("{}: {}", status, body)));
        }

        info!("Sent sign-in link");
        Ok(())
    }
}
