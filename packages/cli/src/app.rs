// ABOUTME: Wires configuration into the pipeline, admin gate, storage and router
// ABOUTME: Shared by the `serve`, `projects` and `check-admin` commands

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use folio_ai::{AIService, AIServiceConfig};
use folio_api::{create_router, AppState};
use folio_auth::{AdminAllowList, AdminGate, IdentityClient, IdentityConfig};
use folio_github::{GitHubClient, GitHubConfig};
use folio_projects::{PortfolioPipeline, SummaryCache};

use crate::config::Config;

pub fn build_pipeline(config: &Config, cache: SummaryCache) -> Result<PortfolioPipeline> {
    let github = GitHubClient::new(
        GitHubConfig::new(&config.github_api_url, config.require_github_token()?)
            .with_timeout(config.http_timeout),
    )
    .context("Failed to create GitHub client")?;

    let mut ai_config = AIServiceConfig {
        api_key: config.openai_api_key.clone(),
        base_url: config.openai_base_url.clone(),
        timeout: config.http_timeout,
        ..AIServiceConfig::default()
    };
    if let Some(model) = &config.openai_model {
        ai_config.model = model.clone();
    }
    let generator = AIService::new(ai_config).context("Failed to create AI service")?;

    Ok(
        PortfolioPipeline::new(Arc::new(github), Arc::new(generator), cache)
            .with_marker(&config.portfolio_marker),
    )
}

/// Admin gate; admin features stay disabled without identity-provider settings
pub fn build_admin_gate(config: &Config) -> Result<AdminGate> {
    let identity = match (&config.supabase_url, &config.supabase_anon_key) {
        (Some(url), Some(anon_key)) => Some(
            IdentityClient::new(IdentityConfig {
                url: url.clone(),
                anon_key: anon_key.clone(),
                timeout: config.http_timeout,
            })
            .context("Failed to create identity client")?,
        ),
        _ => None,
    };

    let allow_list = AdminAllowList::from_env_value(&config.admin_emails);
    Ok(AdminGate::new(allow_list, identity).with_redirect(config.site_url.clone()))
}

pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

pub async fn build_app(config: &Config) -> Result<Router> {
    let pipeline = build_pipeline(config, SummaryCache::new())?;
    let admin = build_admin_gate(config)?;
    let pool = folio_storage::connect(&config.database_url)
        .await
        .context("Failed to open database")?;

    let state = AppState::new(pipeline, pool, Arc::new(admin));
    Ok(create_router(state).layer(cors_layer(config)?))
}

pub async fn serve(config: Config) -> Result<()> {
    let app = build_app(&config).await?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("Folio API listening on http://{}", addr);
    info!("CORS origin: {}", config.cors_origin);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
