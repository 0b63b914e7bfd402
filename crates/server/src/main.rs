use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    routing::{any, get},
    Json, Router,
};
use shared::{
    domain::PortfolioDocument,
    error::ApiError,
    protocol::{health_route, portfolio_route},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod github;

use app_state::AppState;
use config::load_settings;
use github::{build_portfolio, GitHubClient, ProfileSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let github = GitHubClient::new(
        &settings.github_api_url,
        settings.github_timeout(),
        settings.repos_per_page,
    )?;
    let profile = ProfileSettings {
        username: settings.github_username.clone(),
        default_bio: settings.default_bio.clone(),
        title: settings.title.clone(),
        email: settings.email.clone(),
        skills: settings.skills.clone(),
    };

    let state = AppState {
        github: Arc::new(github),
        profile,
    };
    let app = build_router(Arc::new(state), &settings.static_dir);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, username = %settings.github_username, static_dir = %settings.static_dir.display(), "portfolio server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route(health_route(), get(healthz))
        .route(portfolio_route(), get(get_portfolio))
        .route("/api/*rest", any(api_not_found))
        .fallback_service(spa)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn get_portfolio(State(state): State<Arc<AppState>>) -> Json<PortfolioDocument> {
    Json(build_portfolio(state.github.as_ref(), &state.profile).await)
}

async fn api_not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::not_found(uri.path())),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
