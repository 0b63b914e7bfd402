use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use shared::{
    domain::PortfolioDocument,
    error::ApiError,
    protocol::{API_URL_ENV, DEFAULT_API_URL},
};
use thiserror::Error;
use tracing::{debug, error, info};
use url::Url;

pub mod view;

pub use view::{render, Screen};

/// Fixed diagnostic shown when the endpoint answers 2xx with something other than JSON.
pub const NOT_JSON_MESSAGE: &str =
    "API returned HTML instead of JSON - check if Flask is running on port 5000";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Every way a document fetch can fail. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("API Error: {0}")]
    Status(u16),
    #[error("{}", NOT_JSON_MESSAGE)]
    NotJson,
    #[error("{0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn fetch_portfolio(&self) -> Result<PortfolioDocument, FetchError>;
}

/// Picks the endpoint: explicit argument, then the environment override, then the default.
pub fn resolve_api_url(explicit: Option<Url>, from_env: Option<String>) -> Result<Url> {
    if let Some(url) = explicit {
        return Ok(url);
    }
    match from_env.filter(|v| !v.trim().is_empty()) {
        Some(raw) => Url::parse(raw.trim())
            .with_context(|| format!("{API_URL_ENV} is not a valid URL: '{raw}'")),
        None => Ok(Url::parse(DEFAULT_API_URL)?),
    }
}

/// HTTP access to the portfolio endpoint.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    http: Client,
    api_url: Url,
}

impl PortfolioClient {
    pub fn new(api_url: Url) -> Self {
        Self {
            http: Client::new(),
            api_url,
        }
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Downloads the raw bytes behind an avatar reference.
    pub async fn fetch_avatar(&self, avatar_url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .http
            .get(avatar_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl PortfolioSource for PortfolioClient {
    async fn fetch_portfolio(&self) -> Result<PortfolioDocument, FetchError> {
        let response = self.http.get(self.api_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            if let Ok(body) = response.json::<ApiError>().await {
                debug!(%body, "portfolio endpoint reported an error body");
            }
            return Err(FetchError::Status(status.as_u16()));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains(JSON_CONTENT_TYPE));
        if !is_json {
            return Err(FetchError::NotJson);
        }

        // A literal `null` body carries no fields, so it renders as the defaults.
        let body = response.bytes().await?;
        let document: Option<PortfolioDocument> = serde_json::from_slice(&body)?;
        Ok(document.unwrap_or_default())
    }
}

/// Lifecycle of one portfolio view. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Error(String),
    Ready(PortfolioDocument),
}

impl LoadState {
    /// Enters `Loading`, dropping whatever document or error was held.
    pub fn begin_load(&mut self) {
        *self = Self::Loading;
    }

    pub fn finish(&mut self, outcome: Result<PortfolioDocument, FetchError>) {
        *self = match outcome {
            Ok(document) => {
                info!(
                    projects = document.projects().len(),
                    "portfolio loaded"
                );
                Self::Ready(document)
            }
            Err(err) => {
                error!(error = %err, "portfolio fetch error");
                Self::Error(err.to_string())
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Retry is only offered from the error screen.
    pub fn can_retry(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn document(&self) -> Option<&PortfolioDocument> {
        match self {
            Self::Ready(document) => Some(document),
            _ => None,
        }
    }
}

/// Drives a [`LoadState`] from a [`PortfolioSource`].
///
/// `load_portfolio` borrows the controller mutably for the whole request, so a
/// second load cannot start while one is outstanding.
pub struct PortfolioController<S: PortfolioSource> {
    source: S,
    state: LoadState,
}

impl<S: PortfolioSource> PortfolioController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: LoadState::default(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        render(&self.state)
    }

    /// The single load procedure behind both the initial load and retry.
    pub async fn load_portfolio(&mut self) -> &LoadState {
        self.state.begin_load();
        let outcome = self.source.fetch_portfolio().await;
        self.state.finish(outcome);
        &self.state
    }

    pub async fn retry(&mut self) -> &LoadState {
        if !self.state.can_retry() {
            debug!("retry ignored outside of the error state");
            return &self.state;
        }
        self.load_portfolio().await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
