use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared::domain::{PortfolioDocument, ProjectSummary};
use thiserror::Error;
use tracing::warn;

const USER_AGENT: &str = concat!("portfolio-server/", env!("CARGO_PKG_VERSION"));

/// Subset of `GET /users/{username}` the portfolio needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubUser {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub followers: Option<u64>,
    pub public_repos: Option<u64>,
}

/// Subset of one entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubRepo {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("github request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Upstream profile data. `Ok(None)` means GitHub answered with a non-200 status.
#[async_trait]
pub trait GitHubSource: Send + Sync {
    async fn user(&self, username: &str) -> Result<Option<GitHubUser>, GitHubError>;
    async fn repos(&self, username: &str) -> Result<Option<Vec<GitHubRepo>>, GitHubError>;
}

pub struct GitHubClient {
    http: Client,
    api_url: String,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(api_url: &str, timeout: Duration, per_page: u32) -> Result<Self, GitHubError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            per_page,
        })
    }
}

#[async_trait]
impl GitHubSource for GitHubClient {
    async fn user(&self, username: &str) -> Result<Option<GitHubUser>, GitHubError> {
        let res = self
            .http
            .get(format!("{}/users/{username}", self.api_url))
            .send()
            .await?;
        if res.status() != StatusCode::OK {
            warn!(status = %res.status(), %username, "github user lookup did not succeed");
            return Ok(None);
        }
        Ok(Some(res.json().await?))
    }

    async fn repos(&self, username: &str) -> Result<Option<Vec<GitHubRepo>>, GitHubError> {
        let res = self
            .http
            .get(format!("{}/users/{username}/repos", self.api_url))
            .query(&[("sort", "updated".to_string()), ("per_page", self.per_page.to_string())])
            .send()
            .await?;
        if res.status() != StatusCode::OK {
            warn!(status = %res.status(), %username, "github repository listing did not succeed");
            return Ok(None);
        }
        Ok(Some(res.json().await?))
    }
}

/// Owner-provided fields merged into every served document.
#[derive(Debug, Clone, Default)]
pub struct ProfileSettings {
    pub username: String,
    pub default_bio: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub skills: Vec<String>,
}

impl ProfileSettings {
    fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }
}

/// Builds the served document. Upstream failures degrade to a fallback document.
pub async fn build_portfolio(
    source: &dyn GitHubSource,
    profile: &ProfileSettings,
) -> PortfolioDocument {
    let mut document = match github_document(source, profile).await {
        Ok(document) => document,
        Err(error) => {
            warn!(%error, username = %profile.username, "fetching GitHub data failed; serving fallback portfolio");
            fallback_document(profile)
        }
    };

    document.title = profile.title.clone();
    document.email = profile.email.clone();
    document.skills = Some(profile.skills.clone());
    document
}

async fn github_document(
    source: &dyn GitHubSource,
    profile: &ProfileSettings,
) -> Result<PortfolioDocument, GitHubError> {
    let (user, repos) = tokio::join!(
        source.user(&profile.username),
        source.repos(&profile.username)
    );
    let user = user?.unwrap_or_default();
    let repos = repos?.unwrap_or_default();

    let projects: Vec<ProjectSummary> = repos
        .into_iter()
        .filter(|repo| !repo.fork)
        .map(project_summary)
        .collect();
    let total_stars: u64 = projects.iter().map(ProjectSummary::stars).sum();

    Ok(PortfolioDocument {
        name: Some(user.name.unwrap_or_else(|| profile.username.clone())),
        bio: Some(user.bio.unwrap_or_else(|| profile.default_bio.clone())),
        location: user.location,
        avatar_url: user.avatar_url,
        github_url: Some(user.html_url.unwrap_or_else(|| profile.profile_url())),
        followers: Some(user.followers.unwrap_or(0)),
        public_repos: Some(user.public_repos.unwrap_or(0)),
        total_stars: Some(total_stars),
        projects: Some(projects),
        ..PortfolioDocument::default()
    })
}

fn project_summary(repo: GitHubRepo) -> ProjectSummary {
    ProjectSummary {
        name: repo.name,
        description: repo.description,
        html_url: repo.html_url,
        homepage: repo.homepage,
        language: repo.language,
        stars: Some(repo.stargazers_count),
        forks: Some(repo.forks_count),
        topics: Some(repo.topics),
    }
}

fn fallback_document(profile: &ProfileSettings) -> PortfolioDocument {
    PortfolioDocument {
        name: Some(profile.username.clone()),
        github_url: Some(profile.profile_url()),
        followers: Some(0),
        public_repos: Some(0),
        total_stars: Some(0),
        projects: Some(Vec::new()),
        ..PortfolioDocument::default()
    }
}

#[cfg(test)]
#[path = "tests/github_tests.rs"]
mod tests;
