use std::{fs, path::PathBuf, time::Duration};

use serde::Deserialize;
use shared::protocol::DEFAULT_SERVER_BIND;
use tracing::warn;

const DEFAULT_CONFIG_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub github_username: String,
    pub github_api_url: String,
    pub github_timeout_seconds: u64,
    pub repos_per_page: u32,
    pub title: Option<String>,
    pub email: Option<String>,
    pub default_bio: String,
    pub skills: Vec<String>,
    pub static_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: DEFAULT_SERVER_BIND.into(),
            github_username: "octocat".into(),
            github_api_url: "https://api.github.com".into(),
            github_timeout_seconds: 10,
            repos_per_page: 12,
            title: None,
            email: None,
            default_bio: "Developer passionate about creating amazing applications".into(),
            skills: Vec::new(),
            static_dir: PathBuf::from("build"),
        }
    }
}

impl Settings {
    pub fn github_timeout(&self) -> Duration {
        Duration::from_secs(self.github_timeout_seconds)
    }
}

/// Keys accepted in `server.toml`. Everything is optional.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    github_username: Option<String>,
    github_api_url: Option<String>,
    github_timeout_seconds: Option<u64>,
    repos_per_page: Option<u32>,
    title: Option<String>,
    email: Option<String>,
    default_bio: Option<String>,
    skills: Option<Vec<String>>,
    static_dir: Option<PathBuf>,
}

pub fn load_settings() -> Settings {
    let env = |name: &str| std::env::var(name).ok();
    let path = env("APP__CONFIG_FILE").unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

    let mut settings = Settings::default();
    if let Ok(raw) = fs::read_to_string(&path) {
        apply_file(&mut settings, &raw, &path);
    }
    apply_env(&mut settings, env);
    settings
}

fn apply_file(settings: &mut Settings, raw: &str, path: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(error) => {
            warn!(%path, %error, "ignoring unreadable config file");
            return;
        }
    };

    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.github_username {
        settings.github_username = v;
    }
    if let Some(v) = file_cfg.github_api_url {
        settings.github_api_url = v;
    }
    if let Some(v) = file_cfg.github_timeout_seconds {
        settings.github_timeout_seconds = v;
    }
    if let Some(v) = file_cfg.repos_per_page {
        settings.repos_per_page = v;
    }
    if file_cfg.title.is_some() {
        settings.title = file_cfg.title;
    }
    if file_cfg.email.is_some() {
        settings.email = file_cfg.email;
    }
    if let Some(v) = file_cfg.default_bio {
        settings.default_bio = v;
    }
    if let Some(v) = file_cfg.skills {
        settings.skills = v;
    }
    if let Some(v) = file_cfg.static_dir {
        settings.static_dir = v;
    }
}

fn apply_env(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("GITHUB_USERNAME") {
        settings.github_username = v;
    }
    if let Some(v) = env("APP__GITHUB_USERNAME") {
        settings.github_username = v;
    }

    if let Some(v) = env("APP__GITHUB_API_URL") {
        settings.github_api_url = v;
    }

    if let Some(v) = env("APP__GITHUB_TIMEOUT_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.github_timeout_seconds = parsed;
        }
    }
    if let Some(v) = env("APP__REPOS_PER_PAGE") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.repos_per_page = parsed;
        }
    }

    if let Some(v) = env("APP__TITLE") {
        settings.title = Some(v);
    }
    if let Some(v) = env("APP__EMAIL") {
        settings.email = Some(v);
    }
    if let Some(v) = env("APP__DEFAULT_BIO") {
        settings.default_bio = v;
    }

    // Comma separated, e.g. `APP__SKILLS="Rust, SQL, React"`.
    if let Some(v) = env("APP__SKILLS") {
        settings.skills = v
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_owned)
            .collect();
    }

    if let Some(v) = env("APP__STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
