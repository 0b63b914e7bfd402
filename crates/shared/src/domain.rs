use serde::{Deserialize, Deserializer, Serialize};

/// Profile, statistics, skills and projects served by `/api/portfolio`.
///
/// Every field may be missing or `null` on the wire. Accessors apply the
/// display defaults so callers never deal with raw `Option`s for counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_stars: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectSummary>>,
}

impl PortfolioDocument {
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn bio(&self) -> Option<&str> {
        present(&self.bio)
    }

    pub fn avatar_url(&self) -> Option<&str> {
        present(&self.avatar_url)
    }

    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn github_url(&self) -> Option<&str> {
        present(&self.github_url)
    }

    pub fn public_repos(&self) -> u64 {
        self.public_repos.unwrap_or(0)
    }

    pub fn total_stars(&self) -> u64 {
        self.total_stars.unwrap_or(0)
    }

    pub fn followers(&self) -> u64 {
        self.followers.unwrap_or(0)
    }

    pub fn skills(&self) -> Option<&[String]> {
        self.skills.as_deref()
    }

    /// Projects in server order; absent and empty both come back empty.
    pub fn projects(&self) -> &[ProjectSummary] {
        self.projects.as_deref().unwrap_or_default()
    }
}

/// One showcased repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

impl ProjectSummary {
    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn html_url(&self) -> Option<&str> {
        present(&self.html_url)
    }

    pub fn homepage(&self) -> Option<&str> {
        present(&self.homepage)
    }

    pub fn language(&self) -> Option<&str> {
        present(&self.language)
    }

    pub fn stars(&self) -> u64 {
        self.stars.unwrap_or(0)
    }

    pub fn forks(&self) -> u64 {
        self.forks.unwrap_or(0)
    }

    pub fn topics(&self) -> &[String] {
        self.topics.as_deref().unwrap_or_default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Empty strings are how the backend spells "unset" for several fields.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
