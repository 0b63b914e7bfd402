//! Presentational mapping from a [`LoadState`] to display blocks.
//!
//! Everything here is a pure function of its input. Front ends paint a
//! [`Screen`]; they never read the document directly.

use shared::domain::{PortfolioDocument, ProjectSummary};

use crate::LoadState;

pub const DESCRIPTION_PLACEHOLDER: &str = "No description available";
pub const DEFAULT_PROFILE_NAME: &str = "Portfolio";
pub const LOADING_LABEL: &str = "Loading portfolio...";
pub const RETRY_LABEL: &str = "Retry";
pub const EMPTY_PROJECTS_TITLE: &str = "No Projects Yet";
pub const EMPTY_PROJECTS_DESCRIPTION: &str =
    "Projects will appear here once they're available from the API.";
pub const MAX_VISIBLE_TOPICS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading { label: &'static str },
    Error(ErrorScreen),
    Ready(Box<PortfolioView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorScreen {
    pub message: String,
    pub retry_label: &'static str,
}

impl ErrorScreen {
    pub fn headline(&self) -> String {
        format!("Error: {}", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioView {
    pub profile: ProfileBlock,
    pub contacts: Vec<ContactLink>,
    pub stats: [StatCard; 3],
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub projects: ProjectsSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileBlock {
    pub avatar_url: Option<String>,
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    GitHub,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Repositories,
    Stars,
    Followers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub kind: StatKind,
    pub label: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsSection {
    /// Shown next to the header whenever the document carried a project list.
    pub count: Option<usize>,
    pub body: ProjectsBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsBody {
    Empty {
        title: &'static str,
        description: &'static str,
    },
    Grid(Vec<ProjectCard>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLinkKind {
    Repository,
    Homepage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: ProjectLinkKind,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub links: Vec<ProjectLink>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub topics: Option<TopicsBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicsBlock {
    pub visible: Vec<String>,
    pub hidden: usize,
}

impl TopicsBlock {
    /// `+N more` when some topics did not fit.
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

pub fn render(state: &LoadState) -> Screen {
    match state {
        LoadState::Loading => Screen::Loading {
            label: LOADING_LABEL,
        },
        LoadState::Error(message) => Screen::Error(ErrorScreen {
            message: message.clone(),
            retry_label: RETRY_LABEL,
        }),
        LoadState::Ready(document) => Screen::Ready(Box::new(portfolio_view(document))),
    }
}

pub fn portfolio_view(document: &PortfolioDocument) -> PortfolioView {
    PortfolioView {
        profile: ProfileBlock {
            avatar_url: document.avatar_url().map(str::to_owned),
            name: document.name().unwrap_or(DEFAULT_PROFILE_NAME).to_owned(),
            title: document.title().map(str::to_owned),
            bio: document.bio().map(str::to_owned),
        },
        contacts: contact_links(document),
        stats: [
            StatCard {
                kind: StatKind::Repositories,
                label: "Repositories",
                value: document.public_repos(),
            },
            StatCard {
                kind: StatKind::Stars,
                label: "Stars",
                value: document.total_stars(),
            },
            StatCard {
                kind: StatKind::Followers,
                label: "Followers",
                value: document.followers(),
            },
        ],
        skills: document.skills().map(<[String]>::to_vec),
        location: document.location().map(str::to_owned),
        projects: projects_section(document),
    }
}

fn contact_links(document: &PortfolioDocument) -> Vec<ContactLink> {
    let mut links = Vec::with_capacity(2);
    if let Some(url) = document.github_url() {
        links.push(ContactLink {
            kind: ContactKind::GitHub,
            label: "GitHub Profile",
            href: url.to_owned(),
        });
    }
    if let Some(email) = document.email() {
        links.push(ContactLink {
            kind: ContactKind::Email,
            label: "Send Email",
            href: format!("mailto:{email}"),
        });
    }
    links
}

fn projects_section(document: &PortfolioDocument) -> ProjectsSection {
    let count = document.projects.as_ref().map(Vec::len);
    let projects = document.projects();
    let body = if projects.is_empty() {
        ProjectsBody::Empty {
            title: EMPTY_PROJECTS_TITLE,
            description: EMPTY_PROJECTS_DESCRIPTION,
        }
    } else {
        ProjectsBody::Grid(projects.iter().map(project_card).collect())
    };
    ProjectsSection { count, body }
}

pub fn project_card(project: &ProjectSummary) -> ProjectCard {
    let mut links = Vec::with_capacity(2);
    if let Some(href) = project.html_url() {
        links.push(ProjectLink {
            kind: ProjectLinkKind::Repository,
            href: href.to_owned(),
        });
    }
    if let Some(href) = project.homepage() {
        links.push(ProjectLink {
            kind: ProjectLinkKind::Homepage,
            href: href.to_owned(),
        });
    }

    ProjectCard {
        title: project.name.clone(),
        description: project
            .description()
            .unwrap_or(DESCRIPTION_PLACEHOLDER)
            .to_owned(),
        links,
        language: project.language().map(str::to_owned),
        stars: project.stars(),
        forks: project.forks(),
        topics: topics_block(project.topics()),
    }
}

pub fn topics_block(topics: &[String]) -> Option<TopicsBlock> {
    if topics.is_empty() {
        return None;
    }
    let visible = topics.iter().take(MAX_VISIBLE_TOPICS).cloned().collect();
    Some(TopicsBlock {
        visible,
        hidden: topics.len().saturating_sub(MAX_VISIBLE_TOPICS),
    })
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
