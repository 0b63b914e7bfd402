//! Plain-text painter for a [`Screen`].

use std::fmt::Write;

use client_core::view::{
    ContactLink, PortfolioView, ProjectCard, ProjectLinkKind, ProjectsBody, Screen,
};

const RULE: &str = "----------------------------------------";

pub fn render_screen(screen: &Screen) -> String {
    let mut out = String::new();
    match screen {
        Screen::Loading { label } => {
            let _ = writeln!(out, "{label}");
        }
        Screen::Error(error) => {
            let _ = writeln!(out, "{}", error.headline());
            let _ = writeln!(out, "[{}] run the command again", error.retry_label);
        }
        Screen::Ready(view) => write_portfolio(&mut out, view),
    }
    out
}

fn write_portfolio(out: &mut String, view: &PortfolioView) {
    let profile = &view.profile;
    let _ = writeln!(out, "{}", profile.name);
    if let Some(title) = &profile.title {
        let _ = writeln!(out, "{title}");
    }
    if let Some(bio) = &profile.bio {
        let _ = writeln!(out, "{bio}");
    }
    if let Some(avatar) = &profile.avatar_url {
        let _ = writeln!(out, "Avatar: {avatar}");
    }

    if !view.contacts.is_empty() {
        out.push('\n');
        for ContactLink { label, href, .. } in &view.contacts {
            let _ = writeln!(out, "{label}: {href}");
        }
    }

    out.push('\n');
    for stat in &view.stats {
        let _ = writeln!(out, "{:<14}{}", stat.label, stat.value);
    }

    if let Some(skills) = &view.skills {
        let _ = writeln!(out, "\nSkills: {}", skills.join(", "));
    }

    out.push('\n');
    match view.projects.count {
        Some(count) => {
            let _ = writeln!(out, "Projects ({count})");
        }
        None => {
            let _ = writeln!(out, "Projects");
        }
    }
    let _ = writeln!(out, "{RULE}");
    match &view.projects.body {
        ProjectsBody::Empty { title, description } => {
            let _ = writeln!(out, "{title}");
            let _ = writeln!(out, "{description}");
        }
        ProjectsBody::Grid(cards) => {
            for (index, card) in cards.iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                }
                write_card(out, card);
            }
        }
    }
    let _ = writeln!(out, "{RULE}");

    if let Some(location) = &view.location {
        let _ = writeln!(out, "Location: {location}");
    }
    let _ = writeln!(out, "Built with Rust");
}

fn write_card(out: &mut String, card: &ProjectCard) {
    let _ = writeln!(out, "{}", card.title);
    let _ = writeln!(out, "  {}", card.description);

    for link in &card.links {
        let label = match link.kind {
            ProjectLinkKind::Repository => "source",
            ProjectLinkKind::Homepage => "homepage",
        };
        let _ = writeln!(out, "  {label}: {}", link.href);
    }

    let mut stats = Vec::with_capacity(3);
    if let Some(language) = &card.language {
        stats.push(language.clone());
    }
    stats.push(format!("stars {}", card.stars));
    stats.push(format!("forks {}", card.forks));
    let _ = writeln!(out, "  {}", stats.join(" | "));

    if let Some(topics) = &card.topics {
        let mut tags: Vec<String> = topics.visible.iter().map(|t| format!("#{t}")).collect();
        tags.extend(topics.overflow_label());
        let _ = writeln!(out, "  {}", tags.join(" "));
    }
}
