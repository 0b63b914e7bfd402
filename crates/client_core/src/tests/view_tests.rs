use super::*;

fn project(name: &str) -> ProjectSummary {
    ProjectSummary {
        name: name.to_string(),
        ..ProjectSummary::default()
    }
}

fn topics(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("t{i}")).collect()
}

fn ready_view(document: PortfolioDocument) -> PortfolioView {
    match render(&LoadState::Ready(document)) {
        Screen::Ready(view) => *view,
        other => panic!("expected ready screen, got {other:?}"),
    }
}

#[test]
fn loading_renders_indicator_only() {
    assert_eq!(
        render(&LoadState::Loading),
        Screen::Loading {
            label: LOADING_LABEL
        }
    );
}

#[test]
fn error_renders_message_and_retry() {
    let Screen::Error(screen) = render(&LoadState::Error("API Error: 502".into())) else {
        panic!("expected error screen");
    };
    assert_eq!(screen.headline(), "Error: API Error: 502");
    assert_eq!(screen.retry_label, RETRY_LABEL);
}

#[test]
fn absent_projects_render_empty_state_without_count() {
    let view = ready_view(PortfolioDocument::default());
    assert_eq!(view.projects.count, None);
    assert_eq!(
        view.projects.body,
        ProjectsBody::Empty {
            title: EMPTY_PROJECTS_TITLE,
            description: EMPTY_PROJECTS_DESCRIPTION,
        }
    );
}

#[test]
fn empty_projects_render_empty_state_with_zero_count() {
    let view = ready_view(PortfolioDocument {
        projects: Some(Vec::new()),
        ..PortfolioDocument::default()
    });
    assert_eq!(view.projects.count, Some(0));
    assert!(matches!(view.projects.body, ProjectsBody::Empty { .. }));
}

#[test]
fn project_cards_follow_input_order() {
    let view = ready_view(PortfolioDocument {
        projects: Some(vec![project("zeta"), project("alpha"), project("mid")]),
        ..PortfolioDocument::default()
    });

    let ProjectsBody::Grid(cards) = view.projects.body else {
        panic!("expected project grid");
    };
    let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["zeta", "alpha", "mid"]);
    assert_eq!(view.projects.count, Some(3));
}

#[test]
fn counters_default_to_zero() {
    let view = ready_view(PortfolioDocument::default());
    let values: Vec<_> = view.stats.iter().map(|s| (s.label, s.value)).collect();
    assert_eq!(
        values,
        [("Repositories", 0), ("Stars", 0), ("Followers", 0)]
    );

    let card = project_card(&project("bare"));
    assert_eq!((card.stars, card.forks), (0, 0));
}

#[test]
fn missing_description_uses_placeholder() {
    let card = project_card(&project("bare"));
    assert_eq!(card.description, "No description available");

    let described = project_card(&ProjectSummary {
        description: Some("A tool".into()),
        ..project("tool")
    });
    assert_eq!(described.description, "A tool");
}

#[test]
fn topics_up_to_four_show_without_overflow() {
    for n in 1..=4 {
        let block = topics_block(&topics(n)).expect("topics block");
        assert_eq!(block.visible, topics(n));
        assert_eq!(block.overflow_label(), None);
    }
}

#[test]
fn topics_past_four_are_capped_with_overflow_label() {
    let block = topics_block(&topics(7)).expect("topics block");
    assert_eq!(block.visible, ["t1", "t2", "t3", "t4"]);
    assert_eq!(block.overflow_label().as_deref(), Some("+3 more"));
}

#[test]
fn empty_or_absent_topics_omit_block() {
    assert_eq!(topics_block(&[]), None);
    assert_eq!(project_card(&project("bare")).topics, None);
}

#[test]
fn links_render_only_when_present() {
    let card = project_card(&ProjectSummary {
        html_url: Some("https://github.com/u/repo".into()),
        homepage: Some(String::new()),
        language: Some("Rust".into()),
        ..project("repo")
    });
    assert_eq!(
        card.links,
        [ProjectLink {
            kind: ProjectLinkKind::Repository,
            href: "https://github.com/u/repo".into(),
        }]
    );
    assert_eq!(card.language.as_deref(), Some("Rust"));
}

#[test]
fn contacts_include_github_and_mailto() {
    let view = ready_view(PortfolioDocument {
        github_url: Some("https://github.com/u".into()),
        email: Some("u@example.com".into()),
        ..PortfolioDocument::default()
    });
    let hrefs: Vec<_> = view.contacts.iter().map(|c| (c.kind, c.href.as_str())).collect();
    assert_eq!(
        hrefs,
        [
            (ContactKind::GitHub, "https://github.com/u"),
            (ContactKind::Email, "mailto:u@example.com"),
        ]
    );

    assert!(ready_view(PortfolioDocument::default()).contacts.is_empty());
}

#[test]
fn skills_keep_order_and_absence_omits_section() {
    let view = ready_view(PortfolioDocument {
        skills: Some(vec!["Rust".into(), "C".into(), "Python".into()]),
        ..PortfolioDocument::default()
    });
    assert_eq!(
        view.skills.as_deref(),
        Some(&["Rust".to_string(), "C".to_string(), "Python".to_string()][..])
    );
    assert_eq!(ready_view(PortfolioDocument::default()).skills, None);
}

#[test]
fn missing_name_falls_back_to_default() {
    let view = ready_view(PortfolioDocument::default());
    assert_eq!(view.profile.name, DEFAULT_PROFILE_NAME);
    assert_eq!(view.profile.avatar_url, None);
}
