use super::*;
use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode as HttpStatus},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use tokio::net::TcpListener;

struct StubGitHub {
    user: Option<GitHubUser>,
    repos: Option<Vec<GitHubRepo>>,
    fail: bool,
}

#[async_trait]
impl GitHubSource for StubGitHub {
    async fn user(&self, _username: &str) -> Result<Option<GitHubUser>, GitHubError> {
        if self.fail {
            return Err(transport_error().await);
        }
        Ok(self.user.clone())
    }

    async fn repos(&self, _username: &str) -> Result<Option<Vec<GitHubRepo>>, GitHubError> {
        Ok(self.repos.clone())
    }
}

async fn transport_error() -> GitHubError {
    let err = Client::new()
        .get("not a url")
        .send()
        .await
        .expect_err("invalid url must fail");
    GitHubError::from(err)
}

fn profile() -> ProfileSettings {
    ProfileSettings {
        username: "ferris".into(),
        default_bio: "Default bio".into(),
        title: Some("Engineer".into()),
        email: Some("ferris@example.com".into()),
        skills: vec!["Rust".into(), "SQL".into()],
    }
}

fn repo(name: &str, stars: u64, fork: bool) -> GitHubRepo {
    GitHubRepo {
        name: name.into(),
        stargazers_count: stars,
        forks_count: 1,
        fork,
        ..GitHubRepo::default()
    }
}

#[tokio::test]
async fn forks_are_skipped_and_stars_summed() {
    let source = StubGitHub {
        user: Some(GitHubUser {
            name: Some("Ferris Crab".into()),
            public_repos: Some(9),
            followers: Some(4),
            ..GitHubUser::default()
        }),
        repos: Some(vec![
            repo("own-a", 5, false),
            repo("forked", 100, true),
            repo("own-b", 2, false),
        ]),
        fail: false,
    };

    let doc = build_portfolio(&source, &profile()).await;

    let names: Vec<_> = doc.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["own-a", "own-b"]);
    assert_eq!(doc.total_stars(), 7);
    assert_eq!(doc.public_repos(), 9);
    assert_eq!(doc.followers(), 4);
    assert_eq!(doc.name(), Some("Ferris Crab"));
    assert_eq!(doc.projects()[0].forks(), 1);
}

#[tokio::test]
async fn missing_user_fields_use_profile_defaults() {
    let source = StubGitHub {
        user: None,
        repos: None,
        fail: false,
    };

    let doc = build_portfolio(&source, &profile()).await;

    assert_eq!(doc.name(), Some("ferris"));
    assert_eq!(doc.bio(), Some("Default bio"));
    assert_eq!(doc.github_url(), Some("https://github.com/ferris"));
    assert_eq!(doc.projects.as_ref().map(Vec::len), Some(0));
}

#[tokio::test]
async fn transport_failure_serves_fallback_with_owner_fields() {
    let source = StubGitHub {
        user: None,
        repos: None,
        fail: true,
    };

    let doc = build_portfolio(&source, &profile()).await;

    assert_eq!(doc.name(), Some("ferris"));
    assert_eq!(doc.bio(), None);
    assert_eq!(doc.total_stars(), 0);
    assert!(doc.projects().is_empty());
    assert_eq!(doc.title(), Some("Engineer"));
    assert_eq!(doc.email(), Some("ferris@example.com"));
    assert_eq!(doc.skills(), Some(&["Rust".to_string(), "SQL".to_string()][..]));
}

async fn fake_user(Path(username): Path<String>, headers: HeaderMap) -> impl IntoResponse {
    if !headers.contains_key("user-agent") || username != "ferris" {
        return HttpStatus::FORBIDDEN.into_response();
    }
    Json(serde_json::json!({
        "login": "ferris",
        "name": null,
        "bio": "Crab",
        "followers": 12,
        "public_repos": 3,
        "html_url": "https://github.com/ferris"
    }))
    .into_response()
}

async fn fake_repos(Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
    let per_page = query.get("per_page").cloned().unwrap_or_default();
    Json(serde_json::json!([
        {
            "name": format!("per-page-{per_page}"),
            "description": null,
            "language": "Rust",
            "stargazers_count": 3,
            "forks_count": 0,
            "fork": false,
            "topics": ["cli"],
            "sort": query.get("sort")
        }
    ]))
}

#[tokio::test]
async fn client_reads_user_and_repos_from_api() {
    let router = Router::new()
        .route("/users/:username", get(fake_user))
        .route("/users/:username/repos", get(fake_repos));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    let client = GitHubClient::new(&format!("http://{addr}/"), Duration::from_secs(5), 6)
        .expect("client");
    let doc = build_portfolio(&client, &profile()).await;

    assert_eq!(doc.name(), Some("ferris"));
    assert_eq!(doc.bio(), Some("Crab"));
    assert_eq!(doc.followers(), 12);
    assert_eq!(doc.projects()[0].name, "per-page-6");
    assert_eq!(doc.projects()[0].language(), Some("Rust"));
    assert_eq!(doc.projects()[0].description(), None);
    assert_eq!(doc.projects()[0].topics(), ["cli"]);
}

#[tokio::test]
async fn non_success_status_is_treated_as_absent() {
    let router = Router::new();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    let client =
        GitHubClient::new(&format!("http://{addr}"), Duration::from_secs(5), 12).expect("client");
    assert!(client.user("ferris").await.expect("user").is_none());
    assert!(client.repos("ferris").await.expect("repos").is_none());
}
