/// Address the view fetches from when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api/portfolio";

pub const DEFAULT_SERVER_BIND: &str = "127.0.0.1:5000";

pub fn portfolio_route() -> &'static str {
    "/api/portfolio"
}

pub fn health_route() -> &'static str {
    "/healthz"
}

/// Environment variable front ends read when no endpoint is passed explicitly.
pub const API_URL_ENV: &str = "PORTFOLIO_API_URL";
