use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use client_core::{resolve_api_url, PortfolioClient, PortfolioController};
use shared::protocol::API_URL_ENV;
use tracing_subscriber::EnvFilter;
use url::Url;

mod render;

#[derive(Parser, Debug)]
#[command(about = "Fetch a portfolio document and print it")]
struct Args {
    /// Portfolio endpoint. Falls back to PORTFOLIO_API_URL, then the local default.
    #[arg(long)]
    api_url: Option<Url>,
    /// Print the fetched document as JSON instead of the rendered view.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let api_url = resolve_api_url(args.api_url, std::env::var(API_URL_ENV).ok())?;
    tracing::debug!(%api_url, "loading portfolio");
    let mut controller = PortfolioController::new(PortfolioClient::new(api_url));
    controller.load_portfolio().await;

    match (args.json, controller.state().document()) {
        (true, Some(document)) => println!("{}", serde_json::to_string_pretty(document)?),
        _ => print!("{}", render::render_screen(&controller.screen())),
    }

    if controller.state().can_retry() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
