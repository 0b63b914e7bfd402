mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{resolve_api_url, PortfolioClient};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::protocol::API_URL_ENV;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::PortfolioApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop portfolio viewer")]
struct Args {
    /// Portfolio endpoint. Falls back to PORTFOLIO_API_URL, then the local default.
    #[arg(long)]
    api_url: Option<Url>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();
    let api_url = resolve_api_url(args.api_url, std::env::var(API_URL_ENV).ok())?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, PortfolioClient::new(api_url));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio")
            .with_inner_size([1200.0, 780.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Portfolio",
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::bootstrap(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
