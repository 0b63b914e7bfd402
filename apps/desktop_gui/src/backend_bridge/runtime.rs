//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{PortfolioClient, PortfolioSource};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::avatar::decode_avatar;
use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, client: PortfolioClient) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(run_commands(cmd_rx, ui_tx, client));
        tracing::debug!("backend worker stopped");
    });
}

/// Executes commands in arrival order until the UI side hangs up.
async fn run_commands(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    client: PortfolioClient,
) {
    tracing::info!(api_url = %client.api_url(), "backend worker ready");
    while let Ok(cmd) = cmd_rx.recv() {
        let event = match cmd {
            BackendCommand::LoadPortfolio => {
                UiEvent::PortfolioLoaded(client.fetch_portfolio().await)
            }
            BackendCommand::FetchAvatar { url } => {
                match client.fetch_avatar(&url).await {
                    Ok(bytes) => match decode_avatar(&bytes) {
                        Ok(image) => UiEvent::AvatarLoaded { url, image },
                        Err(reason) => UiEvent::AvatarFailed { url, reason },
                    },
                    Err(err) => UiEvent::AvatarFailed {
                        url,
                        reason: err.to_string(),
                    },
                }
            }
        };
        if ui_tx.send(event).is_err() {
            break;
        }
    }
}
