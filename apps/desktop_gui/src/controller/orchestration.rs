//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub const QUEUE_FULL_MESSAGE: &str = "UI command queue is full; please retry";
pub const WORKER_GONE_MESSAGE: &str =
    "Backend worker disconnected (possible startup/runtime failure); restart the app";

/// Queues `cmd` for the worker. The error is a user-facing explanation.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), &'static str> {
    let cmd_name = match &cmd {
        BackendCommand::LoadPortfolio => "load_portfolio",
        BackendCommand::FetchAvatar { .. } => "fetch_avatar",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend queue full");
            Err(QUEUE_FULL_MESSAGE)
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend worker disconnected");
            Err(WORKER_GONE_MESSAGE)
        }
    }
}
