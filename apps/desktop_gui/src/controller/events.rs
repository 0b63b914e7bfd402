//! Events reported from the backend worker to the UI thread.

use client_core::FetchError;
use shared::domain::PortfolioDocument;

use crate::backend_bridge::avatar::AvatarImage;

#[derive(Debug)]
pub enum UiEvent {
    PortfolioLoaded(Result<PortfolioDocument, FetchError>),
    AvatarLoaded { url: String, image: AvatarImage },
    AvatarFailed { url: String, reason: String },
    /// The worker could not start; nothing will answer further commands.
    BackendFailed(String),
}
