use std::sync::Arc;

use crate::github::{GitHubSource, ProfileSettings};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) github: Arc<dyn GitHubSource>,
    pub(crate) profile: ProfileSettings,
}
