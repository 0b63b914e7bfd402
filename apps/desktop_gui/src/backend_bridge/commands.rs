//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Fetch the portfolio document once.
    LoadPortfolio,
    FetchAvatar {
        url: String,
    },
}
