#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("State holder closed before the fetch completed")]
    HolderClosed,
}
