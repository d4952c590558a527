use thiserror::Error;

/// Failures of a list or detail retrieval.
///
/// The explorer logs these and moves on; "not found" and "unreachable"
/// are indistinguishable to the user.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
