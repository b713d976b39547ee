use thiserror::Error;

use crate::http::HttpError;

/// Why a page of artworks could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("catalog responded with status {0}")]
    Status(u16),

    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}
