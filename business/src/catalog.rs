//! Paged access to the artworks listing.

use crate::artwork::{Artwork, ArtworksResponse};
use crate::http::Client;
use crate::{CatalogConfig, CatalogError};

/// One page of the listing plus the total across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworksPage {
    pub records: Vec<Artwork>,
    pub total_records: u64,
}

/// Fetches the 1-based `page` with `limit = config.page_size`.
pub async fn fetch_artworks_page(
    config: &CatalogConfig,
    page: u32,
) -> Result<ArtworksPage, CatalogError> {
    let url = config.artworks_url();
    log::debug!("GET {url}?page={page}&limit={}", config.page_size);

    let response = Client::get(url.as_str())
        .query("page", page)
        .query("limit", config.page_size)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(CatalogError::Status(response.status));
    }

    let body: ArtworksResponse = response.json()?;
    Ok(ArtworksPage {
        records: body.data,
        total_records: body.pagination.total,
    })
}
