//! Domain logic of the artworks table: records, the catalog client, the
//! page-fetch state machine and the table's client-side view state.

pub mod artwork;
pub mod catalog;
pub mod http;
pub mod paginator;

mod artworks_page;
mod config;
mod context;
mod error;
mod table_state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use artwork::{Artwork, ArtworkColumn, ArtworksResponse, Pagination};
pub use artworks_page::{
    ArtworksPageCompute, ArtworksPageInput, ArtworksPageStatus, FetchArtworksPageCommand,
    PageFetchEffect, run_page_fetch_effect, set_page,
};
pub use catalog::{ArtworksPage, fetch_artworks_page};
pub use config::{CatalogConfig, DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE};
pub use context::build_state_ctx;
pub use error::CatalogError;
pub use paginator::Paginator;
pub use table_state::{ArtworksTableState, SortDirection, SortOrder};
