//! Artwork records as returned by the catalog listing endpoint.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

/// One artwork, projected down to the fields the table displays.
///
/// The endpoint returns many more fields; they are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique within a page; selection is keyed by it.
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub place_of_origin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_display: String,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub current_page: u32,
}

/// Body of `GET /api/v1/artworks`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworksResponse {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

/// The displayed data columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtworkColumn {
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl ArtworkColumn {
    pub const ALL: [Self; 6] = [
        Self::Title,
        Self::PlaceOfOrigin,
        Self::ArtistDisplay,
        Self::Inscriptions,
        Self::DateStart,
        Self::DateEnd,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::PlaceOfOrigin => "Place of Origin",
            Self::ArtistDisplay => "Artist Display",
            Self::Inscriptions => "Inscriptions",
            Self::DateStart => "Date Start",
            Self::DateEnd => "Date End",
        }
    }

    /// Text shown in the cell; absent values render as an empty string.
    pub fn cell_text(self, artwork: &Artwork) -> Cow<'_, str> {
        match self {
            Self::Title => Cow::Borrowed(&artwork.title),
            Self::PlaceOfOrigin => Cow::Borrowed(&artwork.place_of_origin),
            Self::ArtistDisplay => Cow::Borrowed(&artwork.artist_display),
            Self::Inscriptions => Cow::Borrowed(artwork.inscriptions.as_deref().unwrap_or("")),
            Self::DateStart => year_text(artwork.date_start),
            Self::DateEnd => year_text(artwork.date_end),
        }
    }

    /// Default ascending order: case-insensitive lexical for text, numeric for
    /// dates. Absent values come first.
    pub fn compare(self, a: &Artwork, b: &Artwork) -> Ordering {
        match self {
            Self::Title => compare_text(&a.title, &b.title),
            Self::PlaceOfOrigin => compare_text(&a.place_of_origin, &b.place_of_origin),
            Self::ArtistDisplay => compare_text(&a.artist_display, &b.artist_display),
            Self::Inscriptions => match (&a.inscriptions, &b.inscriptions) {
                (Some(a), Some(b)) => compare_text(a, b),
                (a, b) => a.is_some().cmp(&b.is_some()),
            },
            Self::DateStart => a.date_start.cmp(&b.date_start),
            Self::DateEnd => a.date_end.cmp(&b.date_end),
        }
    }

    /// Date columns, rendered right-aligned.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::DateStart | Self::DateEnd)
    }
}

fn year_text(year: Option<i32>) -> Cow<'static, str> {
    year.map_or(Cow::Borrowed(""), |y| Cow::Owned(y.to_string()))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
