use artworks_states::{State, assign_impl};
use std::any::Any;
use ustr::Ustr;

/// Public catalog of the Art Institute of Chicago.
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu";

/// Records requested per page. The paginator and the `limit` query share it.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub api_base_url: String,
    pub page_size: u32,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Listing endpoint, e.g. `https://api.artic.edu/api/v1/artworks`.
    pub fn artworks_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        Ustr::from(&format!("{base}/api/v1/artworks"))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for CatalogConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
