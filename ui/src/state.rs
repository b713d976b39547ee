use artworks_business::{CatalogConfig, build_state_ctx};
use artworks_states::StateCtx;

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self {
            ctx: build_state_ctx(CatalogConfig::default()),
        }
    }
}

impl State {
    /// State pointed at a mock catalog.
    pub fn test(base_url: String) -> Self {
        Self {
            ctx: build_state_ctx(CatalogConfig::new(base_url)),
        }
    }
}
