//! Page-fetch state machine: page index input, cached page, and the fetch command.
//!
//! Each fetch goes `Idle → Loading → (Loaded | Failed)`. Only a new page request
//! moves the compute back to `Loading`.
//!
//! Register once during setup (see [`crate::build_state_ctx`]), then every frame:
//! 1. `ctx.sync_computes()`
//! 2. `run_page_fetch_effect(&mut ctx)` enqueues a fetch when the page index changed
//! 3. `ctx.flush_commands()`

use std::any::Any;

use artworks_states::{
    Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, State, StateCtx,
    assign_impl,
};
use log::{debug, error, info};
use tokio_util::sync::CancellationToken;

use crate::CatalogConfig;
use crate::artwork::Artwork;
use crate::catalog::{ArtworksPage, fetch_artworks_page};

/// The 1-based page index the table should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworksPageInput {
    pub page: u32,
}

impl Default for ArtworksPageInput {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl State for ArtworksPageInput {
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

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ArtworksPageStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading {
        page: u32,
    },
    Loaded {
        page: u32,
    },
    /// The fetch failed; records are those of the last successful load.
    Failed {
        page: u32,
        message: String,
    },
}

/// The currently loaded page. Only written by [`FetchArtworksPageCommand`].
#[derive(Debug, Clone, Default)]
pub struct ArtworksPageCompute {
    pub records: Vec<Artwork>,
    pub total_records: u64,
    pub status: ArtworksPageStatus,
    /// Bumped on every successful load.
    pub revision: u64,
}

impl ArtworksPageCompute {
    /// True until the first response arrives and while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.status,
            ArtworksPageStatus::Idle | ArtworksPageStatus::Loading { .. }
        )
    }

    pub fn loading(&self, page: u32) -> Self {
        Self {
            status: ArtworksPageStatus::Loading { page },
            ..self.clone()
        }
    }

    pub fn loaded(&self, page: u32, loaded: ArtworksPage) -> Self {
        Self {
            records: loaded.records,
            total_records: loaded.total_records,
            status: ArtworksPageStatus::Loaded { page },
            revision: self.revision + 1,
        }
    }

    pub fn failed(&self, page: u32, message: impl Into<String>) -> Self {
        Self {
            status: ArtworksPageStatus::Failed {
                page,
                message: message.into(),
            },
            ..self.clone()
        }
    }
}

impl Compute for ArtworksPageCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Fetches `ArtworksPageInput.page` and publishes the result to [`ArtworksPageCompute`].
///
/// A newer dispatch cancels this run; anything it publishes afterwards is dropped.
#[derive(Debug, Default)]
pub struct FetchArtworksPageCommand;

impl Command for FetchArtworksPageCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let page = snap.state::<ArtworksPageInput>().page;
        let config = snap.state::<CatalogConfig>().clone();
        let current = snap.compute::<ArtworksPageCompute>().clone();

        Box::pin(async move {
            info!("Fetching artworks page {page}");
            updater.set(current.loading(page));

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Fetch of artworks page {page} cancelled");
                    return;
                }
                result = fetch_artworks_page(&config, page) => result,
            };

            match result {
                Ok(loaded) => {
                    info!(
                        "Loaded {} artworks for page {page} of {} total",
                        loaded.records.len(),
                        loaded.total_records
                    );
                    updater.set(current.loaded(page, loaded));
                }
                Err(err) => {
                    error!("Error fetching data: {err}");
                    updater.set(current.failed(page, err.to_string()));
                }
            }
        })
    }
}

/// Remembers which page index the fetch effect last ran for.
#[derive(Debug, Clone, Default)]
pub struct PageFetchEffect {
    last_requested: Option<u32>,
}

impl State for PageFetchEffect {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Enqueues one fetch when the page index differs from the last one fetched.
///
/// The first call after setup always enqueues, which is the fetch on mount.
pub fn run_page_fetch_effect(ctx: &mut StateCtx) -> bool {
    let page = ctx.state::<ArtworksPageInput>().page;
    let effect = ctx.state_mut::<PageFetchEffect>();
    if effect.last_requested == Some(page) {
        return false;
    }
    effect.last_requested = Some(page);
    ctx.enqueue_command::<FetchArtworksPageCommand>();
    true
}

/// Moves to `page` (clamped to 1). The fetch happens on the next effect run.
pub fn set_page(ctx: &mut StateCtx, page: u32) {
    ctx.update::<ArtworksPageInput>(|input| input.page = page.max(1));
}
