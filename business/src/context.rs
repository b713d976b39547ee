use artworks_states::StateCtx;

use crate::{
    ArtworksPageCompute, ArtworksPageInput, ArtworksTableState, CatalogConfig,
    FetchArtworksPageCommand, PageFetchEffect,
};

/// Registers every state, compute and command of the artworks table.
pub fn build_state_ctx(config: CatalogConfig) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(config);
    ctx.add_state(ArtworksPageInput::default());
    ctx.add_state(PageFetchEffect::default());
    ctx.add_state(ArtworksTableState::default());

    ctx.record_compute(ArtworksPageCompute::default());

    ctx.record_command(FetchArtworksPageCommand);

    ctx
}
