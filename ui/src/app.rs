use std::time::Duration;

use artworks_business::{ArtworksPageCompute, ArtworksTableState, run_page_fetch_effect};
use egui::{Margin, Visuals};

use crate::utils::colors::COLOR_ACCENT;
use crate::{state::State, widgets};

/// How often to repaint while a page is in flight, so the response shows up
/// without waiting for input.
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ArtworksApp {
    pub state: State,
}

impl ArtworksApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

/// Dark theme with the indigo accent.
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.selection.bg_fill = COLOR_ACCENT.gamma_multiply(0.4);
    visuals.hyperlink_color = COLOR_ACCENT;
    ctx.set_visuals(visuals);
}

impl eframe::App for ArtworksApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state_ctx = &mut self.state.ctx;

        // Sync Compute for render
        state_ctx.sync_computes();
        let revision = state_ctx.compute::<ArtworksPageCompute>().revision;
        if state_ctx
            .state_mut::<ArtworksTableState>()
            .acknowledge_revision(revision)
        {
            log::debug!("Page revision {revision} loaded, selection cleared");
        }

        egui::TopBottomPanel::top("search_panel")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(Margin::same(16)))
            .show(ctx, |ui| {
                widgets::search_bar(state_ctx, ui);
            });

        egui::TopBottomPanel::bottom("paginator_panel")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(Margin::same(12)))
            .show(ctx, |ui| {
                widgets::paginator(state_ctx, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let anchor = widgets::artworks_table(state_ctx, ui);
            widgets::select_rows_popup(state_ctx, ui, anchor.as_ref());
        });

        // Mount and page changes both surface here
        run_page_fetch_effect(state_ctx);
        state_ctx.flush_commands();

        if state_ctx.compute::<ArtworksPageCompute>().is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }
    }
}
