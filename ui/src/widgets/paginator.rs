use artworks_business::{ArtworksPageCompute, ArtworksPageInput, CatalogConfig, Paginator, set_page};
use artworks_states::StateCtx;
use egui::{Button, Response, RichText, Ui};

use crate::utils::colors::COLOR_ACCENT;

/// First/previous, page links, next/last, then the row report.
///
/// Only the page index changes here; the fetch follows from the page-fetch effect.
pub fn paginator(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let current = state_ctx.state::<ArtworksPageInput>().page;
    let rows = state_ctx.state::<CatalogConfig>().page_size;
    let total = state_ctx.compute::<ArtworksPageCompute>().total_records;
    let paginator = Paginator::new(current, rows, total);
    let mut target = None;

    let response = ui.horizontal(|ui| {
        if ui
            .add_enabled(paginator.has_previous(), Button::new("«"))
            .on_hover_text("First page")
            .clicked()
        {
            target = Some(1);
        }
        if ui
            .add_enabled(paginator.has_previous(), Button::new("‹"))
            .on_hover_text("Previous page")
            .clicked()
        {
            target = Some(current - 1);
        }

        for link in paginator.page_links() {
            let label = if link == current {
                RichText::new(link.to_string()).strong().color(COLOR_ACCENT)
            } else {
                RichText::new(link.to_string())
            };
            if ui.add(Button::new(label).selected(link == current)).clicked() {
                target = Some(link);
            }
        }

        if ui
            .add_enabled(paginator.has_next(), Button::new("›"))
            .on_hover_text("Next page")
            .clicked()
        {
            target = Some(current + 1);
        }
        if ui
            .add_enabled(paginator.has_next(), Button::new("»"))
            .on_hover_text("Last page")
            .clicked()
        {
            target = Some(paginator.page_count());
        }

        ui.separator();
        ui.label(paginator.report());
    });

    if let Some(page) = target
        && page != current
    {
        log::debug!("Paginator moved from page {current} to {page}");
        set_page(state_ctx, page);
    }

    response.response
}
