use artworks_business::ArtworksTableState;
use artworks_states::StateCtx;
use egui::{Frame, Margin, Response, RichText, Stroke, TextEdit, Ui};

use crate::utils::colors::{COLOR_SEARCH_BG, COLOR_SEARCH_BORDER, COLOR_SEARCH_ICON};

const SEARCH_WIDTH: f32 = 360.0;

/// Global filter input. Edits apply to the table on the same frame.
pub fn search_bar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let table = state_ctx.state_mut::<ArtworksTableState>();

    Frame::NONE
        .fill(COLOR_SEARCH_BG)
        .stroke(Stroke::new(1.0, COLOR_SEARCH_BORDER))
        .corner_radius(12.0)
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("🔍").size(18.0).color(COLOR_SEARCH_ICON));
                ui.add(
                    TextEdit::singleline(&mut table.filter)
                        .hint_text("Search Here")
                        .frame(false)
                        .desired_width(SEARCH_WIDTH),
                )
            })
            .inner
        })
        .inner
}
