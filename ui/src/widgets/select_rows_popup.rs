//! Overlay for the "select first N rows" shortcut.

use artworks_business::{ArtworksPageCompute, ArtworksTableState};
use artworks_states::StateCtx;
use egui::{Area, Frame, Id, Order, Response, TextEdit, Ui};

const POPUP_WIDTH: f32 = 200.0;

/// Shows the popup under `anchor` while it is open. Clicking outside closes it.
pub fn select_rows_popup(state_ctx: &mut StateCtx, ui: &mut Ui, anchor: Option<&Response>) {
    if !state_ctx.state::<ArtworksTableState>().select_rows_popup_open {
        return;
    }

    let records = state_ctx.compute::<ArtworksPageCompute>().records.clone();
    let table = state_ctx.state_mut::<ArtworksTableState>();
    let position = anchor.map_or(ui.min_rect().left_top(), |anchor| anchor.rect.left_bottom());

    let area = Area::new(Id::new("select_rows_popup"))
        .order(Order::Foreground)
        .fixed_pos(position)
        .show(ui.ctx(), |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(POPUP_WIDTH);
                ui.heading("Select Rows");

                let mut text = table.rows_to_select.clone();
                let input = ui.add(
                    TextEdit::singleline(&mut text)
                        .hint_text("Number of rows")
                        .desired_width(f32::INFINITY),
                );
                if input.changed() {
                    text.retain(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
                    table.set_rows_to_select(text);
                }

                ui.add_space(4.0);
                if ui.button("Select").clicked() {
                    table.select_first_rows(&records);
                }
            });
        });

    let anchor_clicked = anchor.is_some_and(Response::clicked);
    if area.response.clicked_elsewhere() && !anchor_clicked {
        table.close_select_rows_popup();
    }
}
