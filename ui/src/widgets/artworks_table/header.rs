//! Header row: the select-rows chevron plus sortable column labels.

use artworks_business::{ArtworkColumn, ArtworksTableState, SortDirection};
use egui::{Button, CursorIcon, Label, Response, RichText, Sense};
use egui_extras::TableRow;

use super::TableAction;
use crate::utils::colors::COLOR_CHEVRON;

/// Renders the header and returns the chevron's response, used to anchor the popup.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    table: &ArtworksTableState,
    actions: &mut Vec<TableAction>,
) -> Option<Response> {
    let mut chevron = None;
    header.col(|ui| {
        ui.centered_and_justified(|ui| {
            let response = ui
                .add(
                    Label::new(RichText::new("⏷").size(18.0).color(COLOR_CHEVRON))
                        .sense(Sense::click()),
                )
                .on_hover_cursor(CursorIcon::PointingHand)
                .on_hover_text("Select rows");
            if response.clicked() {
                actions.push(TableAction::ToggleSelectRowsPopup);
            }
            chevron = Some(response);
        });
    });

    for column in ArtworkColumn::ALL {
        header.col(|ui| {
            let text = match table.sort_direction(column) {
                Some(SortDirection::Ascending) => format!("{} ⏶", column.header()),
                Some(SortDirection::Descending) => format!("{} ⏷", column.header()),
                None => column.header().to_owned(),
            };
            if ui
                .add(Button::new(RichText::new(text).strong()).frame(false))
                .clicked()
            {
                actions.push(TableAction::ToggleSort(column));
            }
        });
    }

    chevron
}
