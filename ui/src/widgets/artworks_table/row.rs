//! Row rendering for the artworks table.

use std::borrow::Cow;

use artworks_business::{Artwork, ArtworkColumn};
use egui::{Align, Label, Layout};
use egui_extras::TableRow;

use super::TableAction;

const LINE_SEPARATOR: &str = " · ";

pub fn render_artwork_row(
    row: &mut TableRow<'_, '_>,
    artwork: &Artwork,
    selected: bool,
    actions: &mut Vec<TableAction>,
) {
    row.set_selected(selected);

    row.col(|ui| {
        ui.centered_and_justified(|ui| {
            let mut checked = selected;
            if ui.checkbox(&mut checked, "").changed() {
                actions.push(TableAction::ToggleRow(artwork.id));
            }
        });
    });

    for column in ArtworkColumn::ALL {
        row.col(|ui| {
            let text = column.cell_text(artwork);
            let line = single_line(&text);
            if column.is_numeric() {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(&*line);
                });
            } else {
                ui.add(Label::new(&*line).truncate()).on_hover_text(&*text);
            }
        });
    }
}

/// Joins multi-line cell text (artist display carries line breaks) so every
/// line stays visible in a single-line row.
fn single_line(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        Cow::Owned(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(LINE_SEPARATOR),
        )
    } else {
        Cow::Borrowed(text)
    }
}
