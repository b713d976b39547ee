//! Column definitions for the artworks table.

use artworks_business::ArtworkColumn;
use egui_extras::Column;

pub const SELECTION_WIDTH: f32 = 48.0;
pub const ROW_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 28.0;

fn data_column(column: ArtworkColumn) -> Column {
    match column {
        ArtworkColumn::Title => Column::initial(220.0).at_least(100.0),
        ArtworkColumn::ArtistDisplay => Column::initial(200.0).at_least(100.0),
        ArtworkColumn::DateStart | ArtworkColumn::DateEnd => Column::initial(90.0).at_least(60.0),
        ArtworkColumn::PlaceOfOrigin | ArtworkColumn::Inscriptions => {
            Column::initial(140.0).at_least(80.0)
        }
    }
    .resizable(true)
    .clip(true)
}

/// Selection checkbox column followed by the data columns in display order.
pub fn table_columns() -> Vec<Column> {
    let mut columns = vec![Column::exact(SELECTION_WIDTH)];
    columns.extend(ArtworkColumn::ALL.map(data_column));
    if let Some(last) = columns.last_mut() {
        *last = Column::remainder().at_least(60.0);
    }
    columns
}
