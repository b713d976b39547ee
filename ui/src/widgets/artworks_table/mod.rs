//! The artworks grid: selection column, six sortable data columns and the
//! loading/empty states.
//!
//! Split into:
//! - `columns`: column widths
//! - `header`: chevron and sortable header labels
//! - `row`: one artwork row

mod columns;
mod header;
mod row;

use artworks_business::{ArtworkColumn, ArtworksPageCompute, ArtworksTableState};
use artworks_states::StateCtx;
use egui::{Align, Layout, Response, Ui};
use egui_extras::TableBuilder;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_artwork_row;

/// Interactions collected while rendering, applied once the rows are no longer borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableAction {
    ToggleRow(u64),
    ToggleSort(ArtworkColumn),
    ToggleSelectRowsPopup,
}

/// Renders the table and returns the header chevron, the select-rows popup anchor.
pub fn artworks_table(state_ctx: &mut StateCtx, ui: &mut Ui) -> Option<Response> {
    let page = state_ctx.compute::<ArtworksPageCompute>().clone();
    let table = state_ctx.state_mut::<ArtworksTableState>();
    let mut actions = Vec::new();

    let chevron = ui
        .vertical(|ui| {
            if page.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }

            let rows = table.visible_rows(&page.records);
            let mut chevron = None;

            let mut builder = TableBuilder::new(ui)
                .id_salt("artworks_table")
                .striped(true)
                .sense(egui::Sense::hover())
                .cell_layout(Layout::left_to_right(Align::Center));
            for column in table_columns() {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    chevron = render_table_header(&mut header, table, &mut actions);
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let artwork = rows[row.index()];
                        let selected = table.is_selected(artwork.id);
                        render_artwork_row(&mut row, artwork, selected, &mut actions);
                    });
                });

            if rows.is_empty() && !page.is_loading() {
                ui.add_space(8.0);
                ui.label("No results found");
            }

            chevron
        })
        .inner;

    for action in actions {
        match action {
            TableAction::ToggleRow(id) => table.toggle_selected(id),
            TableAction::ToggleSort(column) => table.toggle_sort(column),
            TableAction::ToggleSelectRowsPopup => table.toggle_select_rows_popup(),
        }
    }

    chevron
}

#[cfg(test)]
mod tests {
    use artworks_business::{
        Artwork, ArtworksPage, ArtworksPageCompute, ArtworksTableState, CatalogConfig,
        build_state_ctx,
    };
    use artworks_states::StateCtx;
    use egui_kittest::Harness;
    use kittest::Queryable;

    fn artwork(id: u64, title: &str, artist: &str) -> Artwork {
        Artwork {
            id,
            title: title.to_owned(),
            place_of_origin: "France".to_owned(),
            artist_display: artist.to_owned(),
            inscriptions: None,
            date_start: Some(1900),
            date_end: Some(1905),
        }
    }

    fn loaded_ctx() -> StateCtx {
        let mut state_ctx = build_state_ctx(CatalogConfig::default());
        let loaded = ArtworksPageCompute::default().loaded(
            1,
            ArtworksPage {
                records: vec![
                    artwork(1, "Water Lilies", "Claude Monet"),
                    artwork(2, "The Bedroom", "Vincent van Gogh"),
                    artwork(3, "Nighthawks", "Edward Hopper"),
                ],
                total_records: 3,
            },
        );
        state_ctx.updater().set(loaded);
        state_ctx.sync_computes();
        state_ctx
    }

    fn harness(state_ctx: StateCtx) -> Harness<'static, StateCtx> {
        let mut harness = Harness::new_ui_state(
            |ui, state_ctx| {
                super::artworks_table(state_ctx, ui);
            },
            state_ctx,
        );
        harness.step();
        harness
    }

    #[test]
    fn shows_headers_and_loaded_rows() {
        let harness = harness(loaded_ctx());

        for header in ["Title", "Place of Origin", "Artist Display", "Date End"] {
            assert!(
                harness.query_by_label(header).is_some(),
                "header {header} should be shown"
            );
        }
        assert!(harness.query_by_label("Water Lilies").is_some());
        assert!(harness.query_by_label("Nighthawks").is_some());
        assert!(
            harness.query_by_label("Loading...").is_none(),
            "loaded table must not show the spinner"
        );
    }

    #[test]
    fn shows_loading_before_first_page() {
        let harness = harness(build_state_ctx(CatalogConfig::default()));

        assert!(harness.query_by_label("Loading...").is_some());
        assert!(
            harness.query_by_label("No results found").is_none(),
            "empty message waits for the first response"
        );
    }

    #[test]
    fn filter_hides_non_matching_rows() {
        let mut state_ctx = loaded_ctx();
        state_ctx
            .state_mut::<ArtworksTableState>()
            .set_filter("hopper");

        let harness = harness(state_ctx);

        assert!(harness.query_by_label("Nighthawks").is_some());
        assert!(harness.query_by_label("Water Lilies").is_none());
        assert!(harness.query_by_label("The Bedroom").is_none());
    }

    #[test]
    fn no_match_shows_empty_message() {
        let mut state_ctx = loaded_ctx();
        state_ctx
            .state_mut::<ArtworksTableState>()
            .set_filter("zzz");

        let harness = harness(state_ctx);

        assert!(harness.query_by_label("No results found").is_some());
    }

    #[test]
    fn sorted_column_shows_direction() {
        let mut state_ctx = loaded_ctx();
        state_ctx
            .state_mut::<ArtworksTableState>()
            .toggle_sort(artworks_business::ArtworkColumn::Title);

        let harness = harness(state_ctx);

        assert!(harness.query_by_label("Title ⏶").is_some());
    }

    #[test]
    fn filter_match_on_a_later_artist_line_is_visible() {
        let mut state_ctx = build_state_ctx(CatalogConfig::default());
        let loaded = ArtworksPageCompute::default().loaded(
            1,
            ArtworksPage {
                records: vec![
                    artwork(1, "Water Lilies", "Monet\nFrench"),
                    artwork(2, "Nighthawks", "Hopper\nAmerican"),
                ],
                total_records: 2,
            },
        );
        state_ctx.updater().set(loaded);
        state_ctx.sync_computes();
        state_ctx
            .state_mut::<ArtworksTableState>()
            .set_filter("french");

        let harness = harness(state_ctx);

        assert!(harness.query_by_label("Monet · French").is_some());
        assert!(harness.query_by_label("Nighthawks").is_none());
    }
}
