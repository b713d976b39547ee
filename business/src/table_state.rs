//! Client-side view state of the artworks table: filter, selection, sort and the
//! select-rows popup. Everything here applies to the currently loaded page only.

use std::any::Any;
use std::collections::BTreeSet;

use artworks_states::{State, assign_impl};

use crate::artwork::{Artwork, ArtworkColumn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: ArtworkColumn,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default)]
pub struct ArtworksTableState {
    pub filter: String,
    /// Selected record ids on the current page.
    pub selection: BTreeSet<u64>,
    pub sort: Option<SortOrder>,
    /// Raw text of the popup's row count input.
    pub rows_to_select: String,
    pub select_rows_popup_open: bool,
    seen_revision: u64,
}

impl ArtworksTableState {
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Case-insensitive containment against any displayed field.
    pub fn matches_filter(&self, artwork: &Artwork) -> bool {
        let needle = self.filter.to_lowercase();
        needle.is_empty() || matches_needle(artwork, &needle)
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(&id)
    }

    pub fn set_selected(&mut self, id: u64, selected: bool) {
        if selected {
            self.selection.insert(id);
        } else {
            self.selection.remove(&id);
        }
    }

    pub fn toggle_selected(&mut self, id: u64) {
        let selected = self.is_selected(id);
        self.set_selected(id, !selected);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected records in load order.
    pub fn selected_records<'a>(&self, records: &'a [Artwork]) -> Vec<&'a Artwork> {
        records
            .iter()
            .filter(|artwork| self.is_selected(artwork.id))
            .collect()
    }

    /// Stores the popup input. A lone `"0"` is kept as empty text.
    pub fn set_rows_to_select(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.rows_to_select = if text == "0" { String::new() } else { text };
    }

    /// Rows the popup input asks for out of `available`. Anything unparsable counts
    /// as zero; a negative count `-n` leaves out the last `n` rows.
    pub fn requested_row_count(&self, available: usize) -> usize {
        let count = parse_row_count(&self.rows_to_select);
        if count < 0 {
            usize::try_from(count.unsigned_abs())
                .map_or(0, |excluded| available.saturating_sub(excluded))
        } else {
            usize::try_from(count).unwrap_or(usize::MAX).min(available)
        }
    }

    /// Replaces the selection with the first N records in load order and closes the popup.
    pub fn select_first_rows(&mut self, records: &[Artwork]) {
        let count = self.requested_row_count(records.len());
        self.selection = records[..count].iter().map(|artwork| artwork.id).collect();
        self.select_rows_popup_open = false;
        log::debug!("Selected first {count} of {} rows", records.len());
    }

    pub fn toggle_select_rows_popup(&mut self) {
        self.select_rows_popup_open = !self.select_rows_popup_open;
    }

    pub fn close_select_rows_popup(&mut self) {
        self.select_rows_popup_open = false;
    }

    /// Ascending on a new column, flips direction on the same column.
    pub fn toggle_sort(&mut self, column: ArtworkColumn) {
        self.sort = Some(match self.sort {
            Some(SortOrder {
                column: current,
                direction,
            }) if current == column => SortOrder {
                column,
                direction: match direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => SortOrder {
                column,
                direction: SortDirection::Ascending,
            },
        });
    }

    pub fn sort_direction(&self, column: ArtworkColumn) -> Option<SortDirection> {
        self.sort
            .filter(|order| order.column == column)
            .map(|order| order.direction)
    }

    /// Rows to render: filtered, then sorted. Ties keep load order.
    pub fn visible_rows<'a>(&self, records: &'a [Artwork]) -> Vec<&'a Artwork> {
        let mut rows: Vec<&Artwork> = records
            .iter()
            .filter(|artwork| self.matches_filter(artwork))
            .collect();

        if let Some(SortOrder { column, direction }) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    /// Clears the selection the first time a new page revision is seen.
    pub fn acknowledge_revision(&mut self, revision: u64) -> bool {
        if self.seen_revision == revision {
            return false;
        }
        self.seen_revision = revision;
        self.selection.clear();
        true
    }
}

impl State for ArtworksTableState {
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

fn matches_needle(artwork: &Artwork, needle: &str) -> bool {
    ArtworkColumn::ALL
        .iter()
        .any(|column| column.cell_text(artwork).to_lowercase().contains(needle))
}

/// Numeric text to a signed row count: blank is 0, garbage is 0, fractions are
/// truncated toward zero, `Infinity` saturates to `i64::MAX`.
fn parse_row_count(text: &str) -> i64 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    let value = match text {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if text.starts_with("0x") || text.starts_with("0X") => {
            u64::from_str_radix(&text[2..], 16).map_or(f64::NAN, |v| v as f64)
        }
        // `f64::from_str` also accepts "inf" and "nan" spellings.
        _ if text.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        _ => text.parse::<f64>().unwrap_or(f64::NAN),
    };

    // Float to int casts saturate and map NaN to 0.
    value.trunc() as i64
}
