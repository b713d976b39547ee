mod artworks_table;
mod paginator;
mod search_bar;
mod select_rows_popup;

pub use artworks_table::artworks_table;
pub use paginator::paginator;
pub use search_bar::search_bar;
pub use select_rows_popup::select_rows_popup;
