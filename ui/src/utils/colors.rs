//! Shared color constants for the UI.

use egui::Color32;

/// Chevron that opens the select-rows popup.
pub const COLOR_CHEVRON: Color32 = Color32::YELLOW;

/// Search field background (slate-900).
pub const COLOR_SEARCH_BG: Color32 = Color32::from_rgb(15, 23, 42);

/// Search field border (gray-700).
pub const COLOR_SEARCH_BORDER: Color32 = Color32::from_rgb(55, 65, 81);

/// Search icon (zinc-600).
pub const COLOR_SEARCH_ICON: Color32 = Color32::from_rgb(82, 82, 91);

/// Accent for the current page link and checked rows (indigo-400).
pub const COLOR_ACCENT: Color32 = Color32::from_rgb(129, 140, 248);
