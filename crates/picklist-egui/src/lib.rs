//! Picklist egui binding
//!
//! A selectable, scrollable item-list widget for egui:
//!
//! - **Item**: the row drawing trait and a default label row
//! - **List**: the scroll-region renderer with click selection
//! - **Event**: explicit pointer-press snapshots and hit-testing
//! - **Layout**: helpers that bound the list in a vertical region
//!
//! Collection and selection semantics live in `picklist-core`; the most
//! commonly used core types are re-exported here.

pub mod event;
pub mod item;
pub mod layout;
pub mod list;

pub use event::{PointerPress, handle_press};
pub use item::{DEFAULT_ROW_HEIGHT, IconFn, LabelItem, ListItem, RowContext};
pub use layout::{item_list, item_list_with_height};
pub use list::{ItemList, ItemListOutput};

pub use picklist_core::{ItemId, ListItemCollection, Modifiers, MouseButton, apply_click};

/// Standard colors used by the default row and selection highlight.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
}
