//! Layout helpers that place an item list in a vertical region.

use egui::{Rect, Ui, Vec2};
use picklist_core::ListItemCollection;

use crate::item::ListItem;
use crate::list::ItemList;

/// Show `list` in a vertical region filling the available height.
/// Returns the region's rect.
pub fn item_list<I: ListItem>(
    ui: &mut Ui,
    list: ItemList<'_, I>,
    items: &mut ListItemCollection<I>,
    scroll: &mut Vec2,
) -> Rect {
    ui.vertical(|ui| {
        list.show(ui, items, scroll);
    })
    .response
    .rect
}

/// Show `list` in a vertical region at most `max_height` tall.
/// Returns the region's rect.
pub fn item_list_with_height<I: ListItem>(
    ui: &mut Ui,
    max_height: f32,
    list: ItemList<'_, I>,
    items: &mut ListItemCollection<I>,
    scroll: &mut Vec2,
) -> Rect {
    ui.vertical(|ui| {
        ui.set_max_height(max_height);
        list.show(ui, items, scroll);
    })
    .response
    .rect
}
