//! Click-driven selection semantics.

use crate::collection::ListItemCollection;
use crate::input::Modifiers;

/// Apply one pointer press on the item at `index` to the selection.
///
/// A plain click selects the item exclusively. Ctrl-click toggles the
/// item and keeps the rest of the selection. Shift-click selects the
/// contiguous range between the anchor (the most recently selected item)
/// and `index`; with ctrl also held, the range is added to the existing
/// selection instead of replacing it.
///
/// Returns true if the selection differs from before the call.
/// Panics if `index` is out of range.
pub fn apply_click<I>(
    items: &mut ListItemCollection<I>,
    index: usize,
    modifiers: Modifiers,
) -> bool {
    assert!(
        index < items.len(),
        "click index {} out of range (len {})",
        index,
        items.len()
    );
    let before = items.selection().to_vec();

    if modifiers.shift && !before.is_empty() {
        // Resolve the anchor index before any clearing, or the range is lost.
        let anchor_id = before[before.len() - 1];
        let anchor = items
            .index_of(anchor_id)
            .expect("selection only holds ids of live items");
        let (lower, upper) = if anchor <= index {
            (anchor, index)
        } else {
            (index, anchor)
        };
        if !modifiers.ctrl {
            items.clear_selection();
        }
        for i in lower..=upper {
            items.select_index(i);
        }
    } else {
        if !modifiers.ctrl {
            items.clear_selection();
        }
        if modifiers.ctrl && items.is_index_selected(index) {
            items.deselect_index(index);
        } else {
            items.select_index(index);
        }
    }

    let changed = items.selection() != before.as_slice();
    if changed {
        log::trace!(
            "click on index {} (shift={}, ctrl={}): {} item(s) selected",
            index,
            modifiers.shift,
            modifiers.ctrl,
            items.selected_count()
        );
    }
    changed
}
