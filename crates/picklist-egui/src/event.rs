//! Pointer press snapshots and hit-testing against cached row bounds.

use egui::{PointerButton, Pos2, Ui};
use picklist_core::{ListItemCollection, Modifiers, MouseButton, apply_click};

use crate::item::ListItem;

/// A pointer press, in screen coordinates.
///
/// Selection only ever changes in response to one of these; hover, drag,
/// release, and scroll activity never mutate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPress {
    /// Where the button went down, in screen coordinates.
    pub position: Pos2,
    /// Which button went down.
    pub button: MouseButton,
    /// Modifier keys held at press time.
    pub modifiers: Modifiers,
}

impl PointerPress {
    /// Snapshot the pointer press that started this frame, if any.
    ///
    /// Maps egui's `command` modifier onto `ctrl`, so a mac command-click
    /// toggles like a ctrl-click elsewhere.
    pub fn read(ui: &Ui) -> Option<Self> {
        ui.input(|input| {
            let button = if input.pointer.button_pressed(PointerButton::Primary) {
                MouseButton::Left
            } else if input.pointer.button_pressed(PointerButton::Secondary) {
                MouseButton::Right
            } else if input.pointer.button_pressed(PointerButton::Middle) {
                MouseButton::Middle
            } else {
                return None;
            };
            let position = input.pointer.press_origin()?;
            Some(Self {
                position,
                button,
                modifiers: Modifiers {
                    shift: input.modifiers.shift,
                    ctrl: input.modifiers.command,
                    alt: input.modifiers.alt,
                    meta: input.modifiers.mac_cmd,
                },
            })
        })
    }
}

/// Apply a pointer press to the collection's selection.
///
/// `origin` is the screen position of the scroll content origin. Cached
/// row bounds are in content space, so the press position is translated
/// by `origin` before testing. Every item whose bounds contain the point
/// receives the click, in collection order; items that have never drawn
/// have no bounds and cannot be hit. Presses of buttons other than the
/// primary one never mutate the selection.
///
/// Returns true if the selection changed.
pub fn handle_press<I: ListItem>(
    items: &mut ListItemCollection<I>,
    press: &PointerPress,
    origin: Pos2,
) -> bool {
    if press.button != MouseButton::Left {
        return false;
    }
    let pointer = press.position - origin.to_vec2();
    let before = items.selection().to_vec();

    for index in 0..items.len() {
        if let Some(bounds) = items[index].bounds() {
            if bounds.contains(pointer) {
                apply_click(items, index, press.modifiers);
            }
        }
    }

    items.selection() != before.as_slice()
}
