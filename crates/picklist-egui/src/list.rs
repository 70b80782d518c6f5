//! The scrollable, selectable item-list renderer.

use egui::{Id, Rect, ScrollArea, Shape, Ui, Vec2};
use picklist_core::ListItemCollection;

use crate::event::{PointerPress, handle_press};
use crate::item::{ListItem, RowContext};

type UpdateFn<'a, I> = Box<dyn FnOnce(&mut ListItemCollection<I>) + 'a>;
type BackgroundFn<'a> = Box<dyn FnOnce(Rect) -> Shape + 'a>;

/// What [`ItemList::show`] reports back to the caller.
#[derive(Debug, Clone, Copy)]
pub struct ItemListOutput {
    /// Whether this frame's pointer press changed the selection.
    pub changed: bool,
    /// Screen rect of the scroll region.
    pub rect: Rect,
}

/// A selectable, scrollable list of items.
///
/// The caller owns the collection and the scroll offset and passes both
/// to [`show`](Self::show) every frame, immediate-mode style. A plain
/// click selects the clicked row exclusively, ctrl-click toggles it,
/// shift-click selects the range from the anchor, and ctrl+shift-click
/// adds the range to the selection.
pub struct ItemList<'a, I> {
    update_contents: Option<UpdateFn<'a, I>>,
    background: Option<BackgroundFn<'a>>,
    max_height: Option<f32>,
    id_salt: Option<Id>,
}

impl<'a, I> ItemList<'a, I> {
    /// Create a list with the default configuration.
    pub fn new() -> Self {
        Self {
            update_contents: None,
            background: None,
            max_height: None,
            id_salt: None,
        }
    }

    /// Refresh the collection before this frame's hit-testing and
    /// drawing. Skipped on sizing passes.
    pub fn update_contents(
        mut self,
        refresh: impl FnOnce(&mut ListItemCollection<I>) + 'a,
    ) -> Self {
        self.update_contents = Some(Box::new(refresh));
        self
    }

    /// Paint a background behind the rows. The hook receives the final
    /// scroll-region rect in screen coordinates. Skipped on sizing
    /// passes.
    pub fn background(mut self, background: impl FnOnce(Rect) -> Shape + 'a) -> Self {
        self.background = Some(Box::new(background));
        self
    }

    /// Cap the scroll region's height. Without a cap the region fills
    /// the available height.
    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Distinguish scroll state when multiple lists share a parent `Ui`.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    /// Show the list.
    ///
    /// Presses are hit-tested against the bounds rows cached on the
    /// previous frame, before any row draws, so the updated selection is
    /// already visible this frame. The scroll offset is written back
    /// clamped to the content.
    pub fn show(
        self,
        ui: &mut Ui,
        items: &mut ListItemCollection<I>,
        scroll: &mut Vec2,
    ) -> ItemListOutput
    where
        I: ListItem,
    {
        let Self {
            update_contents,
            background,
            max_height,
            id_salt,
        } = self;

        let sizing_pass = ui.is_sizing_pass();
        if !sizing_pass {
            if let Some(refresh) = update_contents {
                refresh(items);
            }
        }

        // Sizing passes repeat within a frame; hit-testing on them would
        // apply the same press more than once.
        let press = if sizing_pass {
            None
        } else {
            PointerPress::read(ui)
        };

        // Reserve a paint slot now so the background, computed once the
        // region rect is known, still paints under the rows.
        let background_slot = background.as_ref().map(|_| ui.painter().add(Shape::Noop));

        let mut scroll_area = ScrollArea::vertical()
            .scroll_offset(*scroll)
            .auto_shrink([false, false]);
        if let Some(salt) = id_salt {
            scroll_area = scroll_area.id_salt(salt);
        }
        if let Some(max_height) = max_height {
            scroll_area = scroll_area.max_height(max_height);
        }

        let output = scroll_area.show(ui, |ui| {
            let row = RowContext {
                origin: ui.next_widget_position(),
            };

            let mut changed = false;
            if let Some(press) = &press {
                changed = handle_press(items, press, row.origin);
            }

            for index in 0..items.len() {
                let selected = items.is_index_selected(index);
                let item = &mut items[index];
                if selected {
                    item.draw_selected(ui, &row);
                } else {
                    item.draw(ui, &row);
                }
            }
            changed
        });

        *scroll = output.state.offset;

        if let (Some(slot), Some(background)) = (background_slot, background) {
            if !sizing_pass {
                ui.painter().set(slot, background(output.inner_rect));
            }
        }

        ItemListOutput {
            changed: output.inner,
            rect: output.inner_rect,
        }
    }
}

impl<I> Default for ItemList<'_, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::LabelItem;
    use egui::{
        CentralPanel, Context, Event, Frame, Modifiers, PointerButton, Pos2, RawInput, pos2, vec2,
    };

    fn labels(count: usize) -> ListItemCollection<LabelItem> {
        let mut items = ListItemCollection::new();
        for i in 0..count {
            items.add(LabelItem::new(format!("item {}", i)));
        }
        items
    }

    fn frame_input() -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(320.0, 240.0))),
            ..Default::default()
        }
    }

    fn press_input(pos: Pos2, modifiers: Modifiers) -> RawInput {
        RawInput {
            modifiers,
            events: vec![Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                modifiers,
            }],
            ..frame_input()
        }
    }

    fn show_frame(
        ctx: &Context,
        input: RawInput,
        items: &mut ListItemCollection<LabelItem>,
        scroll: &mut Vec2,
    ) -> ItemListOutput {
        let mut output = None;
        ctx.run(input, |ctx| {
            CentralPanel::default().frame(Frame::new()).show(ctx, |ui| {
                ui.spacing_mut().item_spacing = Vec2::ZERO;
                output = Some(ItemList::new().show(ui, items, scroll));
            });
        });
        output.expect("panel ran")
    }

    #[test]
    fn test_click_selects_row() {
        let ctx = Context::default();
        let mut items = labels(5);
        let mut scroll = Vec2::ZERO;

        // First frame lays the rows out and caches their bounds
        let first = show_frame(&ctx, frame_input(), &mut items, &mut scroll);
        assert!(!first.changed);
        assert!(items.selection().is_empty());

        // Second frame presses inside the second row (rows are 16 tall)
        let pressed = show_frame(
            &ctx,
            press_input(pos2(5.0, 24.0), Modifiers::NONE),
            &mut items,
            &mut scroll,
        );

        assert!(pressed.changed);
        assert_eq!(items.selected_count(), 1);
        assert!(items.is_index_selected(1));
    }

    #[test]
    fn test_ctrl_click_adds_second_row() {
        let ctx = Context::default();
        let mut items = labels(5);
        let mut scroll = Vec2::ZERO;

        show_frame(&ctx, frame_input(), &mut items, &mut scroll);
        show_frame(
            &ctx,
            press_input(pos2(5.0, 24.0), Modifiers::NONE),
            &mut items,
            &mut scroll,
        );

        let ctrl = Modifiers {
            command: true,
            ..Default::default()
        };
        let out = show_frame(&ctx, press_input(pos2(5.0, 56.0), ctrl), &mut items, &mut scroll);

        assert!(out.changed);
        assert!(items.is_index_selected(1));
        assert!(items.is_index_selected(3));
        assert_eq!(items.selected_count(), 2);
    }

    #[test]
    fn test_click_accounts_for_scroll_offset() {
        let ctx = Context::default();
        let mut items = labels(30);
        let mut scroll = vec2(0.0, 32.0);

        show_frame(&ctx, frame_input(), &mut items, &mut scroll);
        assert!((scroll.y - 32.0).abs() < f32::EPSILON);

        // A press at viewport y=8 lands on content y=40: the third row
        let out = show_frame(
            &ctx,
            press_input(pos2(5.0, 8.0), Modifiers::NONE),
            &mut items,
            &mut scroll,
        );

        assert!(out.changed);
        assert!(items.is_index_selected(2));
    }

    #[test]
    fn test_scroll_offset_clamped_to_content() {
        let ctx = Context::default();
        let mut items = labels(30);
        let mut scroll = vec2(0.0, 10_000.0);

        show_frame(&ctx, frame_input(), &mut items, &mut scroll);

        // 480 of content in a 240 viewport leaves at most 240 of scroll
        assert!((scroll.y - 240.0).abs() < 0.5);
    }

    #[test]
    fn test_update_contents_runs_before_drawing() {
        let ctx = Context::default();
        let mut items: ListItemCollection<LabelItem> = ListItemCollection::new();
        let mut scroll = Vec2::ZERO;

        ctx.run(frame_input(), |ctx| {
            CentralPanel::default().frame(Frame::new()).show(ctx, |ui| {
                ui.spacing_mut().item_spacing = Vec2::ZERO;
                ItemList::new()
                    .update_contents(|items| {
                        if items.is_empty() {
                            items.add(LabelItem::new("filled"));
                        }
                    })
                    .show(ui, &mut items, &mut scroll);
            });
        });

        assert_eq!(items.len(), 1);
        // The refreshed item drew, and cached bounds, this same frame
        assert!(items[0].bounds().is_some());
    }

    #[test]
    fn test_background_receives_region_rect() {
        let ctx = Context::default();
        let mut items = labels(3);
        let mut scroll = Vec2::ZERO;
        let mut seen = None;

        ctx.run(frame_input(), |ctx| {
            CentralPanel::default().frame(Frame::new()).show(ctx, |ui| {
                ui.spacing_mut().item_spacing = Vec2::ZERO;
                ItemList::new()
                    .max_height(100.0)
                    .background(|rect| {
                        seen = Some(rect);
                        Shape::Noop
                    })
                    .show(ui, &mut items, &mut scroll);
            });
        });

        let rect = seen.expect("background hook ran");
        assert_eq!(rect.min, Pos2::ZERO);
        assert!((rect.height() - 100.0).abs() < 0.5);
    }
}
