//! List rows: the drawing trait and the default label item.

use egui::{
    Align2, Color32, CornerRadius, FontId, Image, ImageSource, Pos2, Rect, Sense, Stroke,
    StrokeKind, Ui, pos2, vec2,
};

use crate::theme;

/// Default height of a [`LabelItem`] row.
pub const DEFAULT_ROW_HEIGHT: f32 = 16.0;

/// Source for an item's icon, queried on every draw.
/// Returning `None` draws the row without an icon.
pub type IconFn = Box<dyn Fn() -> Option<ImageSource<'static>>>;

/// Per-frame drawing context for list rows.
///
/// Carries the screen position of the scroll content's top-left corner so
/// rows can convert between screen space and scroll-invariant content
/// space.
#[derive(Debug, Clone, Copy)]
pub struct RowContext {
    /// Screen position of the scroll content origin.
    pub origin: Pos2,
}

impl RowContext {
    /// Convert a screen-space rect to content space.
    pub fn to_content(&self, rect: Rect) -> Rect {
        rect.translate(-self.origin.to_vec2())
    }

    /// Convert a content-space rect to screen space.
    pub fn to_screen(&self, rect: Rect) -> Rect {
        rect.translate(self.origin.to_vec2())
    }
}

/// A row in an item list.
///
/// Rows lay themselves out with the usual `Ui` allocation calls and cache
/// the allocated rect in content space (via [`RowContext::to_content`])
/// whenever the pass is not a sizing pass. Pointer presses are hit-tested
/// against the bounds cached on the previous frame.
pub trait ListItem {
    /// Draw the row and cache its bounds.
    fn draw(&mut self, ui: &mut Ui, row: &RowContext);

    /// Draw the row with a selection highlight.
    ///
    /// The default paints a filled, outlined box at the cached bounds and
    /// then draws the row content over it. Before the first repaint there
    /// are no cached bounds and only the content is drawn.
    fn draw_selected(&mut self, ui: &mut Ui, row: &RowContext) {
        if let Some(bounds) = self.bounds() {
            let rect = row.to_screen(bounds);
            if ui.is_rect_visible(rect) {
                ui.painter()
                    .rect_filled(rect, CornerRadius::same(2), theme::SELECTED_BG);
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(2),
                    Stroke::new(1.0, theme::ACCENT),
                    StrokeKind::Inside,
                );
            }
        }
        self.draw(ui, row);
    }

    /// Bounds cached by the most recent repaint draw, in content space.
    /// `None` until the row has drawn once.
    fn bounds(&self) -> Option<Rect>;
}

impl<T: ListItem + ?Sized> ListItem for Box<T> {
    fn draw(&mut self, ui: &mut Ui, row: &RowContext) {
        (**self).draw(ui, row);
    }

    fn draw_selected(&mut self, ui: &mut Ui, row: &RowContext) {
        (**self).draw_selected(ui, row);
    }

    fn bounds(&self) -> Option<Rect> {
        (**self).bounds()
    }
}

/// A single-line text row with an optional icon.
pub struct LabelItem {
    /// Label text.
    pub text: String,
    /// Row height in points.
    pub height: f32,
    /// Label color.
    pub color: Color32,
    /// Optional icon source, queried on every draw.
    pub icon: Option<IconFn>,
    rect: Option<Rect>,
}

impl LabelItem {
    /// Create a label item with the default height and color.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            height: DEFAULT_ROW_HEIGHT,
            color: theme::TEXT,
            icon: None,
            rect: None,
        }
    }

    /// Set the row height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the label color.
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    /// Set the icon source function.
    pub fn with_icon(
        mut self,
        icon: impl Fn() -> Option<ImageSource<'static>> + 'static,
    ) -> Self {
        self.icon = Some(Box::new(icon));
        self
    }
}

impl std::fmt::Debug for LabelItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelItem")
            .field("text", &self.text)
            .field("height", &self.height)
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}

impl ListItem for LabelItem {
    fn draw(&mut self, ui: &mut Ui, row: &RowContext) {
        let size = vec2(ui.available_width(), self.height);
        let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let mut text_x = rect.left() + 4.0;
            let icon = self.icon.as_ref().and_then(|icon| icon());
            if let Some(source) = icon {
                let icon_side = (self.height - 2.0).max(1.0);
                let icon_rect = Rect::from_center_size(
                    pos2(text_x + icon_side / 2.0, rect.center().y),
                    vec2(icon_side, icon_side),
                );
                Image::new(source)
                    .fit_to_exact_size(icon_rect.size())
                    .paint_at(ui, icon_rect);
                text_x = icon_rect.right() + 4.0;
            }
            ui.painter().text(
                pos2(text_x, rect.center().y),
                Align2::LEFT_CENTER,
                &self.text,
                FontId::proportional(12.0),
                self.color,
            );
        }

        if !ui.is_sizing_pass() {
            self.rect = Some(row.to_content(rect));
        }
    }

    fn bounds(&self) -> Option<Rect> {
        self.rect
    }
}
