//! The clarity view: classified, colored text that reports its desired size.
//!
//! State machine:
//! * NoText (initial): no spans, layout is empty, desired size is padding only.
//! * HasText: entered by `set_text` with a non-empty value. Text, size,
//!   density, padding and class colors may change freely.
//! * `set_text(None)` or `set_text(Some(""))` returns to NoText.
//!
//! Every mutation that changes what is drawn records `Invalidation::REDRAW`;
//! mutations that change the layout also record `Invalidation::RELAYOUT`.
//! The host drains these with `take_invalidation`.

use crate::color::Color;
use crate::measure::{MonospaceMeasurer, TextLayout, TextMeasurer, TextPaint};
use crate::style::{ClassColorMap, StyledText};
use crate::tagger::TaggedText;
use bitflags::bitflags;
use clarity_text::{CharClass, Classifier};
use tracing::{debug, trace};

/// Text size used until `set_text_size` is called (abstract units).
pub const DEFAULT_TEXT_SIZE: f32 = 12.0;

bitflags! {
    /// Host actions requested by the view.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Invalidation: u8 {
        const REDRAW = 1 << 0;
        const RELAYOUT = 1 << 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesiredSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug)]
pub struct ClarityView<M = MonospaceMeasurer> {
    measurer: M,
    tagged: TaggedText,
    colors: ClassColorMap,
    text_size: f32,
    density: f32,
    padding: Padding,
    layout: TextLayout,
    pending: Invalidation,
}

impl ClarityView<MonospaceMeasurer> {
    pub fn new() -> Self {
        Self::with_measurer(MonospaceMeasurer::default())
    }
}

impl Default for ClarityView<MonospaceMeasurer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasurer> ClarityView<M> {
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            tagged: TaggedText::default(),
            colors: ClassColorMap::default(),
            text_size: DEFAULT_TEXT_SIZE,
            density: 1.0,
            padding: Padding::default(),
            layout: TextLayout::empty(),
            pending: Invalidation::empty(),
        }
    }

    /// Use `classifier` for every subsequent (and the current) tagging pass.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.set_classifier(classifier);
        self
    }

    /// Map every class to `color`.
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.colors = ClassColorMap::uniform(color);
        self.tagged.retag(&self.colors);
        self
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn classifier(&self) -> &Classifier {
        self.tagged.classifier()
    }

    pub fn set_classifier(&mut self, classifier: Classifier) {
        self.tagged.set_classifier(classifier, &self.colors);
        self.pending |= Invalidation::REDRAW;
    }

    // ---- text ----

    /// Current text, or `""` when none is set.
    pub fn text(&self) -> &str {
        self.tagged.text().unwrap_or_default()
    }

    pub fn has_text(&self) -> bool {
        self.tagged.has_text()
    }

    /// Replace the text and re-tag every class. `None` or `""` clears it.
    pub fn set_text(&mut self, text: Option<&str>) {
        self.tagged.set_text(text, &self.colors);
        self.relayout();
    }

    // ---- size ----

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Update the text size. Equal values (NaN included) are ignored.
    pub fn set_text_size(&mut self, size: f32) {
        if same_value(self.text_size, size) {
            trace!(target: "clarity.layout", size, "text_size_unchanged");
            return;
        }
        self.text_size = size;
        self.relayout();
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// Update the density used to convert text size to device pixels.
    pub fn set_density(&mut self, density: f32) {
        if same_value(self.density, density) {
            return;
        }
        self.density = density;
        self.relayout();
    }

    /// Text size in whole device pixels.
    pub fn text_size_px(&self) -> f32 {
        (self.text_size * self.density).round()
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        if self.padding == padding {
            return;
        }
        self.padding = padding;
        self.pending |= Invalidation::REDRAW | Invalidation::RELAYOUT;
    }

    // ---- colors ----

    pub fn class_color(&self, class: CharClass) -> Color {
        self.colors.get(class)
    }

    pub fn class_colors(&self) -> &ClassColorMap {
        &self.colors
    }

    /// Set the color of `class` and re-tag the current text.
    pub fn set_class_color(&mut self, class: CharClass, color: Color) {
        self.colors.set(class, color);
        self.tagged.retag(&self.colors);
        self.pending |= Invalidation::REDRAW;
    }

    // ---- measurement ----

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    /// Layout width plus horizontal padding.
    pub fn desired_width(&self) -> i32 {
        (self.layout.width() as f32 + self.padding.horizontal() as f32).round() as i32
    }

    /// Layout height plus vertical padding.
    pub fn desired_height(&self) -> i32 {
        (self.layout.height() + self.padding.vertical() as f32).round() as i32
    }

    pub fn desired_size(&self) -> DesiredSize {
        DesiredSize {
            width: self.desired_width(),
            height: self.desired_height(),
        }
    }

    // ---- rendering ----

    /// Render hook: the current text and its ordered color spans. The host
    /// translates by its own padding before drawing.
    pub fn styled(&self) -> StyledText<'_> {
        self.tagged.styled()
    }

    pub fn pending_invalidation(&self) -> Invalidation {
        self.pending
    }

    /// Return and clear the accumulated invalidation flags.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.pending)
    }

    fn paint(&self) -> TextPaint {
        TextPaint {
            text_size_px: self.text_size_px(),
        }
    }

    fn relayout(&mut self) {
        self.layout = TextLayout::build(&self.measurer, &self.tagged.styled(), &self.paint());
        self.pending |= Invalidation::REDRAW | Invalidation::RELAYOUT;
        debug!(
            target: "clarity.layout",
            text_size = self.text_size,
            text_size_px = self.text_size_px(),
            width = self.layout.width(),
            height = self.layout.height(),
            lines = self.layout.line_count(),
            "relayout"
        );
    }
}

// NaN compares equal to NaN so a repeated non-finite value stays a no-op.
fn same_value(current: f32, next: f32) -> bool {
    current == next || (current.is_nan() && next.is_nan())
}
