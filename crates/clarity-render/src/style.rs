//! Color spans over classified text.
//!
//! Design invariants:
//! * A `ColorSpan` covers one maximal run of a single `CharClass`; it never
//!   crosses a class boundary and never splits a `char`.
//! * Ranges are half-open byte ranges `[start, end)` into the owning text.
//! * Spans are ordered by `start`, never overlap, and (when text is present)
//!   tile the whole text because every character has a class.
//! * Spans are rebuilt from scratch by `tag`; nothing is patched in place.

use crate::color::Color;
use clarity_text::{CharClass, Classifier, class_runs};
use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSpan {
    pub range: Range<usize>,
    pub class: CharClass,
    pub color: Color,
}

impl ColorSpan {
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// One color per class. Always fully populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassColorMap {
    colors: [Color; 4],
}

impl ClassColorMap {
    /// Every class mapped to `default`.
    pub const fn uniform(default: Color) -> Self {
        Self {
            colors: [default; 4],
        }
    }

    pub fn get(&self, class: CharClass) -> Color {
        self.colors[class.index()]
    }

    /// Store `color` for `class`. Returns true when the stored value changed.
    pub fn set(&mut self, class: CharClass, color: Color) -> bool {
        let slot = &mut self.colors[class.index()];
        let changed = *slot != color;
        *slot = color;
        changed
    }

    pub fn iter(&self) -> impl Iterator<Item = (CharClass, Color)> + '_ {
        CharClass::ALL.into_iter().map(|class| (class, self.get(class)))
    }
}

impl Default for ClassColorMap {
    fn default() -> Self {
        Self::uniform(Color::default())
    }
}

/// Spans for the maximal runs of one class, colored with `color`.
pub fn tag_class<'a>(
    text: &'a str,
    classifier: &'a Classifier,
    class: CharClass,
    color: Color,
) -> impl Iterator<Item = ColorSpan> + 'a {
    clarity_text::runs_of(text, classifier, class).map(move |range| ColorSpan {
        range,
        class,
        color,
    })
}

/// Build the complete ordered span list for `text`.
///
/// Equivalent to tagging each class in `CharClass::RETAG_ORDER` and sorting
/// by start; classes are disjoint so the application order cannot change the
/// outcome. Done as a single pass.
pub fn tag(text: &str, classifier: &Classifier, colors: &ClassColorMap) -> Vec<ColorSpan> {
    class_runs(text, classifier)
        .map(|run| ColorSpan {
            color: colors.get(run.class),
            range: run.range,
            class: run.class,
        })
        .collect()
}

/// Borrowed text plus its spans, handed to measurers and painters.
#[derive(Clone, Copy, Debug)]
pub struct StyledText<'a> {
    text: &'a str,
    spans: &'a [ColorSpan],
}

/// A colored slice of a `StyledText`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledRun<'a> {
    pub text: &'a str,
    pub class: CharClass,
    pub color: Color,
}

impl<'a> StyledText<'a> {
    pub(crate) fn new(text: &'a str, spans: &'a [ColorSpan]) -> Self {
        debug_assert!(spans.windows(2).all(|w| w[0].range.end <= w[1].range.start));
        debug_assert!(spans.last().is_none_or(|s| s.range.end <= text.len()));
        Self { text, spans }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn spans(&self) -> &'a [ColorSpan] {
        self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Colored pieces in text order.
    pub fn runs(&self) -> impl Iterator<Item = StyledRun<'a>> + 'a {
        let text = self.text;
        self.spans.iter().map(move |span| StyledRun {
            text: &text[span.range.clone()],
            class: span.class,
            color: span.color,
        })
    }

    /// Color of the character starting at byte `idx`, if any span covers it.
    pub fn color_at(&self, idx: usize) -> Option<Color> {
        let pos = self.spans.partition_point(|s| s.range.end <= idx);
        self.spans
            .get(pos)
            .filter(|s| s.range.start <= idx)
            .map(|s| s.color)
    }
}
