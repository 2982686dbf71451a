//! Text measurement seam and the single-line layout built on top of it.
//!
//! The view never rasterizes glyphs. It asks a `TextMeasurer` for the extent
//! of its styled text and keeps the resulting `TextLayout`. Two measurers
//! ship here: `MonospaceMeasurer` (device pixels, fixed em ratios) and
//! `CellMeasurer` (terminal cells).
//!
//! Line breaking rules shared by both measurers:
//! * `'\n'` always starts a new line.
//! * With `max_width: None` nothing else wraps.
//! * With `max_width: Some(w)` a grapheme that would push a non-empty line
//!   past `w` starts a new line.

use crate::style::StyledText;
use clarity_text::egc_width;
use unicode_segmentation::UnicodeSegmentation;

/// Paint configuration relevant to measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    /// Text size in device pixels.
    pub text_size_px: f32,
}

/// Paragraph settings. The view always uses `single_line()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub max_width: Option<f32>,
    pub spacing_mult: f32,
    pub spacing_add: f32,
}

impl LayoutParams {
    /// Left-aligned, 1.0 spacing, no extra spacing, no wrapping.
    pub const fn single_line() -> Self {
        Self {
            max_width: None,
            spacing_mult: 1.0,
            spacing_add: 0.0,
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::single_line()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineMetrics {
    pub width: f32,
    pub height: f32,
    pub line_count: usize,
}

/// External text-measurement primitive.
pub trait TextMeasurer {
    fn measure(
        &self,
        text: &StyledText<'_>,
        paint: &TextPaint,
        params: &LayoutParams,
    ) -> LineMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(
        &self,
        text: &StyledText<'_>,
        paint: &TextPaint,
        params: &LayoutParams,
    ) -> LineMetrics {
        (**self).measure(text, paint, params)
    }
}

/// Break `text` into lines and return (widest line, line count).
fn break_lines(text: &str, max_width: Option<f32>, advance: impl Fn(&str) -> f32) -> (f32, usize) {
    let mut widest = 0.0f32;
    let mut lines = 0usize;
    for paragraph in text.split('\n') {
        lines += 1;
        let mut line = 0.0f32;
        for g in paragraph.graphemes(true) {
            let a = advance(g);
            if let Some(max) = max_width
                && line > 0.0
                && line + a > max
            {
                widest = widest.max(line);
                lines += 1;
                line = 0.0;
            }
            line += a;
        }
        widest = widest.max(line);
    }
    (widest, lines)
}

fn height_for(lines: usize, line_height: f32, params: &LayoutParams) -> f32 {
    let per_line = line_height * params.spacing_mult + params.spacing_add;
    per_line * lines as f32
}

/// Fixed-pitch measurer in device pixels.
///
/// Each terminal column advances `advance_em * text_size_px`; each line is
/// `line_height_em * text_size_px` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance_em: f32,
    pub line_height_em: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_em: 0.6,
            line_height_em: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(
        &self,
        text: &StyledText<'_>,
        paint: &TextPaint,
        params: &LayoutParams,
    ) -> LineMetrics {
        if text.is_empty() {
            return LineMetrics::default();
        }
        let cell = self.advance_em * paint.text_size_px;
        let (width, line_count) =
            break_lines(text.text(), params.max_width, |g| f32::from(egc_width(g)) * cell);
        LineMetrics {
            width,
            height: height_for(line_count, self.line_height_em * paint.text_size_px, params),
            line_count,
        }
    }
}

/// Terminal cell measurer: width in columns, one row per line. Ignores the
/// paint size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn measure(
        &self,
        text: &StyledText<'_>,
        _paint: &TextPaint,
        params: &LayoutParams,
    ) -> LineMetrics {
        if text.is_empty() {
            return LineMetrics::default();
        }
        let (width, line_count) =
            break_lines(text.text(), params.max_width, |g| f32::from(egc_width(g)));
        LineMetrics {
            width,
            height: height_for(line_count, 1.0, params),
            line_count,
        }
    }
}

/// Result of laying out the view's text.
///
/// `width` is the natural advance truncated to whole pixels, matching a
/// layout primitive that takes an integer width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextLayout {
    width: u32,
    height: f32,
    line_count: usize,
}

impl TextLayout {
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0.0,
            line_count: 0,
        }
    }

    pub fn build<M: TextMeasurer + ?Sized>(
        measurer: &M,
        text: &StyledText<'_>,
        paint: &TextPaint,
    ) -> Self {
        if text.is_empty() {
            return Self::empty();
        }
        let metrics = measurer.measure(text, paint, &LayoutParams::single_line());
        Self {
            width: metrics.width.max(0.0) as u32,
            height: metrics.height.max(0.0),
            line_count: metrics.line_count,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ClassColorMap, tag};
    use clarity_text::Classifier;

    fn measure_with<M: TextMeasurer>(
        m: &M,
        text: &str,
        px: f32,
        params: LayoutParams,
    ) -> LineMetrics {
        let spans = tag(text, &Classifier::default(), &ClassColorMap::default());
        let styled = StyledText::new(text, &spans);
        m.measure(&styled, &TextPaint { text_size_px: px }, &params)
    }

    #[test]
    fn monospace_single_line() {
        let m = MonospaceMeasurer {
            advance_em: 0.5,
            line_height_em: 1.0,
        };
        let lm = measure_with(&m, "Ab3!", 20.0, LayoutParams::single_line());
        assert_eq!(lm.width, 40.0);
        assert_eq!(lm.height, 20.0);
        assert_eq!(lm.line_count, 1);
    }

    #[test]
    fn cells_count_wide_graphemes() {
        let lm = measure_with(&CellMeasurer, "a界😀", 12.0, LayoutParams::single_line());
        assert_eq!(lm.width, 5.0);
        assert_eq!(lm.height, 1.0);
    }

    #[test]
    fn newline_breaks_even_without_wrapping() {
        let lm = measure_with(&CellMeasurer, "abc\nde", 12.0, LayoutParams::single_line());
        assert_eq!(lm.line_count, 2);
        assert_eq!(lm.width, 3.0);
        assert_eq!(lm.height, 2.0);
    }

    #[test]
    fn max_width_wraps_graphemes() {
        let params = LayoutParams {
            max_width: Some(4.0),
            ..LayoutParams::single_line()
        };
        let lm = measure_with(&CellMeasurer, "abcdefghij", 12.0, params);
        assert_eq!(lm.line_count, 3);
        assert_eq!(lm.width, 4.0);
    }

    #[test]
    fn spacing_applies_per_line() {
        let params = LayoutParams {
            max_width: None,
            spacing_mult: 2.0,
            spacing_add: 1.0,
        };
        let lm = measure_with(&CellMeasurer, "a\nb", 12.0, params);
        assert_eq!(lm.height, 6.0);
    }

    #[test]
    fn layout_truncates_width() {
        let m = MonospaceMeasurer {
            advance_em: 0.55,
            line_height_em: 1.0,
        };
        let spans = tag("abc", &Classifier::default(), &ClassColorMap::default());
        let styled = StyledText::new("abc", &spans);
        let layout = TextLayout::build(&m, &styled, &TextPaint { text_size_px: 10.0 });
        // 3 * 5.5 = 16.5
        assert_eq!(layout.width(), 16);
        assert_eq!(layout.height(), 10.0);
    }

    #[test]
    fn empty_layout_is_zero() {
        let styled = StyledText::new("", &[]);
        let layout = TextLayout::build(&CellMeasurer, &styled, &TextPaint { text_size_px: 1.0 });
        assert_eq!(layout, TextLayout::empty());
    }
}
