//! Colored, measurable text for the clarity view.
//!
//! Pipeline:
//! 1. `ClarityView::set_text` stores the text in a `TaggedText`, which asks
//!    the classifier for maximal class runs and colors them from the
//!    `ClassColorMap` (`style::tag`).
//! 2. The view lays the styled text out on a single line through a
//!    `TextMeasurer` and keeps the resulting `TextLayout`.
//! 3. Hosts read `desired_width` / `desired_height` (layout plus padding),
//!    drain `Invalidation` flags and draw `styled()` themselves, or hand it to
//!    `writer::paint` for a terminal.
//!
//! Class color changes re-tag without relayout; text, size and density
//! changes relayout.
//!
//! Exposed Components:
//! - `color`: packed ARGB `Color` with `#RRGGBB` / `#AARRGGBB` parsing.
//! - `style`: `ColorSpan`, `ClassColorMap`, `StyledText` and the pure `tag`.
//! - `tagger`: `TaggedText`, owner of the text and its spans.
//! - `measure`: `TextMeasurer` seam, `MonospaceMeasurer`, `CellMeasurer`, `TextLayout`.
//! - `view`: `ClarityView`, `Padding`, `Invalidation`.
//! - `writer`: terminal command list (MoveTo, SetForeground, Print) for styled text.

pub mod color;
pub mod measure;
pub mod style;
pub mod tagger;
pub mod view;
pub mod writer;

pub use clarity_text::{CharClass, Classifier, LowercaseSet};
pub use color::{Color, ColorParseError};
pub use measure::{
    CellMeasurer, LayoutParams, LineMetrics, MonospaceMeasurer, TextLayout, TextMeasurer,
    TextPaint,
};
pub use style::{ClassColorMap, ColorSpan, StyledRun, StyledText};
pub use tagger::TaggedText;
pub use view::{ClarityView, DEFAULT_TEXT_SIZE, DesiredSize, Invalidation, Padding};
