//! Owned text plus its color spans.
//!
//! `TaggedText` is either empty (no text, no spans) or holds a non-empty
//! string whose spans were produced by `style::tag` against the most recent
//! color map. Replacing the text discards every previous span.

use crate::style::{ClassColorMap, ColorSpan, StyledText, tag};
use clarity_text::Classifier;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct TaggedText {
    classifier: Classifier,
    text: Option<String>,
    spans: Vec<ColorSpan>,
}

impl TaggedText {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            text: None,
            spans: Vec::new(),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Swap the classifier and re-tag the current text.
    pub fn set_classifier(&mut self, classifier: Classifier, colors: &ClassColorMap) {
        self.classifier = classifier;
        self.retag(colors);
    }

    /// Replace the text. `None` or `""` clears text and spans.
    pub fn set_text(&mut self, text: Option<&str>, colors: &ClassColorMap) {
        self.text = text.filter(|t| !t.is_empty()).map(str::to_owned);
        self.retag(colors);
    }

    /// Rebuild every span from the current text and `colors`.
    pub fn retag(&mut self, colors: &ClassColorMap) {
        self.spans = match self.text.as_deref() {
            Some(text) => tag(text, &self.classifier, colors),
            None => Vec::new(),
        };
        debug!(
            target: "clarity.tagger",
            text_bytes = self.text.as_ref().map_or(0, String::len),
            spans = self.spans.len(),
            "retag"
        );
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    pub fn spans(&self) -> &[ColorSpan] {
        &self.spans
    }

    pub fn styled(&self) -> StyledText<'_> {
        StyledText::new(self.text.as_deref().unwrap_or_default(), &self.spans)
    }
}
