//! Maximal same-class runs over a string.
//!
//! Contract:
//! - Runs are emitted in ascending order and tile the whole input.
//! - `range` is a half-open byte range on `char` boundaries.
//! - Two adjacent runs never share a class (runs are maximal).

use crate::class::{CharClass, Classifier};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRun {
    pub range: Range<usize>,
    pub class: CharClass,
}

impl ClassRun {
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Iterator over the maximal class runs of a string.
#[derive(Debug, Clone)]
pub struct ClassRuns<'a> {
    text: &'a str,
    classifier: &'a Classifier,
    pos: usize,
}

impl Iterator for ClassRuns<'_> {
    type Item = ClassRun;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let class = self.classifier.classify(first);
        let len = chars
            .find(|&(_, c)| self.classifier.classify(c) != class)
            .map_or(rest.len(), |(i, _)| i);
        let start = self.pos;
        self.pos += len;
        Some(ClassRun {
            range: start..self.pos,
            class,
        })
    }
}

/// All maximal runs of `text`, in order.
pub fn class_runs<'a>(text: &'a str, classifier: &'a Classifier) -> ClassRuns<'a> {
    ClassRuns {
        text,
        classifier,
        pos: 0,
    }
}

/// Maximal runs of a single class.
pub fn runs_of<'a>(
    text: &'a str,
    classifier: &'a Classifier,
    class: CharClass,
) -> impl Iterator<Item = Range<usize>> + 'a {
    class_runs(text, classifier)
        .filter(move |run| run.class == class)
        .map(|run| run.range)
}
