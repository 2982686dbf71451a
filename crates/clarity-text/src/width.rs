//! Display width of text in terminal cells.
//!
//! All width decisions flow through `egc_width`, which operates on a single
//! grapheme cluster. `display_width` segments a string once and sums.
//!
//! The baseline comes from `unicode_width`; clusters carrying a pictographic,
//! regional-indicator or emoji-presentation signal are widened to 2 because
//! under-estimating causes drift when the painter positions the next run.
//!
//! A cluster is never narrower than its widest scalar, so extending a cluster
//! (a selector or joiner appended to it) never shrinks it.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

const EMOJI_PRESENTATION: char = '\u{FE0F}';

// Rough Extended Pictographic heuristic (main emoji blocks + misc symbols/dingbats).
fn is_extended_pictographic(c: char) -> bool {
    ('\u{1F300}'..='\u{1FAFF}').contains(&c) || ('\u{2600}'..='\u{27BF}').contains(&c)
}

/// Column width of one grapheme cluster. Empty input returns 0.
#[inline]
pub fn egc_width(egc: &str) -> u16 {
    if egc.is_empty() {
        return 0;
    }
    if egc.is_ascii() {
        // Control characters still occupy a cell once painted as-is.
        return 1;
    }
    let signal = egc.chars().any(|c| {
        is_extended_pictographic(c) || is_regional_indicator(c) || c == EMOJI_PRESENTATION
    });
    if signal {
        return 2;
    }
    let widest_scalar = egc.chars().filter_map(UnicodeWidthChar::width).max().unwrap_or(0);
    UnicodeWidthStr::width(egc).max(widest_scalar).clamp(1, 2) as u16
}

/// Total column width of a string, summed over its grapheme clusters.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(|g| usize::from(egc_width(g))).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(egc_width("a"), 1);
        assert_eq!(display_width("Ab3!"), 4);
    }

    #[test]
    fn empty() {
        assert_eq!(egc_width(""), 0);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn wide_cjk() {
        assert_eq!(egc_width("界"), 2);
        assert_eq!(display_width("a界b"), 4);
    }

    #[test]
    fn emoji_basic() {
        assert_eq!(egc_width("😀"), 2);
    }

    #[test]
    fn combining_acute() {
        assert_eq!(egc_width("e\u{0301}"), 1);
        assert_eq!(display_width("e\u{0301}x"), 2);
    }

    #[test]
    fn text_selector_keeps_wide_base() {
        for base in ["⌚", "⭐", "🀄"] {
            assert_eq!(egc_width(base), 2, "{base:?}");
            let with_selector = format!("{base}\u{FE0E}");
            assert_eq!(egc_width(&with_selector), 2, "{with_selector:?}");
        }
    }

    #[test]
    fn emoji_presentation_selector_widens() {
        assert_eq!(egc_width("\u{2139}\u{FE0F}"), 2);
    }

    #[test]
    fn emoji_flag() {
        assert_eq!(egc_width("🇺🇸"), 2);
    }
}
