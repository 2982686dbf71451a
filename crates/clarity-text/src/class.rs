//! Character classes used for coloring.
//!
//! Every `char` maps to exactly one of four classes. `Digit`, `Lower` and
//! `Upper` are fixed ASCII sets; `Symbol` is the complement, so punctuation,
//! whitespace and anything outside ASCII all land there.
//!
//! Membership is resolved through a 128-entry table built once per
//! `Classifier`. No pattern matching and no locale-dependent case folding is
//! involved.

use std::fmt;

/// One of the four mutually exclusive character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Lower,
    Upper,
    Symbol,
}

impl CharClass {
    /// All classes, in declaration order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Digit,
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Symbol,
    ];

    /// Order in which classes are re-tagged after the text is replaced.
    pub const RETAG_ORDER: [CharClass; 4] = [
        CharClass::Symbol,
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
    ];

    /// Stable dense index, usable for per-class arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CharClass::Digit => 0,
            CharClass::Lower => 1,
            CharClass::Upper => 2,
            CharClass::Symbol => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CharClass::Digit => "digit",
            CharClass::Lower => "lower",
            CharClass::Upper => "upper",
            CharClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const DIGITS: &str = "0123456789";
pub const UPPER_ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_ALPHA: &str = "abcdefghijklmnopqrstuvwxyz";
/// Historical lowercase set. It omits `n`, which therefore classifies as
/// `Symbol` when this set is selected.
pub const LOWER_ALPHA_LEGACY: &str = "abcdefghijklmopqrstuvwxyz";

/// Which lowercase membership set a `Classifier` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LowercaseSet {
    /// All 26 letters `a`..=`z`.
    #[default]
    Ascii,
    /// The 25-letter set without `n`.
    Legacy,
}

impl LowercaseSet {
    pub const fn letters(self) -> &'static str {
        match self {
            LowercaseSet::Ascii => LOWER_ALPHA,
            LowercaseSet::Legacy => LOWER_ALPHA_LEGACY,
        }
    }
}

/// Precompiled membership table mapping ASCII code points to classes.
#[derive(Clone, PartialEq, Eq)]
pub struct Classifier {
    table: [CharClass; 128],
    lowercase: LowercaseSet,
}

impl Classifier {
    pub fn new(lowercase: LowercaseSet) -> Self {
        let mut table = [CharClass::Symbol; 128];
        for (set, class) in [
            (DIGITS, CharClass::Digit),
            (UPPER_ALPHA, CharClass::Upper),
            (lowercase.letters(), CharClass::Lower),
        ] {
            for b in set.bytes() {
                table[usize::from(b)] = class;
            }
        }
        Self { table, lowercase }
    }

    pub fn lowercase_set(&self) -> LowercaseSet {
        self.lowercase
    }

    /// Classify a single character. Total over `char`.
    #[inline]
    pub fn classify(&self, c: char) -> CharClass {
        if c.is_ascii() {
            self.table[c as usize]
        } else {
            CharClass::Symbol
        }
    }

    /// True when `c` belongs to `class`.
    #[inline]
    pub fn is(&self, c: char, class: CharClass) -> bool {
        self.classify(c) == class
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(LowercaseSet::default())
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("lowercase", &self.lowercase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_sets() {
        let c = Classifier::default();
        for ch in DIGITS.chars() {
            assert_eq!(c.classify(ch), CharClass::Digit);
        }
        for ch in UPPER_ALPHA.chars() {
            assert_eq!(c.classify(ch), CharClass::Upper);
        }
        for ch in LOWER_ALPHA.chars() {
            assert_eq!(c.classify(ch), CharClass::Lower);
        }
    }

    #[test]
    fn complement_is_symbol() {
        let c = Classifier::default();
        for ch in ['!', ' ', '\t', '\n', '~', '@', '[', '`', '{', '\0', '\u{7f}'] {
            assert_eq!(c.classify(ch), CharClass::Symbol, "{ch:?}");
        }
    }

    #[test]
    fn non_ascii_is_symbol() {
        let c = Classifier::default();
        for ch in ['é', 'ß', 'Ω', '٣', '界', '😀', 'ｎ'] {
            assert_eq!(c.classify(ch), CharClass::Symbol, "{ch:?}");
        }
    }

    #[test]
    fn legacy_set_drops_n_only() {
        let legacy = Classifier::new(LowercaseSet::Legacy);
        assert_eq!(legacy.classify('n'), CharClass::Symbol);
        assert_eq!(legacy.classify('N'), CharClass::Upper);
        let lowers = (b'a'..=b'z')
            .filter(|b| legacy.classify(char::from(*b)) == CharClass::Lower)
            .count();
        assert_eq!(lowers, 25);
        assert_eq!(LOWER_ALPHA_LEGACY.len(), 25);
    }

    #[test]
    fn every_ascii_byte_has_one_class() {
        let c = Classifier::default();
        let mut counts = [0usize; 4];
        for b in 0u8..128 {
            counts[c.classify(char::from(b)).index()] += 1;
        }
        assert_eq!(counts, [10, 26, 26, 128 - 62]);
    }

    #[test]
    fn retag_order_covers_all_classes() {
        let mut seen = CharClass::RETAG_ORDER.map(CharClass::index);
        seen.sort_unstable();
        assert_eq!(seen, [0, 1, 2, 3]);
    }
}
