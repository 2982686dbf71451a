//! Property tests for classification and run segmentation.

use clarity_text::{CharClass, Classifier, LowercaseSet, class_runs};
use proptest::prelude::*;

fn classifier() -> impl Strategy<Value = Classifier> {
    prop_oneof![
        Just(Classifier::new(LowercaseSet::Ascii)),
        Just(Classifier::new(LowercaseSet::Legacy)),
    ]
}

proptest! {
    // Total and deterministic: the same char always yields the same single class.
    #[test]
    fn classify_is_deterministic(c in any::<char>(), cls in classifier()) {
        let a = cls.classify(c);
        let b = cls.classify(c);
        prop_assert_eq!(a, b);
        prop_assert_eq!(CharClass::ALL.iter().filter(|k| cls.is(c, **k)).count(), 1);
    }

    // Runs tile the whole string with no gaps and no overlap.
    #[test]
    fn runs_tile_input(s in "\\PC{0,64}", cls in classifier()) {
        let mut next = 0usize;
        for run in class_runs(&s, &cls) {
            prop_assert_eq!(run.range.start, next);
            prop_assert!(!run.is_empty());
            next = run.range.end;
        }
        prop_assert_eq!(next, s.len());
    }

    // Every char inside a run has the run's class, and neighbours differ.
    #[test]
    fn runs_are_uniform_and_maximal(s in "[ -~]{0,64}", cls in classifier()) {
        let runs: Vec<_> = class_runs(&s, &cls).collect();
        for run in &runs {
            for c in s[run.range.clone()].chars() {
                prop_assert_eq!(cls.classify(c), run.class);
            }
        }
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].class, pair[1].class);
        }
    }
}
