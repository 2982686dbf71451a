//! Character classification and text metrics for the clarity view.
//!
//! `class` maps characters onto the four coloring classes, `runs` groups a
//! string into maximal same-class runs and `width` reports terminal column
//! widths used by the cell measurer.

pub mod class;
pub mod runs;
pub mod width;

pub use class::{CharClass, Classifier, LowercaseSet};
pub use runs::{ClassRun, class_runs, runs_of};
pub use width::{display_width, egc_width};
