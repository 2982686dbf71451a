//! Demo helpers: random sample strings and the status line.

use clarity_render::{ClarityView, TextMeasurer};
use rand::Rng;

/// Length of generated sample strings.
pub const RANDOM_LEN: usize = 10;

/// Printable ASCII range sampled by `random_text` (`!` through `~`).
pub const PRINTABLE: std::ops::RangeInclusive<u8> = 33..=126;

/// A string of `RANDOM_LEN` printable ASCII characters.
pub fn random_text<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..RANDOM_LEN)
        .map(|_| char::from(rng.gen_range(PRINTABLE)))
        .collect()
}

pub fn status_line<M: TextMeasurer>(view: &ClarityView<M>) -> String {
    let size = view.desired_size();
    format!(
        "size {} | desired {}x{} | g: generate  +/-: size  q: quit",
        view.text_size(),
        size.width,
        size.height
    )
}
