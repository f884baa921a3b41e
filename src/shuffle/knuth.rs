//! Fisher-Yates (Knuth) shuffle over an `Lcg`.

use super::lcg::Lcg;

/// Shuffle `data` in place.
///
/// Walks `i` from `len - 1` down to `1` and swaps with
/// `j = rng.bounded_next(i + 1)`. Slices of length 0 or 1 are left untouched
/// and draw nothing from `rng`.
pub fn knuth_shuffle<T>(data: &mut [T], rng: &mut Lcg) {
    for i in (1..data.len()).rev() {
        let j = rng.bounded_next((i + 1) as u64) as usize;
        data.swap(i, j);
    }
}
