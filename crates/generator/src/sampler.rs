//! Expectation-preserving conversion of an average rate into a count.

use crate::rng::RecordRng;

/// Converts `rate` into an integer count using one uniform `draw` in `[0, 1)`.
///
/// The integer part is always returned; the fractional part adds one more
/// with matching probability, so the count's expectation equals `rate`.
/// Negative or non-finite rates sample to zero.
pub fn sample(rate: f64, draw: f64) -> u32 {
    if !rate.is_finite() || rate < 0.0 {
        return 0;
    }

    let base = rate.floor();
    let fraction = rate - base;
    // `as` saturates at u32::MAX for absurdly large rates.
    let base = base as u32;
    if draw < fraction {
        base.saturating_add(1)
    } else {
        base
    }
}

/// Samples a count from the next draw of `rng`.
///
/// Exactly one draw is consumed regardless of `rate`, so the rest of the
/// stream lines up the same way for every rate.
pub fn sample_from(rate: f64, rng: &mut RecordRng) -> u32 {
    let draw = rng.uniform01();
    sample(rate, draw)
}
