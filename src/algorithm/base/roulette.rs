use crate::utils::{Error, Result};

/// Roulette-wheel pick: the first index whose cumulative weight exceeds
/// `u * sum(weights)`, for a uniform draw `u` in [0, 1).
///
/// Zero weights are never picked. `from` only labels the error.
pub fn spin(weights: &[f64], u: f64, from: usize) -> Result<usize> {
    debug_assert!((0.0..1.0).contains(&u));
    let degenerate = || Error::InvalidDistribution { node: from, weights: weights.to_vec() };
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(degenerate());
    }
    let sum: f64 = weights.iter().sum();
    if !(sum > 0.0 && sum.is_finite()) {
        return Err(degenerate());
    }
    let target = u * sum;
    let mut accumulation = 0.0;
    let mut last = None;
    for (i, &w) in weights.iter().enumerate() {
        if w == 0.0 {
            continue;
        }
        accumulation += w;
        if target < accumulation {
            return Ok(i);
        }
        last = Some(i);
    }
    // rounding left the target past the final bucket
    last.ok_or_else(degenerate)
}
