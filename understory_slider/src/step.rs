// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step snapping and canonical ordering.
//!
//! Values are snapped with a single multiplication instead of accumulating
//! `step` repeatedly, so the result never drifts with distance from `min`:
//!
//! ```rust
//! use understory_slider::round_to_step;
//!
//! assert_eq!(round_to_step(0.3000000004, 0.1, 0.0), 0.3);
//! assert_eq!(round_to_step(17.0, 5.0, 2.0), 17.0);
//! assert_eq!(round_to_step(19.4, 5.0, 2.0), 17.0);
//! ```

use core::fmt::{self, Write as _};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::config::SliderConfig;
use crate::value::{SliderValue, Thumbs};

/// Most decimal places considered when trimming float noise.
const MAX_DECIMALS: u32 = 15;

/// Counts the digits after the decimal point of a formatted number.
#[derive(Default)]
struct FractionDigits {
    after_point: bool,
    digits: u32,
}

impl fmt::Write for FractionDigits {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if c == '.' {
                self.after_point = true;
            } else if self.after_point && c.is_ascii_digit() {
                self.digits = self.digits.saturating_add(1);
            }
        }
        Ok(())
    }
}

/// Number of decimal places in the shortest representation of `value` that
/// round-trips.
fn decimal_precision(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let mut counter = FractionDigits::default();
    if write!(counter, "{value}").is_err() {
        return 0;
    }
    counter.digits
}

fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let mut scale = 1.0_f64;
    for _ in 0..decimals {
        scale *= 10.0;
    }
    (value * scale).round() / scale
}

/// Snaps `raw` to the nearest value of the form `min + k * step`.
///
/// Halfway cases round away from zero in units of `k` (the behavior of
/// [`f64::round`]). The result is then trimmed to the decimal precision of
/// `step` and `min`, so a step of `0.1` yields `0.3` rather than
/// `0.30000000000000004`.
///
/// The result is not clamped; callers clamp to `[min, max]` afterwards.
#[must_use]
pub fn round_to_step(raw: f64, step: f64, min: f64) -> f64 {
    let k = ((raw - min) / step).round();
    let nearest = k * step + min;
    let decimals = decimal_precision(step).max(decimal_precision(min));
    if decimals > MAX_DECIMALS {
        return nearest;
    }
    round_to_decimals(nearest, decimals)
}

/// Returns the ascending, presentation-order view of `value`.
///
/// A single value is clamped into `[min, max]`. Range values are copied and
/// sorted but not clamped, so a controlled caller can observe exactly what it
/// supplied. Already-sorted input comes back unchanged.
#[must_use]
pub fn normalize(value: &SliderValue, config: &SliderConfig) -> Thumbs {
    match value {
        SliderValue::Single(v) => core::iter::once(config.clamp(*v)).collect(),
        SliderValue::Range(values) => {
            let mut sorted = values.clone();
            sorted.sort_by(f64::total_cmp);
            sorted
        }
    }
}

/// Fraction of the way `value` lies from `min` to `max`, clamped to `[0, 1]`.
///
/// This is the inverse of the value mapping performed by
/// [`crate::finger_state`] and is what renderers use to place thumbs. An empty
/// range maps everything to `0`.
#[must_use]
pub fn value_to_fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

/// Fractions for every thumb of `values`, in the given order.
#[must_use]
pub fn fractions(values: &[f64], min: f64, max: f64) -> Thumbs {
    values
        .iter()
        .map(|v| value_to_fraction(*v, min, max))
        .collect()
}
