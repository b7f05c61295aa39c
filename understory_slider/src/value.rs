// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider values and tolerant comparison.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use smallvec::SmallVec;

/// Inline storage for thumb values.
///
/// Most range sliders have two thumbs, so this avoids heap allocation in the
/// common case.
pub type Thumbs = SmallVec<[f64; 2]>;

/// Relative tolerance used by [`approx_eq`].
pub const VALUE_EPSILON: f64 = 1e-9;

/// Returns `true` if `a` and `b` are equal within [`VALUE_EPSILON`].
///
/// The tolerance is relative to the larger magnitude, but never smaller than
/// `VALUE_EPSILON` in absolute terms.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= VALUE_EPSILON * scale
}

/// The value of a slider.
///
/// A slider with one thumb carries a [`SliderValue::Single`]; a range slider
/// carries one scalar per thumb. Range values are kept in the order the
/// caller supplied them; use [`crate::normalize`] for the ascending view.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderValue {
    /// Single-thumb value.
    Single(f64),
    /// One value per thumb, possibly unsorted.
    Range(Thumbs),
}

impl SliderValue {
    /// Creates a range value from any sequence of scalars.
    pub fn range<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self::Range(values.into_iter().collect())
    }

    /// Returns `true` for multi-thumb values.
    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// Number of thumbs this value drives.
    #[must_use]
    pub fn thumb_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Range(values) => values.len(),
        }
    }

    /// Returns the scalars in stored order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Single(value) => core::slice::from_ref(value),
            Self::Range(values) => values,
        }
    }

    /// Returns `true` if any scalar is `NaN`.
    #[must_use]
    pub fn has_nan(&self) -> bool {
        self.as_slice().iter().any(|v| v.is_nan())
    }

    /// Tolerant structural equality.
    ///
    /// A single value never equals a range value, even a range of one.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Single(a), Self::Single(b)) => approx_eq(*a, *b),
            (Self::Range(a), Self::Range(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| approx_eq(*a, *b))
            }
            _ => false,
        }
    }
}

impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl<const N: usize> From<[f64; N]> for SliderValue {
    fn from(values: [f64; N]) -> Self {
        Self::range(values)
    }
}

#[cfg(test)]
mod tests {
    use super::{SliderValue, approx_eq};

    #[test]
    fn approx_eq_absorbs_float_drift() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(1e12 + 1e-4, 1e12));
        assert!(!approx_eq(1.0, 1.001));
    }

    #[test]
    fn single_and_range_never_compare_equal() {
        let single = SliderValue::Single(5.0);
        let range = SliderValue::from([5.0]);
        assert!(!single.approx_eq(&range));
        assert!(range.approx_eq(&SliderValue::from([5.0])));
    }

    #[test]
    fn range_equality_is_positional() {
        let a = SliderValue::from([10.0, 20.0]);
        let b = SliderValue::from([20.0, 10.0]);
        assert!(!a.approx_eq(&b));
        assert!(!a.approx_eq(&SliderValue::from([10.0, 20.0, 30.0])));
    }

    #[test]
    fn nan_detection_covers_every_thumb() {
        assert!(SliderValue::Single(f64::NAN).has_nan());
        assert!(SliderValue::from([1.0, f64::NAN]).has_nan());
        assert!(!SliderValue::from([1.0, 2.0]).has_nan());
    }
}
