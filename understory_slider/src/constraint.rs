// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping thumbs apart.
//!
//! Adjacent thumbs of a range slider must stay at least
//! `step * min_steps_between_values` apart. Thumb moves go through
//! [`clamp_to_neighbors`], which can never produce a crossing; values that
//! arrive from outside (controlled input) bypass it and are checked with
//! [`validate_separation`] instead.

use crate::error::SliderError;
use crate::value::{Thumbs, approx_eq};

/// Clamps `candidate` for thumb `index` against its neighbors in `sorted`.
///
/// The result lies in `[sorted[index - 1] + sep, sorted[index + 1] - sep]`
/// where `sep = step * min_steps_between_values`, with the bounds open at the
/// ends of the sequence. With `min_steps_between_values == 0` thumbs may touch
/// but never cross. If the neighbors are already closer than `2 * sep` the
/// lower bound wins.
///
/// ```rust
/// use understory_slider::clamp_to_neighbors;
///
/// // Dragging the first thumb past the second stops one step short of it.
/// assert_eq!(clamp_to_neighbors(&[20.0, 50.0], 0, 60.0, 5.0, 1), Ok(45.0));
/// ```
pub fn clamp_to_neighbors(
    sorted: &[f64],
    index: usize,
    candidate: f64,
    step: f64,
    min_steps_between_values: u32,
) -> Result<f64, SliderError> {
    if index >= sorted.len() {
        return Err(SliderError::ThumbIndexOutOfRange {
            index,
            len: sorted.len(),
        });
    }
    let sep = step * f64::from(min_steps_between_values);
    let lower = index
        .checked_sub(1)
        .map_or(f64::NEG_INFINITY, |prev| sorted[prev] + sep);
    let upper = sorted
        .get(index + 1)
        .map_or(f64::INFINITY, |next| next - sep);
    Ok(candidate.min(upper).max(lower))
}

/// Returns `true` if every adjacent pair of `sorted` is at least
/// `step * min_steps_between_values` apart.
///
/// Distances are compared with the crate's value tolerance, so `0.3 - 0.2`
/// satisfies a required gap of `0.1`. Sequences with fewer than two values are
/// always valid.
#[must_use]
pub fn validate_separation(sorted: &[f64], step: f64, min_steps_between_values: u32) -> bool {
    let required = step * f64::from(min_steps_between_values);
    sorted.windows(2).all(|pair| {
        let distance = pair[1] - pair[0];
        distance >= required || approx_eq(distance, required)
    })
}

/// Returns a copy of `sorted` with slot `index` replaced by `value`, in
/// ascending order.
pub fn replace_at(sorted: &[f64], index: usize, value: f64) -> Result<Thumbs, SliderError> {
    let mut out: Thumbs = sorted.iter().copied().collect();
    let slot = out
        .get_mut(index)
        .ok_or(SliderError::ThumbIndexOutOfRange {
            index,
            len: sorted.len(),
        })?;
    *slot = value;
    out.sort_by(f64::total_cmp);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{clamp_to_neighbors, replace_at, validate_separation};
    use crate::error::SliderError;

    #[test]
    fn first_thumb_stops_short_of_second() {
        assert_eq!(clamp_to_neighbors(&[20.0, 50.0], 0, 60.0, 5.0, 1), Ok(45.0));
    }

    #[test]
    fn last_thumb_stops_short_of_previous() {
        assert_eq!(clamp_to_neighbors(&[20.0, 50.0], 1, 10.0, 5.0, 2), Ok(30.0));
    }

    #[test]
    fn zero_separation_lets_thumbs_touch() {
        assert_eq!(clamp_to_neighbors(&[20.0, 50.0], 0, 80.0, 5.0, 0), Ok(50.0));
    }

    #[test]
    fn ends_are_unbounded() {
        assert_eq!(clamp_to_neighbors(&[20.0, 50.0], 0, -40.0, 1.0, 3), Ok(-40.0));
        assert_eq!(clamp_to_neighbors(&[20.0, 50.0], 1, 400.0, 1.0, 3), Ok(400.0));
        assert_eq!(clamp_to_neighbors(&[20.0], 0, 400.0, 1.0, 3), Ok(400.0));
    }

    #[test]
    fn neighbor_at_zero_still_bounds() {
        // A neighbor bound of exactly zero is a real bound, not a missing one.
        assert_eq!(clamp_to_neighbors(&[-5.0, 5.0], 1, -10.0, 5.0, 1), Ok(0.0));
    }

    #[test]
    fn middle_thumb_is_boxed_in() {
        let values = [10.0, 30.0, 50.0];
        assert_eq!(clamp_to_neighbors(&values, 1, 0.0, 2.0, 1), Ok(12.0));
        assert_eq!(clamp_to_neighbors(&values, 1, 70.0, 2.0, 1), Ok(48.0));
        assert_eq!(clamp_to_neighbors(&values, 1, 33.0, 2.0, 1), Ok(33.0));
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        assert_eq!(
            clamp_to_neighbors(&[1.0], 1, 0.0, 1.0, 0),
            Err(SliderError::ThumbIndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn separation_is_checked_pairwise() {
        assert!(validate_separation(&[0.0, 5.0, 10.0], 5.0, 1));
        assert!(!validate_separation(&[0.0, 5.0, 9.0], 5.0, 1));
        assert!(validate_separation(&[0.2, 0.3], 0.1, 1));
        assert!(validate_separation(&[7.0], 5.0, 4));
        assert!(validate_separation(&[], 5.0, 4));
    }

    #[test]
    fn replace_at_keeps_ascending_order() {
        assert_eq!(
            replace_at(&[10.0, 20.0, 30.0], 0, 25.0).unwrap().as_slice(),
            &[20.0, 25.0, 30.0]
        );
        assert!(replace_at(&[10.0], 2, 0.0).is_err());
    }
}
