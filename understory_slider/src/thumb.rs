// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing which thumb a pointer press should grab.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use crate::error::SliderError;

/// Returns the index of the thumb whose value is closest to `target`.
///
/// `sorted` must be in ascending order. Among equidistant thumbs the lower
/// index wins.
///
/// Thumbs pinned at `max` are treated specially: when `target` is at or above
/// `max`, a pinned thumb cannot move toward it, so it is passed over in favor
/// of the nearest thumb that can. Otherwise a thumb parked at the maximum would
/// keep the others from ever reaching the top of the range by pressing there.
/// If every thumb is pinned, the lowest one is returned.
///
/// ```rust
/// use understory_slider::closest_index;
///
/// assert_eq!(closest_index(&[10.0, 20.0, 30.0], 20.0, 100.0), Ok(1));
/// // The upper thumb is pinned at the maximum; the middle one moves instead.
/// assert_eq!(closest_index(&[0.0, 50.0, 100.0], 100.0, 100.0), Ok(1));
/// ```
pub fn closest_index(sorted: &[f64], target: f64, max: f64) -> Result<usize, SliderError> {
    let skip_pinned = target >= max && sorted.iter().any(|v| *v < max);
    let mut closest: Option<(usize, f64)> = None;
    for (index, value) in sorted.iter().copied().enumerate() {
        if skip_pinned && value >= max {
            continue;
        }
        let distance = (target - value).abs();
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((index, distance));
        }
    }
    closest.map(|(index, _)| index).ok_or(SliderError::NoThumbs)
}

#[cfg(test)]
mod tests {
    use super::closest_index;
    use crate::error::SliderError;

    #[test]
    fn exact_match_wins() {
        assert_eq!(closest_index(&[10.0, 20.0, 30.0], 20.0, 100.0), Ok(1));
    }

    #[test]
    fn nearest_by_distance() {
        assert_eq!(closest_index(&[10.0, 40.0], 22.0, 100.0), Ok(0));
        assert_eq!(closest_index(&[10.0, 40.0], 30.0, 100.0), Ok(1));
    }

    #[test]
    fn lower_index_wins_ties() {
        assert_eq!(closest_index(&[20.0, 20.0], 20.0, 100.0), Ok(0));
        assert_eq!(closest_index(&[10.0, 30.0], 20.0, 100.0), Ok(0));
    }

    #[test]
    fn thumb_pinned_at_max_yields_to_lower_thumbs() {
        assert_eq!(closest_index(&[0.0, 50.0, 100.0], 100.0, 100.0), Ok(1));
        assert_eq!(closest_index(&[0.0, 100.0, 100.0], 100.0, 100.0), Ok(0));
    }

    #[test]
    fn thumb_at_max_still_wins_below_max() {
        assert_eq!(closest_index(&[0.0, 50.0, 100.0], 95.0, 100.0), Ok(2));
        assert_eq!(closest_index(&[0.0, 50.0, 100.0], 70.0, 100.0), Ok(1));
    }

    #[test]
    fn all_thumbs_pinned_picks_the_lowest() {
        assert_eq!(closest_index(&[100.0, 100.0], 100.0, 100.0), Ok(0));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(closest_index(&[], 5.0, 100.0), Err(SliderError::NoThumbs));
    }
}
