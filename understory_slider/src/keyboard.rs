// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete keyboard adjustments.
//!
//! Mapping physical keys to a [`KeyAction`] (arrow keys, page up/down, home
//! and end, and how they mirror under right-to-left layouts) is left to the
//! embedder. This module only resolves an action into the raw value that
//! [`crate::SliderState::input_change`] should apply.

use crate::config::SliderConfig;
use crate::error::SliderError;

/// A discrete adjustment of one thumb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Move up by `step`.
    Increment,
    /// Move down by `step`.
    Decrement,
    /// Move up by `large_step`.
    IncrementLarge,
    /// Move down by `large_step`.
    DecrementLarge,
    /// Move to the lowest reachable value.
    ToMin,
    /// Move to the highest reachable value.
    ToMax,
}

/// Resolves `action` for thumb `thumb_index` of the ascending `sorted` values.
///
/// Step moves are clamped to `[min, max]`. For range sliders, `ToMin` and
/// `ToMax` stop at the neighboring thumb, keeping the minimum separation.
///
/// ```rust
/// use understory_slider::{KeyAction, SliderConfig, key_target};
///
/// let config = SliderConfig::default().with_min_steps_between_values(2);
/// assert_eq!(key_target(KeyAction::Increment, &[99.5], 0, &config, false), Ok(100.0));
/// assert_eq!(key_target(KeyAction::ToMax, &[10.0, 40.0], 0, &config, true), Ok(38.0));
/// ```
pub fn key_target(
    action: KeyAction,
    sorted: &[f64],
    thumb_index: usize,
    config: &SliderConfig,
    range: bool,
) -> Result<f64, SliderError> {
    let current = *sorted
        .get(thumb_index)
        .ok_or(SliderError::ThumbIndexOutOfRange {
            index: thumb_index,
            len: sorted.len(),
        })?;
    let sep = config.min_separation();
    let target = match action {
        KeyAction::Increment => (current + config.step).min(config.max),
        KeyAction::Decrement => (current - config.step).max(config.min),
        KeyAction::IncrementLarge => (current + config.large_step).min(config.max),
        KeyAction::DecrementLarge => (current - config.large_step).max(config.min),
        KeyAction::ToMin => match thumb_index.checked_sub(1) {
            Some(prev) if range => sorted[prev] + sep,
            _ => config.min,
        },
        KeyAction::ToMax => match sorted.get(thumb_index + 1) {
            Some(next) if range => next - sep,
            _ => config.max,
        },
    };
    Ok(target)
}
