// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping pointer positions onto slider values.
//!
//! The control is described by a [`ControlGeometry`] snapshot: its bounding
//! box, orientation, text direction, and the insets (border plus padding) at
//! the start and end of the track. [`finger_state`] turns a pointer position
//! into a fraction of the usable track length and from there into a stepped
//! value, resolving and constraining the grabbed thumb for range sliders.
//!
//! Fractions grow left to right for left-to-right horizontal controls, right
//! to left for right-to-left ones, and bottom to top for vertical controls.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_slider::{ControlInsets, SliderConfig, ThumbCapture, finger_state};
//!
//! let config = SliderConfig::default();
//! let geometry = config.geometry(Rect::new(0.0, 0.0, 200.0, 20.0), ControlInsets::default());
//!
//! let finger = finger_state(
//!     Some(Point::new(50.0, 10.0)),
//!     Some(&geometry),
//!     &config,
//!     &[0.0],
//!     false,
//!     0.0,
//!     ThumbCapture::Closest,
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(finger.value.as_slice(), &[25.0]);
//! assert_eq!(finger.fraction, 0.25);
//! ```

use kurbo::{Point, Rect};

use crate::config::SliderConfig;
use crate::constraint::{clamp_to_neighbors, replace_at};
use crate::error::SliderError;
use crate::step::round_to_step;
use crate::thumb::closest_index;
use crate::value::SliderValue;

/// Axis a slider is laid out along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Values grow along the inline axis.
    #[default]
    Horizontal,
    /// Values grow from bottom to top.
    Vertical,
}

/// Text direction of the surrounding layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left; horizontal sliders are mirrored.
    Rtl,
}

/// Non-interactive space at the two ends of the track.
///
/// `start` is the inline-start side for horizontal controls (left in
/// left-to-right layouts, right in right-to-left ones) and the top for
/// vertical controls; `end` is the opposite side.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ControlInsets {
    /// Inset at the start of the axis.
    pub start: f64,
    /// Inset at the end of the axis.
    pub end: f64,
}

impl ControlInsets {
    /// Creates insets from explicit start and end lengths.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Combines border and padding widths on each side of the axis.
    #[must_use]
    pub fn from_border_padding(
        border_start: f64,
        padding_start: f64,
        border_end: f64,
        padding_end: f64,
    ) -> Self {
        Self {
            start: border_start + padding_start,
            end: border_end + padding_end,
        }
    }
}

/// Snapshot of the interactive surface used for position mapping.
///
/// Geometry is measured by the embedder and may be cached for the length of a
/// drag; it is never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlGeometry {
    /// Bounding box of the control in the same space as pointer positions.
    pub bounds: Rect,
    /// Axis the track runs along.
    pub orientation: Orientation,
    /// Text direction; only affects horizontal controls.
    pub direction: Direction,
    /// Border and padding at each end of the track.
    pub insets: ControlInsets,
}

impl ControlGeometry {
    /// Length of the track along its axis, excluding insets.
    #[must_use]
    pub fn usable_length(&self) -> f64 {
        let extent = match self.orientation {
            Orientation::Horizontal => self.bounds.width(),
            Orientation::Vertical => self.bounds.height(),
        };
        extent - self.insets.start - self.insets.end
    }

    fn is_rtl_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal && self.direction == Direction::Rtl
    }

    /// Unclamped fraction of the track at `position`, before any thumb offset.
    fn raw_fraction(&self, position: Point, length: f64) -> f64 {
        let Rect { x0, y1, x1, .. } = self.bounds;
        match self.orientation {
            Orientation::Vertical => (y1 - self.insets.end - position.y) / length,
            Orientation::Horizontal => match self.direction {
                Direction::Ltr => (position.x - x0 - self.insets.start) / length,
                Direction::Rtl => (x1 - self.insets.start - position.x) / length,
            },
        }
    }

    /// Point on the track center line at `fraction` of the usable length.
    ///
    /// This is the inverse of the mapping used by [`finger_state`] and is
    /// where a renderer should center a thumb.
    #[must_use]
    pub fn point_at_fraction(&self, fraction: f64) -> Point {
        let Rect { x0, x1, y1, .. } = self.bounds;
        let along = fraction * self.usable_length();
        let center = self.bounds.center();
        match self.orientation {
            Orientation::Vertical => Point::new(center.x, y1 - self.insets.end - along),
            Orientation::Horizontal => match self.direction {
                Direction::Ltr => Point::new(x0 + self.insets.start + along, center.y),
                Direction::Rtl => Point::new(x1 - self.insets.start - along, center.y),
            },
        }
    }
}

/// Signed offset, as a fraction of the track, between where a thumb was
/// grabbed and its center.
///
/// Passing this to [`finger_state`] for the rest of the drag keeps the thumb
/// from jumping so that its center sits under the pointer. The sign already
/// accounts for vertical axes; [`finger_state`] flips it for right-to-left
/// horizontal layouts.
#[must_use]
pub fn thumb_offset(geometry: &ControlGeometry, grab: Point, thumb_center: Point) -> f64 {
    let length = geometry.usable_length();
    if length <= 0.0 {
        return 0.0;
    }
    match geometry.orientation {
        Orientation::Horizontal => (thumb_center.x - grab.x) / length,
        Orientation::Vertical => (grab.y - thumb_center.y) / length,
    }
}

/// How [`finger_state`] chooses the thumb to move in a range slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThumbCapture {
    /// Resolve the closest thumb to the pointer (interaction start).
    Closest,
    /// Keep moving the thumb captured when the interaction started.
    Captured(usize),
}

/// Result of mapping a pointer position.
#[derive(Clone, Debug, PartialEq)]
pub struct FingerState {
    /// Candidate value: a single value, or the full ascending sequence with
    /// the moved thumb replaced.
    pub value: SliderValue,
    /// Fraction of the track under the pointer, in `[0, 1]`.
    pub fraction: f64,
    /// Index of the moved thumb in the ascending sequence.
    pub thumb_index: usize,
}

/// Maps a pointer position to a candidate slider value.
///
/// Returns `Ok(None)` when there is no position, no geometry (the control is
/// not mounted or measured), or the geometry has no usable length.
///
/// `sorted` is the ascending view of the current value. For single-thumb
/// sliders (`range == false`) the stepped, clamped value is returned directly.
/// For range sliders the thumb is chosen by `capture`, clamped against its
/// neighbors and the minimum separation, and spliced into a copy of `sorted`.
///
/// `thumb_offset` is the fraction returned by [`thumb_offset`] when the drag
/// started on a thumb, or `0.0`.
pub fn finger_state(
    position: Option<Point>,
    geometry: Option<&ControlGeometry>,
    config: &SliderConfig,
    sorted: &[f64],
    range: bool,
    thumb_offset: f64,
    capture: ThumbCapture,
) -> Result<Option<FingerState>, SliderError> {
    let (Some(position), Some(geometry)) = (position, geometry) else {
        return Ok(None);
    };
    let length = geometry.usable_length();
    if length <= 0.0 || length.is_nan() {
        tracing::debug!(length, "slider control has no usable length");
        return Ok(None);
    }

    let offset = if geometry.is_rtl_horizontal() {
        -thumb_offset
    } else {
        thumb_offset
    };
    let fraction = (geometry.raw_fraction(position, length) + offset).clamp(0.0, 1.0);

    let raw = (config.max - config.min) * fraction + config.min;
    let value = config.clamp(round_to_step(raw, config.step, config.min));

    if !range {
        return Ok(Some(FingerState {
            value: SliderValue::Single(value),
            fraction,
            thumb_index: 0,
        }));
    }

    let thumb_index = match capture {
        ThumbCapture::Closest => closest_index(sorted, value, config.max)?,
        ThumbCapture::Captured(index) => index,
    };
    let value = clamp_to_neighbors(
        sorted,
        thumb_index,
        value,
        config.step,
        config.min_steps_between_values,
    )?;
    let value = config.clamp(value);

    Ok(Some(FingerState {
        value: SliderValue::Range(replace_at(sorted, thumb_index, value)?),
        fraction,
        thumb_index,
    }))
}
