// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::error::{ConfigWarning, SliderError};
use crate::position::{ControlGeometry, ControlInsets, Direction, Orientation};

/// Caller-supplied slider configuration.
///
/// The configuration is plain data and is treated as immutable for the
/// duration of any single operation. Build one with the chained `with_*`
/// setters:
///
/// ```rust
/// use understory_slider::{Orientation, SliderConfig};
///
/// let config = SliderConfig::new(0.0, 1.0)
///     .with_step(0.05)
///     .with_large_step(0.25)
///     .with_orientation(Orientation::Vertical);
///
/// assert_eq!(config.min_separation(), 0.0);
/// assert!(config.validate().unwrap().is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    /// Lowest selectable value; also the origin of the step grid.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
    /// Granularity of committed values.
    pub step: f64,
    /// Granularity of large keyboard adjustments (page up/down, shift+arrow).
    pub large_step: f64,
    /// Minimum number of steps between adjacent thumbs of a range slider.
    pub min_steps_between_values: u32,
    /// Axis the control is laid out along.
    pub orientation: Orientation,
    /// Text direction; mirrors horizontal controls when right-to-left.
    pub direction: Direction,
    /// Whether the control ignores user interaction.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            large_step: 10.0,
            min_steps_between_values: 0,
            orientation: Orientation::Horizontal,
            direction: Direction::Ltr,
            disabled: false,
        }
    }
}

impl SliderConfig {
    /// Creates a configuration over `min..=max` with default stepping.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Sets the step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the large step.
    #[must_use]
    pub fn with_large_step(mut self, large_step: f64) -> Self {
        self.large_step = large_step;
        self
    }

    /// Sets the minimum number of steps between adjacent thumbs.
    #[must_use]
    pub fn with_min_steps_between_values(mut self, steps: u32) -> Self {
        self.min_steps_between_values = steps;
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the text direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets whether the control is disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Minimum gap between adjacent thumbs, in domain units.
    #[must_use]
    pub fn min_separation(&self) -> f64 {
        self.step * f64::from(self.min_steps_between_values)
    }

    /// Clamps `value` into `[min, max]`.
    ///
    /// When the range is empty (`min >= max`) the result is `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    /// Builds control geometry with this configuration's orientation and direction.
    #[must_use]
    pub fn geometry(&self, bounds: Rect, insets: ControlInsets) -> ControlGeometry {
        ControlGeometry {
            bounds,
            orientation: self.orientation,
            direction: self.direction,
            insets,
        }
    }

    /// Checks the configuration.
    ///
    /// Returns an error for settings the engine cannot operate with, and the
    /// list of non-fatal warnings otherwise. Warnings are not logged here; see
    /// [`SliderConfig::check`].
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, SliderError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SliderError::InvalidStep(self.step));
        }
        if !self.large_step.is_finite() || self.large_step <= 0.0 {
            return Err(SliderError::InvalidLargeStep(self.large_step));
        }
        let mut warnings = Vec::new();
        if self.min >= self.max || self.min.is_nan() || self.max.is_nan() {
            warnings.push(ConfigWarning::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(warnings)
    }

    /// Validates and logs every warning.
    pub(crate) fn check(&self) -> Result<Vec<ConfigWarning>, SliderError> {
        let warnings = self.validate()?;
        for warning in &warnings {
            warning.log();
        }
        Ok(warnings)
    }
}
