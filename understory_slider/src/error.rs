// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors and configuration warnings.

use alloc::vec::Vec;

/// Errors reported by slider operations.
///
/// These are programming or configuration errors that cannot be recovered by
/// clamping. Everything else (out-of-range values, `NaN` candidates, unchanged
/// values) is absorbed silently or reported as a [`ConfigWarning`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SliderError {
    /// A thumb operation was given an empty value sequence.
    #[error("slider has no thumbs")]
    NoThumbs,
    /// A thumb index does not address any slot of the value sequence.
    #[error("thumb index {index} is out of range for {len} thumbs")]
    ThumbIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of thumbs in the sequence.
        len: usize,
    },
    /// `step` must be finite and strictly positive.
    #[error("slider step must be finite and greater than zero, got {0}")]
    InvalidStep(f64),
    /// `large_step` must be finite and strictly positive.
    #[error("slider large step must be finite and greater than zero, got {0}")]
    InvalidLargeStep(f64),
}

/// A non-fatal configuration problem.
///
/// Warnings are logged through `tracing` when detected and also returned to
/// the caller, which keeps operating on the best available value.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigWarning {
    /// `min` is not strictly less than `max`.
    EmptyRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// Externally supplied values are closer together than the configured
    /// minimum separation allows.
    SeparationViolated {
        /// The supplied values, in ascending order.
        values: Vec<f64>,
        /// Required gap between adjacent values, in domain units.
        required: f64,
    },
    /// A controlled value was fed into a store that owns its value.
    ModeMismatch,
}

impl ConfigWarning {
    pub(crate) fn log(&self) {
        match self {
            Self::EmptyRange { min, max } => {
                tracing::warn!(min, max, "slider `max` must be greater than `min`");
            }
            Self::SeparationViolated { values, required } => {
                tracing::warn!(
                    ?values,
                    required,
                    "slider values violate the minimum separation between thumbs"
                );
            }
            Self::ModeMismatch => {
                tracing::warn!(
                    "slider is uncontrolled; ignoring externally supplied value (the mode is fixed at construction)"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::SliderError;

    #[test]
    fn error_messages_name_the_problem() {
        let err = SliderError::ThumbIndexOutOfRange { index: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "thumb index 3 is out of range for 2 thumbs"
        );
        assert_eq!(SliderError::NoThumbs.to_string(), "slider has no thumbs");
    }
}
