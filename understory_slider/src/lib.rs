// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: headless value resolution for sliders.
//!
//! This crate turns raw input on a slider control (a pointer position, a key
//! press, a typed value) into a valid value for one or more thumbs. It knows
//! nothing about rendering, focus rings, or accessibility trees: the embedder
//! measures the control, maps platform events to calls on this crate, and
//! draws thumbs where [`SliderState::fractions`] says they are.
//!
//! The pipeline is built from small pure functions that can be used on their
//! own:
//!
//! - [`round_to_step`] snaps a raw value onto the grid `min + k * step`.
//! - [`normalize`] and [`value_to_fraction`] turn stored values into an
//!   ascending sequence and track fractions.
//! - [`closest_index`] picks the thumb a pointer press should grab.
//! - [`clamp_to_neighbors`] and [`validate_separation`] keep thumbs ordered and
//!   apart by `min_steps_between_values * step`.
//! - [`finger_state`] maps a pointer position over a [`ControlGeometry`] to a
//!   candidate value, honoring orientation, text direction, insets, and the
//!   offset at which a thumb was grabbed.
//! - [`key_target`] resolves a [`KeyAction`] into a raw target value.
//!
//! [`SliderState`] combines them with a [`ValueStore`] and a per-drag
//! [`DragSession`], reporting accepted changes and commits through a
//! [`SliderObserver`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_slider::{
//!     ChangeReason, ControlInsets, SliderConfig, SliderEvent, SliderState, SliderValue,
//! };
//!
//! let config = SliderConfig::default()
//!     .with_step(5.0)
//!     .with_min_steps_between_values(1);
//! let mut slider = SliderState::uncontrolled(config, SliderValue::from([20.0, 50.0])).unwrap();
//! slider.set_geometry(Some(
//!     config.geometry(Rect::new(0.0, 0.0, 100.0, 10.0), ControlInsets::default()),
//! ));
//!
//! // Grab the lower thumb and drag it past the upper one.
//! let mut events: Vec<SliderEvent> = Vec::new();
//! slider.pointer_down(Point::new(20.0, 5.0), Some(Point::new(20.0, 5.0)), &mut events).unwrap();
//! slider.pointer_move(Point::new(60.0, 5.0), &mut events).unwrap();
//! slider.pointer_up(&mut events);
//!
//! // The thumb stops one step short of its neighbor.
//! assert_eq!(slider.values().as_slice(), &[45.0, 50.0]);
//! assert_eq!(
//!     events.last(),
//!     Some(&SliderEvent::Commit {
//!         value: SliderValue::from([45.0, 50.0]),
//!         reason: ChangeReason::PointerUp,
//!     })
//! );
//! ```
//!
//! ## Controlled and uncontrolled values
//!
//! An **uncontrolled** slider owns its value. A **controlled** slider only
//! proposes changes through [`SliderObserver::on_change`]; the embedder decides
//! whether to accept them and feeds the accepted value back with
//! [`SliderState::sync_controlled`]. Commits always carry the last value
//! proposed during the interaction, so an embedder that applies changes late
//! still commits what the user saw.
//!
//! ## Numeric tolerance
//!
//! Values are compared with a relative tolerance of [`VALUE_EPSILON`] (see
//! [`approx_eq`]). Rounding also trims results to the number of decimal places
//! in `step` and `min`, so a step of `0.1` yields `0.3` rather than
//! `0.30000000000000004`.
//!
//! ## Logging
//!
//! Configuration problems that the engine works around (an empty range, thumbs
//! supplied closer than the minimum separation, a controlled value fed into an
//! uncontrolled slider) are reported through [`tracing`] at `warn` level and
//! returned as [`ConfigWarning`]s. Dropped candidates log at `debug`, drag
//! session boundaries at `trace`.
//!
//! ## Features
//!
//! - `std` (default): enables `std` in Kurbo, `thiserror`, and `tracing`.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod constraint;
mod error;
mod keyboard;
mod observer;
mod position;
mod session;
mod state;
mod step;
mod store;
mod thumb;
mod value;

pub use config::SliderConfig;
pub use constraint::{clamp_to_neighbors, replace_at, validate_separation};
pub use error::{ConfigWarning, SliderError};
pub use keyboard::{KeyAction, key_target};
pub use observer::{ChangeReason, SliderEvent, SliderObserver};
pub use position::{
    ControlGeometry, ControlInsets, Direction, FingerState, Orientation, ThumbCapture,
    finger_state, thumb_offset,
};
pub use session::{DragSession, INTENTIONAL_DRAG_MOVES, InteractionPhase};
pub use state::SliderState;
pub use step::{fractions, normalize, round_to_step, value_to_fraction};
pub use store::{ValueMode, ValueStore};
pub use thumb::closest_index;
pub use value::{SliderValue, Thumbs, VALUE_EPSILON, approx_eq};
