// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider controller.
//!
//! [`SliderState`] wires the pieces of this crate into the input pipeline:
//!
//! ```text
//! pointer position ─► finger_state ─► round_to_step ─► closest_index ─► clamp_to_neighbors ─┐
//! keyboard action  ─► key_target ─────► round_to_step ─────────────────► clamp_to_neighbors ─┴► ValueStore::set_value ─► observer
//! ```
//!
//! Each pointer interaction runs `Idle → Dragging → Idle`. Pointer down starts a
//! [`DragSession`] and captures a thumb; pointer up ends it and commits.
//! [`SliderState::cancel`] and a transition to disabled end it without a commit.

use alloc::vec::Vec;

use kurbo::Point;

use crate::config::SliderConfig;
use crate::constraint::{clamp_to_neighbors, replace_at, validate_separation};
use crate::error::{ConfigWarning, SliderError};
use crate::keyboard::{KeyAction, key_target};
use crate::observer::{ChangeReason, SliderObserver};
use crate::position::{ControlGeometry, FingerState, ThumbCapture, finger_state, thumb_offset};
use crate::session::{DragSession, InteractionPhase};
use crate::step::{fractions, normalize, round_to_step};
use crate::store::{ValueMode, ValueStore};
use crate::value::{SliderValue, Thumbs};

/// Headless state for one slider control.
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use understory_slider::{ControlInsets, SliderConfig, SliderEvent, SliderState, SliderValue};
///
/// let config = SliderConfig::default().with_step(5.0);
/// let mut slider = SliderState::uncontrolled(config, SliderValue::from([20.0, 60.0])).unwrap();
/// slider.set_geometry(Some(
///     config.geometry(Rect::new(0.0, 0.0, 100.0, 10.0), ControlInsets::default()),
/// ));
///
/// let mut events: Vec<SliderEvent> = Vec::new();
/// slider.pointer_down(Point::new(70.0, 5.0), None, &mut events).unwrap();
/// slider.pointer_move(Point::new(81.0, 5.0), &mut events).unwrap();
/// slider.pointer_up(&mut events);
///
/// assert_eq!(slider.values().as_slice(), &[20.0, 80.0]);
/// assert!(matches!(events.last(), Some(SliderEvent::Commit { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct SliderState {
    config: SliderConfig,
    store: ValueStore,
    geometry: Option<ControlGeometry>,
    session: Option<DragSession>,
    active: Option<usize>,
}

impl SliderState {
    /// Creates a slider around an existing store.
    ///
    /// Fails if the configuration cannot be operated with; non-fatal problems
    /// are logged.
    pub fn new(config: SliderConfig, store: ValueStore) -> Result<Self, SliderError> {
        config.check()?;
        let state = Self {
            config,
            store,
            geometry: None,
            session: None,
            active: None,
        };
        for warning in state.value_warnings() {
            warning.log();
        }
        Ok(state)
    }

    /// Creates a slider that owns its value, starting at `default`.
    pub fn uncontrolled(config: SliderConfig, default: SliderValue) -> Result<Self, SliderError> {
        Self::new(config, ValueStore::uncontrolled(default))
    }

    /// Creates a slider whose value is owned by the embedder.
    ///
    /// Changes are only proposed through the observer; feed accepted values back
    /// with [`SliderState::sync_controlled`].
    pub fn controlled(config: SliderConfig, value: SliderValue) -> Result<Self, SliderError> {
        Self::new(config, ValueStore::controlled(value))
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replaces the configuration between interactions.
    ///
    /// Returns the non-fatal warnings for the new configuration. The empty-range
    /// warning is not logged while a drag is in progress. Becoming disabled
    /// discards any drag session without committing.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<Vec<ConfigWarning>, SliderError> {
        let warnings = config.validate()?;
        for warning in &warnings {
            if self.session.is_some() && matches!(warning, ConfigWarning::EmptyRange { .. }) {
                continue;
            }
            warning.log();
        }
        let disabled = config.disabled;
        self.config = config;
        if disabled {
            self.discard_session();
        }
        Ok(warnings)
    }

    /// Enables or disables the control.
    ///
    /// Disabling discards any drag session without committing and clears the
    /// active thumb.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.discard_session();
        }
    }

    /// Returns the ownership mode of the value.
    #[must_use]
    pub fn mode(&self) -> ValueMode {
        self.store.mode()
    }

    /// Returns the value store.
    #[must_use]
    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    /// Returns the current value in stored order.
    #[must_use]
    pub fn value(&self) -> &SliderValue {
        self.store.value()
    }

    /// Returns `true` for multi-thumb sliders.
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.store.value().is_range()
    }

    /// Returns the ascending view of the current value.
    ///
    /// Single values are clamped into `[min, max]`.
    #[must_use]
    pub fn values(&self) -> Thumbs {
        normalize(self.store.value(), &self.config)
    }

    /// Returns the position of each thumb as a fraction of the track.
    #[must_use]
    pub fn fractions(&self) -> Thumbs {
        fractions(&self.values(), self.config.min, self.config.max)
    }

    /// Returns the geometry used for position mapping.
    #[must_use]
    pub fn geometry(&self) -> Option<&ControlGeometry> {
        self.geometry.as_ref()
    }

    /// Sets the measured control geometry, or `None` when unmounted.
    pub fn set_geometry(&mut self, geometry: Option<ControlGeometry>) {
        self.geometry = geometry;
    }

    /// Returns the thumb driven by the current interaction, if any.
    #[must_use]
    pub fn active_thumb(&self) -> Option<usize> {
        self.active
    }

    /// Marks a thumb as active, for example when it receives keyboard focus.
    ///
    /// Ignored while disabled, and for indices past the last thumb.
    pub fn set_active_thumb(&mut self, thumb_index: Option<usize>) {
        if self.config.disabled {
            return;
        }
        let count = self.store.value().thumb_count();
        if thumb_index.is_some_and(|index| index >= count) {
            tracing::debug!(?thumb_index, count, "ignoring active thumb past the last thumb");
            return;
        }
        self.active = thumb_index;
    }

    /// Returns the interaction phase.
    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        if self.session.is_some() {
            InteractionPhase::Dragging
        } else {
            InteractionPhase::Idle
        }
    }

    /// Returns the drag session, if one is in progress.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns `true` once the current drag has become intentional.
    ///
    /// See [`DragSession::is_intentional`].
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|session| session.is_intentional())
    }

    /// Feeds the embedder-owned value into a controlled slider.
    ///
    /// Returns the warnings raised by the new value: a mode mismatch for
    /// uncontrolled sliders, or a minimum-separation violation. Warnings are
    /// logged; the value is used as supplied either way.
    pub fn sync_controlled(&mut self, value: SliderValue) -> Vec<ConfigWarning> {
        if let Some(warning) = self.store.sync(value) {
            return alloc::vec![warning];
        }
        let warnings = self.value_warnings();
        for warning in &warnings {
            warning.log();
        }
        warnings
    }

    /// Starts a pointer interaction at `position`.
    ///
    /// `grabbed_thumb` is the center of the thumb under the pointer, if the
    /// press landed on one; the grab offset is then preserved for the rest of
    /// the drag. For range sliders the closest thumb is captured for the whole
    /// session.
    ///
    /// Returns `Ok(true)` if a session started. Disabled controls and controls
    /// without usable geometry ignore the press.
    pub fn pointer_down(
        &mut self,
        position: Point,
        grabbed_thumb: Option<Point>,
        observer: &mut impl SliderObserver,
    ) -> Result<bool, SliderError> {
        if self.config.disabled {
            return Ok(false);
        }
        let offset = match (grabbed_thumb, self.geometry.as_ref()) {
            (Some(center), Some(geometry)) => thumb_offset(geometry, position, center),
            _ => 0.0,
        };
        let Some(finger) = self.finger(position, offset, ThumbCapture::Closest)? else {
            return Ok(false);
        };

        tracing::trace!(thumb = finger.thumb_index, offset, "slider drag started");
        self.store.begin_interaction();
        self.session = Some(DragSession::new(finger.thumb_index, offset));
        self.active = Some(finger.thumb_index);
        self.store.set_value(
            finger.value,
            finger.thumb_index,
            ChangeReason::PointerDown,
            observer,
        );
        Ok(true)
    }

    /// Moves the captured thumb to follow the pointer.
    ///
    /// Returns `Ok(true)` if the value changed. Does nothing outside a session.
    pub fn pointer_move(
        &mut self,
        position: Point,
        observer: &mut impl SliderObserver,
    ) -> Result<bool, SliderError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        session.record_move();
        let session = *session;
        let capture = ThumbCapture::Captured(session.thumb_index());
        let Some(finger) = self.finger(position, session.thumb_offset(), capture)? else {
            return Ok(false);
        };
        Ok(self.store.set_value(
            finger.value,
            finger.thumb_index,
            ChangeReason::PointerMove,
            observer,
        ))
    }

    /// Ends the pointer interaction and commits.
    ///
    /// Exactly one commit is emitted per session. It carries the last value
    /// changed during the session, or the current value if nothing changed; the
    /// release itself never moves a thumb. Returns `false` without committing
    /// if no session was in progress.
    pub fn pointer_up(&mut self, observer: &mut impl SliderObserver) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        self.active = None;
        tracing::trace!(thumb = session.thumb_index(), "slider drag ended");
        self.store.commit(None, ChangeReason::PointerUp, observer);
        true
    }

    /// Aborts the pointer interaction without committing.
    ///
    /// Changes accepted during the drag are not rolled back: an uncontrolled
    /// slider keeps the last dragged value even though it was never committed.
    pub fn cancel(&mut self) {
        if self.session.is_some() {
            tracing::trace!("slider drag cancelled");
        }
        self.session = None;
        self.active = None;
    }

    /// Applies a discrete edit setting thumb `thumb_index` to `raw`.
    ///
    /// The value is stepped and clamped into `[min, max]`; for range sliders it
    /// is also clamped against the neighboring thumbs. Edits that would leave
    /// the thumbs closer than the minimum separation are dropped. Accepted edits
    /// notify a change (if the value differs) followed by one commit.
    ///
    /// Returns `Ok(true)` if the edit was accepted.
    pub fn input_change(
        &mut self,
        raw: f64,
        thumb_index: usize,
        observer: &mut impl SliderObserver,
    ) -> Result<bool, SliderError> {
        if self.config.disabled {
            return Ok(false);
        }
        let config = self.config;
        let stepped = config.clamp(round_to_step(config.clamp(raw), config.step, config.min));
        let next = if self.is_range() {
            let sorted = self.values();
            let value = clamp_to_neighbors(
                &sorted,
                thumb_index,
                stepped,
                config.step,
                config.min_steps_between_values,
            )?;
            let next = replace_at(&sorted, thumb_index, config.clamp(value))?;
            if !validate_separation(&next, config.step, config.min_steps_between_values) {
                tracing::debug!(?next, "dropping keyboard edit violating thumb separation");
                return Ok(false);
            }
            SliderValue::Range(next)
        } else {
            if thumb_index != 0 {
                return Err(SliderError::ThumbIndexOutOfRange {
                    index: thumb_index,
                    len: 1,
                });
            }
            SliderValue::Single(stepped)
        };

        self.store.begin_interaction();
        self.store
            .set_value(next.clone(), thumb_index, ChangeReason::Keyboard, observer);
        self.store
            .commit(Some(next), ChangeReason::Keyboard, observer);
        Ok(true)
    }

    /// Resolves `action` for `thumb_index` and applies it with
    /// [`SliderState::input_change`].
    pub fn key_action(
        &mut self,
        action: KeyAction,
        thumb_index: usize,
        observer: &mut impl SliderObserver,
    ) -> Result<bool, SliderError> {
        if self.config.disabled {
            return Ok(false);
        }
        let raw = key_target(
            action,
            &self.values(),
            thumb_index,
            &self.config,
            self.is_range(),
        )?;
        self.input_change(raw, thumb_index, observer)
    }

    fn finger(
        &self,
        position: Point,
        offset: f64,
        capture: ThumbCapture,
    ) -> Result<Option<FingerState>, SliderError> {
        let sorted = self.values();
        let finger = finger_state(
            Some(position),
            self.geometry.as_ref(),
            &self.config,
            &sorted,
            self.is_range(),
            offset,
            capture,
        )?;
        Ok(finger)
    }

    fn discard_session(&mut self) {
        if self.session.take().is_some() {
            tracing::trace!("slider drag discarded");
        }
        self.active = None;
    }

    fn value_warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.is_range() {
            let sorted = self.values();
            if !validate_separation(
                &sorted,
                self.config.step,
                self.config.min_steps_between_values,
            ) {
                warnings.push(ConfigWarning::SeparationViolated {
                    values: sorted.to_vec(),
                    required: self.config.min_separation(),
                });
            }
        }
        warnings
    }
}
