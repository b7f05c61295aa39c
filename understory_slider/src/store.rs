// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Authoritative value storage.
//!
//! A [`ValueStore`] is either **uncontrolled**, owning its value and writing
//! every accepted change, or **controlled**, where the embedder owns the value:
//! the store only mirrors what the embedder feeds back through
//! [`ValueStore::sync`] and forwards proposed changes as notifications. The mode
//! is fixed at construction.
//!
//! ```rust
//! use understory_slider::{ChangeReason, SliderEvent, SliderValue, ValueStore};
//!
//! let mut store = ValueStore::controlled(SliderValue::Single(10.0));
//! let mut events: Vec<SliderEvent> = Vec::new();
//!
//! store.set_value(SliderValue::Single(20.0), 0, ChangeReason::Keyboard, &mut events);
//! // The embedder has not accepted the change yet.
//! assert_eq!(store.value(), &SliderValue::Single(10.0));
//! assert_eq!(events.len(), 1);
//!
//! store.sync(SliderValue::Single(20.0));
//! assert_eq!(store.value(), &SliderValue::Single(20.0));
//! ```

use crate::error::ConfigWarning;
use crate::observer::{ChangeReason, SliderObserver};
use crate::value::SliderValue;

/// Who owns the slider value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueMode {
    /// The embedder owns the value and feeds it back after each change.
    Controlled,
    /// The store owns the value.
    Uncontrolled,
}

#[derive(Clone, Debug)]
enum Storage {
    Owned(SliderValue),
    Mirrored {
        value: SliderValue,
        /// Last proposed change the embedder has not fed back yet.
        pending: Option<SliderValue>,
    },
}

/// Holds the current slider value and routes changes to an observer.
#[derive(Clone, Debug)]
pub struct ValueStore {
    storage: Storage,
    last_changed: Option<SliderValue>,
}

impl ValueStore {
    /// Creates a store that owns its value, starting at `default`.
    #[must_use]
    pub fn uncontrolled(default: SliderValue) -> Self {
        Self {
            storage: Storage::Owned(default),
            last_changed: None,
        }
    }

    /// Creates a store mirroring an embedder-owned `value`.
    #[must_use]
    pub fn controlled(value: SliderValue) -> Self {
        Self {
            storage: Storage::Mirrored {
                value,
                pending: None,
            },
            last_changed: None,
        }
    }

    /// Returns the ownership mode.
    #[must_use]
    pub fn mode(&self) -> ValueMode {
        match self.storage {
            Storage::Owned(_) => ValueMode::Uncontrolled,
            Storage::Mirrored { .. } => ValueMode::Controlled,
        }
    }

    /// Returns the current value in stored (possibly unsorted) order.
    ///
    /// In controlled mode this is the last value fed through
    /// [`ValueStore::sync`], not a pending proposal.
    #[must_use]
    pub fn value(&self) -> &SliderValue {
        match &self.storage {
            Storage::Owned(value) | Storage::Mirrored { value, .. } => value,
        }
    }

    /// Returns the proposal the embedder has not fed back yet, if any.
    ///
    /// Always `None` for uncontrolled stores.
    #[must_use]
    pub fn pending(&self) -> Option<&SliderValue> {
        match &self.storage {
            Storage::Owned(_) => None,
            Storage::Mirrored { pending, .. } => pending.as_ref(),
        }
    }

    /// Returns the last value accepted by [`ValueStore::set_value`] during the
    /// current interaction.
    #[must_use]
    pub fn last_changed(&self) -> Option<&SliderValue> {
        self.last_changed.as_ref()
    }

    /// Forgets the last changed value; called when an interaction starts.
    pub fn begin_interaction(&mut self) {
        self.last_changed = None;
    }

    /// Proposes `next` as the new value.
    ///
    /// Candidates containing `NaN`, or equal (within tolerance) to the current
    /// value, are dropped and `false` is returned. In controlled mode a
    /// candidate equal to a still-pending proposal is dropped too, so repeated
    /// frames of a drag notify only once even if the embedder applies changes
    /// asynchronously.
    ///
    /// Otherwise the value is written (uncontrolled) or recorded as pending
    /// (controlled), remembered as the last changed value, and reported through
    /// [`SliderObserver::on_change`].
    pub fn set_value(
        &mut self,
        next: SliderValue,
        thumb_index: usize,
        reason: ChangeReason,
        observer: &mut impl SliderObserver,
    ) -> bool {
        if next.has_nan() {
            tracing::debug!(?next, "dropping slider value containing NaN");
            return false;
        }
        match &mut self.storage {
            Storage::Owned(value) => {
                if next.approx_eq(value) {
                    return false;
                }
                *value = next.clone();
            }
            Storage::Mirrored { value, pending } => {
                let current = pending.as_ref().unwrap_or(&*value);
                if next.approx_eq(current) {
                    return false;
                }
                *pending = Some(next.clone());
            }
        }
        observer.on_change(&next, thumb_index, reason);
        self.last_changed = Some(next);
        true
    }

    /// Feeds an embedder-owned value into a controlled store.
    ///
    /// Clears any pending proposal. Uncontrolled stores ignore the value and
    /// return [`ConfigWarning::ModeMismatch`], which is also logged.
    pub fn sync(&mut self, next: SliderValue) -> Option<ConfigWarning> {
        match &mut self.storage {
            Storage::Mirrored { value, pending } => {
                *value = next;
                *pending = None;
                None
            }
            Storage::Owned(_) => {
                let warning = ConfigWarning::ModeMismatch;
                warning.log();
                Some(warning)
            }
        }
    }

    /// Reports the end of an interaction through [`SliderObserver::on_commit`].
    ///
    /// The committed value is the last changed value of this interaction if
    /// there is one, then `fallback`, then the current value. Preferring the
    /// last changed value keeps controlled embedders that apply changes
    /// asynchronously from committing a stale value.
    pub fn commit(
        &self,
        fallback: Option<SliderValue>,
        reason: ChangeReason,
        observer: &mut impl SliderObserver,
    ) {
        let value = self
            .last_changed
            .clone()
            .or(fallback)
            .unwrap_or_else(|| self.value().clone());
        observer.on_commit(&value, reason);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ValueMode, ValueStore};
    use crate::error::ConfigWarning;
    use crate::observer::{ChangeReason, SliderEvent};
    use crate::value::SliderValue;

    fn change(value: SliderValue) -> SliderEvent {
        SliderEvent::Change {
            value,
            thumb_index: 0,
            reason: ChangeReason::PointerMove,
        }
    }

    #[test]
    fn uncontrolled_writes_and_notifies() {
        let mut store = ValueStore::uncontrolled(SliderValue::Single(0.0));
        let mut events: Vec<SliderEvent> = Vec::new();
        assert_eq!(store.mode(), ValueMode::Uncontrolled);

        assert!(store.set_value(
            SliderValue::Single(5.0),
            0,
            ChangeReason::PointerMove,
            &mut events
        ));
        assert_eq!(store.value(), &SliderValue::Single(5.0));
        assert_eq!(store.last_changed(), Some(&SliderValue::Single(5.0)));
        assert_eq!(events, [change(SliderValue::Single(5.0))]);
    }

    #[test]
    fn unchanged_and_nan_values_are_dropped() {
        let mut store = ValueStore::uncontrolled(SliderValue::from([1.0, 2.0]));
        let mut events: Vec<SliderEvent> = Vec::new();
        assert!(!store.set_value(
            SliderValue::from([1.0, 2.0 + 1e-12]),
            1,
            ChangeReason::PointerMove,
            &mut events
        ));
        assert!(!store.set_value(
            SliderValue::from([f64::NAN, 2.0]),
            0,
            ChangeReason::PointerMove,
            &mut events
        ));
        assert!(events.is_empty());
        assert_eq!(store.last_changed(), None);
    }

    #[test]
    fn controlled_forwards_without_writing() {
        let mut store = ValueStore::controlled(SliderValue::Single(0.0));
        let mut events: Vec<SliderEvent> = Vec::new();
        assert_eq!(store.mode(), ValueMode::Controlled);

        store.set_value(
            SliderValue::Single(5.0),
            0,
            ChangeReason::PointerMove,
            &mut events,
        );
        assert_eq!(store.value(), &SliderValue::Single(0.0));
        assert_eq!(store.pending(), Some(&SliderValue::Single(5.0)));

        // Same proposal again before the embedder caught up: no second notification.
        store.set_value(
            SliderValue::Single(5.0),
            0,
            ChangeReason::PointerMove,
            &mut events,
        );
        assert_eq!(events.len(), 1);

        assert_eq!(store.sync(SliderValue::Single(5.0)), None);
        assert_eq!(store.value(), &SliderValue::Single(5.0));
        assert_eq!(store.pending(), None);
    }

    #[test]
    fn controlled_embedder_may_reject_a_change() {
        let mut store = ValueStore::controlled(SliderValue::Single(0.0));
        let mut events: Vec<SliderEvent> = Vec::new();
        store.set_value(
            SliderValue::Single(5.0),
            0,
            ChangeReason::PointerMove,
            &mut events,
        );
        // The embedder keeps its old value; proposing 5 again is a new change.
        store.sync(SliderValue::Single(0.0));
        store.set_value(
            SliderValue::Single(5.0),
            0,
            ChangeReason::PointerMove,
            &mut events,
        );
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn sync_on_uncontrolled_store_warns() {
        let mut store = ValueStore::uncontrolled(SliderValue::Single(1.0));
        assert_eq!(
            store.sync(SliderValue::Single(9.0)),
            Some(ConfigWarning::ModeMismatch)
        );
        assert_eq!(store.value(), &SliderValue::Single(1.0));
    }

    #[test]
    fn commit_prefers_last_changed_then_fallback_then_current() {
        let mut store = ValueStore::controlled(SliderValue::Single(0.0));
        let mut events: Vec<SliderEvent> = Vec::new();

        store.commit(
            Some(SliderValue::Single(3.0)),
            ChangeReason::PointerUp,
            &mut events,
        );
        store.commit(None, ChangeReason::PointerUp, &mut events);
        store.set_value(
            SliderValue::Single(7.0),
            0,
            ChangeReason::PointerMove,
            &mut events,
        );
        store.commit(
            Some(SliderValue::Single(3.0)),
            ChangeReason::PointerUp,
            &mut events,
        );

        let commits: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                SliderEvent::Commit { value, .. } => Some(value.clone()),
                SliderEvent::Change { .. } => None,
            })
            .collect();
        assert_eq!(
            commits,
            [
                SliderValue::Single(3.0),
                SliderValue::Single(0.0),
                SliderValue::Single(7.0),
            ]
        );

        store.begin_interaction();
        assert_eq!(store.last_changed(), None);
    }
}
