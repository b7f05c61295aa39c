// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change and commit notifications.
//!
//! Mutating operations take a `&mut impl SliderObserver` and report accepted
//! changes through it synchronously, before returning. Observers must not
//! mutate the slider that is notifying them; a controlled embedder feeds the
//! new value back with [`crate::SliderState::sync_controlled`] once the call
//! has returned.

use alloc::vec::Vec;

use crate::value::SliderValue;

/// What kind of input produced a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeReason {
    /// A pointer went down on the control.
    PointerDown,
    /// The pointer moved during a drag.
    PointerMove,
    /// The pointer was released, ending the drag.
    PointerUp,
    /// A discrete keyboard adjustment.
    Keyboard,
}

/// Receives slider notifications.
///
/// Both methods default to doing nothing, so implementors only override what
/// they care about.
pub trait SliderObserver {
    /// Called for every accepted value change, including each frame of a drag.
    ///
    /// `thumb_index` is the index of the moved thumb in the ascending value
    /// sequence (always `0` for single-thumb sliders).
    fn on_change(&mut self, value: &SliderValue, thumb_index: usize, reason: ChangeReason) {
        let _ = (value, thumb_index, reason);
    }

    /// Called once when a discrete interaction ends: a pointer release or a
    /// keyboard edit.
    fn on_commit(&mut self, value: &SliderValue, reason: ChangeReason) {
        let _ = (value, reason);
    }
}

impl SliderObserver for () {}

/// A recorded notification.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderEvent {
    /// See [`SliderObserver::on_change`].
    Change {
        /// The proposed or accepted value.
        value: SliderValue,
        /// Index of the moved thumb.
        thumb_index: usize,
        /// Input that produced the change.
        reason: ChangeReason,
    },
    /// See [`SliderObserver::on_commit`].
    Commit {
        /// The committed value.
        value: SliderValue,
        /// Input that ended the interaction.
        reason: ChangeReason,
    },
}

/// Records every notification in order.
impl SliderObserver for Vec<SliderEvent> {
    fn on_change(&mut self, value: &SliderValue, thumb_index: usize, reason: ChangeReason) {
        self.push(SliderEvent::Change {
            value: value.clone(),
            thumb_index,
            reason,
        });
    }

    fn on_commit(&mut self, value: &SliderValue, reason: ChangeReason) {
        self.push(SliderEvent::Commit {
            value: value.clone(),
            reason,
        });
    }
}

impl<T: SliderObserver + ?Sized> SliderObserver for &mut T {
    fn on_change(&mut self, value: &SliderValue, thumb_index: usize, reason: ChangeReason) {
        (**self).on_change(value, thumb_index, reason);
    }

    fn on_commit(&mut self, value: &SliderValue, reason: ChangeReason) {
        (**self).on_commit(value, reason);
    }
}
