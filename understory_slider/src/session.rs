// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-interaction drag state.
//!
//! A [`DragSession`] exists from pointer down until the pointer is released,
//! the interaction is cancelled, or the control becomes disabled. It pins the
//! thumb captured at pointer down so the active thumb cannot switch mid-drag,
//! even when the pointer crosses another thumb.

/// Number of pointer moves after which a drag counts as intentional.
pub const INTENTIONAL_DRAG_MOVES: u32 = 2;

/// Interaction state of a slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    /// No pointer interaction in progress.
    #[default]
    Idle,
    /// A pointer is down and driving a thumb.
    Dragging,
}

/// State captured when a pointer interaction starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    thumb_index: usize,
    thumb_offset: f64,
    moves: u32,
}

impl DragSession {
    /// Starts a session driving `thumb_index`.
    ///
    /// `thumb_offset` is the fraction returned by [`crate::thumb_offset`] when
    /// the pointer went down on a thumb, or `0.0` for presses on the track.
    #[must_use]
    pub fn new(thumb_index: usize, thumb_offset: f64) -> Self {
        Self {
            thumb_index,
            thumb_offset,
            moves: 0,
        }
    }

    /// Index of the captured thumb in the ascending value sequence.
    #[must_use]
    pub fn thumb_index(&self) -> usize {
        self.thumb_index
    }

    /// Grab offset applied to every position in this session.
    #[must_use]
    pub fn thumb_offset(&self) -> f64 {
        self.thumb_offset
    }

    /// Counts one pointer move.
    pub fn record_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    /// Number of pointer moves seen so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Returns `true` once the pointer has moved more than
    /// [`INTENTIONAL_DRAG_MOVES`] times.
    ///
    /// Renderers use this to tell a press on the track from a real drag, for
    /// example to suppress thumb transitions while dragging.
    #[must_use]
    pub fn is_intentional(&self) -> bool {
        self.moves > INTENTIONAL_DRAG_MOVES
    }
}
