// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracker: turn raw pointer samples into a [`TouchCoord`] record.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`GestureTracker::start`], passing the pointer-down sample,
//!    the current reference rectangle and a timestamp.
//! 2) On each move sample, call [`GestureTracker::update`] with a freshly queried
//!    reference rectangle. It returns the updated record.
//! 3) Finish with [`GestureTracker::end`], which hands back the final record and
//!    returns the tracker to idle.
//!
//! [`update`](GestureTracker::update) and [`end`](GestureTracker::end) are no-ops
//! returning `None` while idle.
//!
//! ## Delta rules
//!
//! Deltas are computed per axis from the previously stored position, with two
//! quirks that callers may observe:
//!
//! - If the stored position on an axis is exactly `0.0`, that axis keeps its
//!   previous delta instead of being recomputed.
//! - If both deltas come out equal while neither current coordinate is `0.0`,
//!   the sample is treated as a sampling artifact and both deltas are replaced by
//!   the last accepted pair. This also fires on exact diagonal motion.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_gesture::sample::PointerSample;
//! use understory_gesture::tracker::GestureTracker;
//!
//! let surface = Rect::new(100.0, 50.0, 400.0, 350.0);
//! let mut tracker = GestureTracker::new();
//!
//! let coord = tracker.start(&PointerSample::mouse(Point::new(110.0, 60.0)), surface, 0);
//! assert_eq!((coord.start_x, coord.start_y), (10.0, 10.0));
//!
//! let coord = tracker
//!     .update(&PointerSample::mouse(Point::new(130.0, 60.0)), surface)
//!     .unwrap();
//! assert_eq!((coord.now_x, coord.delta_x, coord.shift_x), (30.0, 20.0, 20.0));
//!
//! let last = tracker.end().unwrap();
//! assert_eq!(last.now_x, 30.0);
//! assert!(!tracker.is_active());
//! ```

use kurbo::{Rect, Vec2};
use log::{debug, trace, warn};

use crate::coord::TouchCoord;
use crate::sample::PointerSample;

/// Lifecycle phase of a [`GestureTracker`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No gesture in progress.
    Idle,
    /// A gesture was started and not yet ended.
    Active,
}

/// Tracks one pointer gesture at a time.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    active: Option<TouchCoord>,
    prev_delta: Vec2,
}

impl GestureTracker {
    /// An idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at `sample`, projected into `reference`.
    ///
    /// Any gesture already in progress is discarded.
    pub fn start(&mut self, sample: &PointerSample, reference: Rect, time: u64) -> &TouchCoord {
        if let Some(previous) = &self.active {
            debug!(
                "discarding gesture started at {} ms, a new one begins",
                previous.start_time
            );
        }
        let pos = sample.project(reference);
        trace!("gesture start at ({}, {}) [{:?}]", pos.x, pos.y, sample.kind);
        self.prev_delta = Vec2::ZERO;
        self.active.insert(TouchCoord::new(pos, time))
    }

    /// Feed a move sample into the active gesture.
    ///
    /// Returns `None` (and changes nothing) when no gesture is active.
    pub fn update(&mut self, sample: &PointerSample, reference: Rect) -> Option<&TouchCoord> {
        let Some(coord) = self.active.as_mut() else {
            warn!("pointer move without an active gesture, ignored");
            return None;
        };
        let now = sample.project(reference);

        // A stored coordinate of exactly zero keeps the previous delta.
        if coord.now_x != 0.0 {
            coord.delta_x = now.x - coord.now_x;
        }
        if coord.now_y != 0.0 {
            coord.delta_y = now.y - coord.now_y;
        }

        coord.now_x = now.x;
        coord.now_y = now.y;

        if coord.delta_x == coord.delta_y && coord.now_x != 0.0 && coord.now_y != 0.0 {
            coord.delta_x = self.prev_delta.x;
            coord.delta_y = self.prev_delta.y;
        }
        self.prev_delta = Vec2::new(coord.delta_x, coord.delta_y);

        coord.shift_x = coord.now_x - coord.start_x;
        coord.shift_y = coord.now_y - coord.start_y;

        Some(&*coord)
    }

    /// Finish the active gesture, returning its last record unchanged.
    ///
    /// Returns `None` when no gesture is active.
    pub fn end(&mut self) -> Option<TouchCoord> {
        let coord = self.active.take();
        match &coord {
            Some(coord) => trace!(
                "gesture end at ({}, {}), shift ({}, {})",
                coord.now_x, coord.now_y, coord.shift_x, coord.shift_y
            ),
            None => warn!("pointer up without an active gesture, ignored"),
        }
        coord
    }

    /// The record of the active gesture, if any.
    pub fn coord(&self) -> Option<&TouchCoord> {
        self.active.as_ref()
    }

    /// Returns `true` while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GesturePhase {
        if self.is_active() {
            GesturePhase::Active
        } else {
            GesturePhase::Idle
        }
    }

    /// The last accepted delta pair.
    pub fn prev_delta(&self) -> Vec2 {
        self.prev_delta
    }
}
