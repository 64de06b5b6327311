// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinate record threaded through one gesture.

use kurbo::{Point, Vec2};

/// Axis marker reserved for gesture classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// Direction marker reserved for gesture classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the top edge of the surface.
    Top,
    /// Towards the bottom edge of the surface.
    Bottom,
    /// Towards the left edge of the surface.
    Left,
    /// Towards the right edge of the surface.
    Right,
}

/// Positions, deltas and shifts of the active gesture.
///
/// All positions are relative to the top-left corner of the reference
/// rectangle that was current when the sample was taken.
///
/// The classification fields (`start_it_x_or_y`, `it_x_or_y`,
/// `start_direction`, `direction`) and `inertia` are never written by
/// [`GestureTracker`](crate::tracker::GestureTracker). They exist so callbacks can
/// annotate the record they receive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchCoord {
    /// Axis marker assigned at gesture start.
    pub start_it_x_or_y: Option<Axis>,
    /// Axis marker for the current sample.
    pub it_x_or_y: Option<Axis>,
    /// Direction assigned at gesture start.
    pub start_direction: Option<Direction>,
    /// Direction for the current sample.
    pub direction: Option<Direction>,
    /// Horizontal position at gesture start.
    pub start_x: f64,
    /// Vertical position at gesture start.
    pub start_y: f64,
    /// Gesture start time in milliseconds, as reported by the host clock.
    pub start_time: u64,
    /// Current horizontal position.
    pub now_x: f64,
    /// Current vertical position.
    pub now_y: f64,
    /// `now_x - start_x`.
    pub shift_x: f64,
    /// `now_y - start_y`.
    pub shift_y: f64,
    /// Horizontal displacement since the previous sample.
    pub delta_x: f64,
    /// Vertical displacement since the previous sample.
    pub delta_y: f64,
    /// Momentum continuation flag.
    pub inertia: bool,
}

impl TouchCoord {
    /// A fresh record for a gesture starting at `pos` at `start_time`.
    pub fn new(pos: Point, start_time: u64) -> Self {
        Self {
            start_it_x_or_y: None,
            it_x_or_y: None,
            start_direction: None,
            direction: None,
            start_x: pos.x,
            start_y: pos.y,
            start_time,
            now_x: pos.x,
            now_y: pos.y,
            shift_x: 0.0,
            shift_y: 0.0,
            delta_x: 0.0,
            delta_y: 0.0,
            inertia: false,
        }
    }

    /// Position at gesture start.
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// Current position.
    pub fn now(&self) -> Point {
        Point::new(self.now_x, self.now_y)
    }

    /// Cumulative displacement since gesture start.
    pub fn shift(&self) -> Vec2 {
        Vec2::new(self.shift_x, self.shift_y)
    }

    /// Displacement since the previous sample.
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.delta_x, self.delta_y)
    }
}
