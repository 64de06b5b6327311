// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: single-pointer drag gesture tracking for UI surfaces.
//!
//! This crate tracks one pointer-drag gesture (mouse, or the first point of a
//! touch) over a bounded surface and reports it in three phases: start, move and
//! end. Each phase carries a [`coord::TouchCoord`] record with the pointer
//! position relative to the surface, the displacement since the previous sample,
//! and the cumulative shift since the gesture began.
//!
//! - [`tracker`]: the coordinate engine, [`tracker::GestureTracker`]
//! - [`driver`]: binds a tracker to host listeners and user callbacks
//! - [`sample`]: raw pointer samples and projection onto the surface
//! - [`coord`]: the record type and its reserved classification markers
//! - [`clock`]: timestamp sources for gesture start times
//!
//! ## Layering
//!
//! The crate does not assume any particular UI framework. A host layer turns
//! native events into [`sample::PointerSample`] values, queries the surface's
//! bounding rectangle for every sample, and either drives
//! [`tracker::GestureTracker`] directly or lets [`driver::TouchDriver`] manage
//! listener registration and callbacks.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_gesture::sample::PointerSample;
//! use understory_gesture::tracker::GestureTracker;
//!
//! let surface = Rect::new(100.0, 50.0, 400.0, 350.0);
//! let mut tracker = GestureTracker::new();
//!
//! tracker.start(&PointerSample::mouse(Point::new(110.0, 60.0)), surface, 0);
//! let coord = tracker
//!     .update(&PointerSample::mouse(Point::new(130.0, 60.0)), surface)
//!     .unwrap();
//! assert_eq!(coord.shift_x, 20.0);
//! tracker.end();
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables [`clock::SystemClock`] and Kurbo's `std` feature
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` builds
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod clock;
pub mod coord;
pub mod driver;
pub mod sample;
pub mod tracker;
