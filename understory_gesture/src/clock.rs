// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Millisecond clocks used to stamp gesture start times.
//!
//! [`GestureTracker`](crate::tracker::GestureTracker) takes explicit timestamps;
//! [`TouchDriver`](crate::driver::TouchDriver) reads them from a [`Clock`].

use core::cell::Cell;

/// A source of millisecond timestamps.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_millis(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Wall-clock time in milliseconds since the Unix epoch.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        // A clock set before the epoch reads as zero.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

/// A clock that only moves when told to.
///
/// Useful for hosts that already keep a frame clock, and for tests.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// A clock reading `now`.
    pub fn new(now: u64) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Set the current reading.
    pub fn set(&self, now: u64) {
        self.now.set(now);
    }

    /// Move the reading forward by `millis`, saturating.
    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}
