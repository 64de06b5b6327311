// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch driver: bind a [`GestureTracker`] to a host's input listeners and user callbacks.
//!
//! The driver does not know about any UI toolkit. The host implements
//! [`ListenerRegistry`] to attach and detach native listeners, forwards the
//! matching native events to [`TouchDriver::pointer_down`],
//! [`TouchDriver::pointer_move`] and [`TouchDriver::pointer_up`], and receives
//! [`TouchCoord`] records through [`GestureCallbacks`].
//!
//! ## Listener lifetime
//!
//! - [`TouchDriver::mount`] adds [`ListenerHandle::START`] on the surface.
//! - A pointer-down adds [`ListenerHandle::MOVE`] and [`ListenerHandle::END`] on the
//!   window, so movement outside the surface keeps being tracked.
//! - A pointer-up removes both window listeners again.
//! - [`TouchDriver::unmount`], also run on drop, removes whatever is still attached.
//!
//! All handles use [`ListenerOptions::GESTURE`]: capture phase and non-passive,
//! so the host can cancel native scrolling while [`TouchDriver::suppresses_scroll`]
//! is `true`.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use understory_gesture::clock::ManualClock;
//! use understory_gesture::driver::{GestureCallbacks, ListenerHandle, ListenerRegistry, TouchDriver};
//! use understory_gesture::sample::PointerSample;
//!
//! #[derive(Default)]
//! struct Attached(Vec<ListenerHandle>);
//!
//! impl ListenerRegistry for Attached {
//!     fn add(&mut self, handle: ListenerHandle) {
//!         self.0.push(handle);
//!     }
//!     fn remove(&mut self, handle: ListenerHandle) {
//!         self.0.retain(|h| *h != handle);
//!     }
//! }
//!
//! let shifts = Rc::new(RefCell::new(Vec::new()));
//! let sink = shifts.clone();
//! let callbacks = GestureCallbacks::new().on_move_xy(move |c| sink.borrow_mut().push(c.shift_x));
//!
//! let mut attached = Attached::default();
//! let surface = Rect::new(100.0, 50.0, 400.0, 350.0);
//! {
//!     let mut driver = TouchDriver::new(&mut attached, ManualClock::new(0)).with_callbacks(callbacks);
//!     driver.mount();
//!     driver.pointer_down(&PointerSample::mouse(Point::new(110.0, 60.0)), surface);
//!     driver.pointer_move(&PointerSample::mouse(Point::new(130.0, 60.0)), surface);
//!     driver.pointer_up();
//! }
//!
//! assert_eq!(*shifts.borrow(), [20.0]);
//! // Dropping the driver detached everything.
//! assert!(attached.0.is_empty());
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use log::{debug, trace};

use crate::clock::Clock;
use crate::coord::TouchCoord;
use crate::sample::PointerSample;
use crate::tracker::GestureTracker;

/// Where a listener is attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The surface element itself.
    Surface,
    /// The whole window (or document), covering movement outside the surface.
    Window,
}

/// Which driver entry point a listener feeds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Pointer engaged (press / touch begin), feeds [`TouchDriver::pointer_down`].
    Start,
    /// Pointer moved, feeds [`TouchDriver::pointer_move`].
    Move,
    /// Pointer released, feeds [`TouchDriver::pointer_up`].
    End,
}

/// Native listener registration flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    /// Run during the capture phase.
    pub capture: bool,
    /// The listener promises never to cancel the native default action.
    pub passive: bool,
}

impl ListenerOptions {
    /// Options used for every gesture listener.
    pub const GESTURE: Self = Self {
        capture: true,
        passive: false,
    };
}

/// Stable identity of one listener registration.
///
/// The host must treat two equal handles as the same listener, so a handle
/// passed to [`ListenerRegistry::remove`] detaches exactly what the matching
/// [`ListenerRegistry::add`] attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle {
    /// Attachment scope.
    pub target: ListenerTarget,
    /// Entry point fed by this listener.
    pub listener: Listener,
    /// Registration flags.
    pub options: ListenerOptions,
}

impl ListenerHandle {
    /// The gesture start listener on the surface.
    pub const START: Self = Self {
        target: ListenerTarget::Surface,
        listener: Listener::Start,
        options: ListenerOptions::GESTURE,
    };

    /// The move listener attached to the window during a gesture.
    pub const MOVE: Self = Self {
        target: ListenerTarget::Window,
        listener: Listener::Move,
        options: ListenerOptions::GESTURE,
    };

    /// The release listener attached to the window during a gesture.
    pub const END: Self = Self {
        target: ListenerTarget::Window,
        listener: Listener::End,
        options: ListenerOptions::GESTURE,
    };
}

/// Host-side listener attachment.
pub trait ListenerRegistry {
    /// Attach the native listener identified by `handle`.
    fn add(&mut self, handle: ListenerHandle);

    /// Detach the native listener identified by `handle`.
    fn remove(&mut self, handle: ListenerHandle);
}

impl<R: ListenerRegistry + ?Sized> ListenerRegistry for &mut R {
    fn add(&mut self, handle: ListenerHandle) {
        (**self).add(handle);
    }

    fn remove(&mut self, handle: ListenerHandle) {
        (**self).remove(handle);
    }
}

/// Surface configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverConfig {
    /// Leave native scrolling alone while a gesture is active.
    pub scrollable: bool,
    /// Class name forwarded to the rendered surface.
    pub class_name: Option<String>,
    /// Other presentation attributes forwarded to the rendered surface, in order.
    pub attributes: Vec<(String, String)>,
}

impl DriverConfig {
    /// Set [`DriverConfig::scrollable`].
    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    /// Set [`DriverConfig::class_name`].
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Append a pass-through attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

type Callback = Box<dyn FnMut(&TouchCoord)>;

/// Optional user callbacks, one per gesture phase.
#[derive(Default)]
pub struct GestureCallbacks {
    move_start: Option<Callback>,
    move_xy: Option<Callback>,
    move_end: Option<Callback>,
}

impl GestureCallbacks {
    /// No callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the fresh record when a gesture starts.
    pub fn on_move_start(mut self, f: impl FnMut(&TouchCoord) + 'static) -> Self {
        self.move_start = Some(Box::new(f));
        self
    }

    /// Called with the updated record on every move sample.
    pub fn on_move_xy(mut self, f: impl FnMut(&TouchCoord) + 'static) -> Self {
        self.move_xy = Some(Box::new(f));
        self
    }

    /// Called with the final record when a gesture ends.
    pub fn on_move_end(mut self, f: impl FnMut(&TouchCoord) + 'static) -> Self {
        self.move_end = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for GestureCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureCallbacks")
            .field("move_start", &self.move_start.is_some())
            .field("move_xy", &self.move_xy.is_some())
            .field("move_end", &self.move_end.is_some())
            .finish()
    }
}

fn notify(callback: &mut Option<Callback>, coord: &TouchCoord) {
    if let Some(callback) = callback {
        callback(coord);
    }
}

/// Drives one [`GestureTracker`] from host input events.
///
/// Dropping the driver detaches every listener it attached.
pub struct TouchDriver<R: ListenerRegistry, C: Clock> {
    registry: R,
    clock: C,
    tracker: GestureTracker,
    callbacks: GestureCallbacks,
    config: DriverConfig,
    mounted: bool,
    window_attached: bool,
}

impl<R: ListenerRegistry, C: Clock> TouchDriver<R, C> {
    /// An unmounted driver with default configuration and no callbacks.
    pub fn new(registry: R, clock: C) -> Self {
        Self {
            registry,
            clock,
            tracker: GestureTracker::new(),
            callbacks: GestureCallbacks::new(),
            config: DriverConfig::default(),
            mounted: false,
            window_attached: false,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the callbacks.
    pub fn with_callbacks(mut self, callbacks: GestureCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Attach the surface start listener. Does nothing if already mounted.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.registry.add(ListenerHandle::START);
        self.mounted = true;
    }

    /// Detach all listeners and drop any gesture in progress without callbacks.
    pub fn unmount(&mut self) {
        self.detach_window();
        if self.tracker.is_active() {
            debug!("unmounting during a gesture, dropping it");
            self.tracker.end();
        }
        if self.mounted {
            self.registry.remove(ListenerHandle::START);
            self.mounted = false;
        }
    }

    /// Handle a pointer-down on the surface.
    ///
    /// Ignored while unmounted. A pointer-down during a gesture restarts it.
    pub fn pointer_down(&mut self, sample: &PointerSample, reference: Rect) -> Option<TouchCoord> {
        if !self.mounted {
            trace!("pointer down on an unmounted surface, ignored");
            return None;
        }
        let time = self.clock.now_millis();
        let coord = *self.tracker.start(sample, reference, time);
        if !self.window_attached {
            self.registry.add(ListenerHandle::MOVE);
            self.registry.add(ListenerHandle::END);
            self.window_attached = true;
        }
        notify(&mut self.callbacks.move_start, &coord);
        Some(coord)
    }

    /// Handle a pointer move anywhere in the window.
    ///
    /// Ignored while no gesture is active.
    pub fn pointer_move(&mut self, sample: &PointerSample, reference: Rect) -> Option<TouchCoord> {
        if !self.tracker.is_active() {
            trace!("pointer move outside a gesture, ignored");
            return None;
        }
        let coord = *self.tracker.update(sample, reference)?;
        notify(&mut self.callbacks.move_xy, &coord);
        Some(coord)
    }

    /// Handle a pointer release anywhere in the window.
    ///
    /// Ignored while no gesture is active.
    pub fn pointer_up(&mut self) -> Option<TouchCoord> {
        if !self.tracker.is_active() {
            trace!("pointer up outside a gesture, ignored");
            return None;
        }
        self.detach_window();
        let coord = self.tracker.end()?;
        notify(&mut self.callbacks.move_end, &coord);
        Some(coord)
    }

    /// Returns `true` when the host should cancel native scrolling for the
    /// current event.
    pub fn suppresses_scroll(&self) -> bool {
        !self.config.scrollable && self.tracker.is_active()
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The underlying tracker.
    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// The surface configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The host registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    fn detach_window(&mut self) {
        if self.window_attached {
            self.registry.remove(ListenerHandle::MOVE);
            self.registry.remove(ListenerHandle::END);
            self.window_attached = false;
        }
    }
}

impl<R: ListenerRegistry, C: Clock> Drop for TouchDriver<R, C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<R: ListenerRegistry + fmt::Debug, C: Clock + fmt::Debug> fmt::Debug for TouchDriver<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchDriver")
            .field("registry", &self.registry)
            .field("clock", &self.clock)
            .field("tracker", &self.tracker)
            .field("callbacks", &self.callbacks)
            .field("config", &self.config)
            .field("mounted", &self.mounted)
            .field("window_attached", &self.window_attached)
            .finish()
    }
}
