// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the gesture demos.

use std::collections::HashSet;

use log::info;
use understory_gesture::driver::{ListenerHandle, ListenerRegistry};

/// A listener registry that logs every change and remembers what is attached.
#[derive(Debug, Default)]
pub struct LoggingRegistry {
    attached: HashSet<ListenerHandle>,
}

impl LoggingRegistry {
    /// Currently attached listeners.
    pub fn attached(&self) -> &HashSet<ListenerHandle> {
        &self.attached
    }
}

impl ListenerRegistry for LoggingRegistry {
    fn add(&mut self, handle: ListenerHandle) {
        info!("attach {:?} on {:?}", handle.listener, handle.target);
        self.attached.insert(handle);
    }

    fn remove(&mut self, handle: ListenerHandle) {
        info!("detach {:?} on {:?}", handle.listener, handle.target);
        self.attached.remove(&handle);
    }
}
