// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer samples and their projection onto the reference surface.

use kurbo::{Point, Rect};

/// The kind of device that produced a [`PointerSample`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse or other hovering pointer.
    Mouse,
    /// The first point of a touch.
    Touch,
}

/// One pointer position in client (viewport) coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Device kind.
    pub kind: PointerKind,
    /// Position in client coordinates.
    pub client: Point,
}

impl PointerSample {
    /// A mouse sample at `client`.
    pub fn mouse(client: Point) -> Self {
        Self {
            kind: PointerKind::Mouse,
            client,
        }
    }

    /// A touch sample at `client`.
    pub fn touch(client: Point) -> Self {
        Self {
            kind: PointerKind::Touch,
            client,
        }
    }

    /// A touch sample taken from the first entry of `touches`.
    ///
    /// Additional touch points are ignored. Returns `None` for an empty list.
    pub fn from_touches(touches: &[Point]) -> Option<Self> {
        touches.first().copied().map(Self::touch)
    }

    /// Position relative to the top-left corner of `reference`.
    pub fn project(&self, reference: Rect) -> Point {
        project(self.client, reference)
    }
}

/// Translate `client` into the coordinate space of `reference`.
///
/// The reference rectangle must be re-queried for every sample, as the surface
/// can move (e.g. scroll) during a gesture.
pub fn project(client: Point, reference: Rect) -> Point {
    Point::new(client.x - reference.x0, client.y - reference.y0)
}
