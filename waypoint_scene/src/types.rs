// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, flags, and local geometry.

use kurbo::{Rect, Vec2};

/// Identifier for a node in the scene (generational).
///
/// Removing a node makes its id stale; a later node reusing the same slot gets
/// a newer generation, so stale ids never alias it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility, focus, and touch.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible. Invisible nodes hide their whole subtree from searches.
        const VISIBLE                  = 0b0000_0001;
        /// Node can take keyboard focus.
        const FOCUSABLE                = 0b0000_0010;
        /// Node keeps taking focus while the scene is in touch mode.
        const FOCUSABLE_IN_TOUCH_MODE  = 0b0000_0100;
        /// Node accepts touches.
        const TOUCHABLE                = 0b0000_1000;
        /// Node is the root of a keyboard navigation cluster.
        const CLUSTER                  = 0b0001_0000;
        /// A cluster that confines focus search to itself once focus is inside.
        const TOUCHSCREEN_BLOCKS_FOCUS = 0b0010_0000;
        /// Node lays out its content right to left.
        const LAYOUT_RTL               = 0b0100_0000;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Local geometry and flags for a node.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalNode {
    /// Bounds in the parent's content coordinates.
    pub bounds: Rect,
    /// Scroll offset of this node's content. Children are laid out in content
    /// coordinates, so they appear moved by `-scroll`.
    pub scroll: Vec2,
    /// Visibility, focus, and touch flags.
    pub flags: NodeFlags,
}

impl Default for LocalNode {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            scroll: Vec2::ZERO,
            flags: NodeFlags::default(),
        }
    }
}
