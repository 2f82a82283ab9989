// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interface a retained element tree offers to the focus search.

use alloc::vec::Vec;
use core::hash::Hash;

use crate::direction::Direction;
use crate::geometry::Rect;

/// Read-only view of an element tree, as needed by [`FocusFinder`](crate::FocusFinder).
///
/// The engine never dereferences a [`FocusHost::Node`] itself; every question
/// about an element goes through this trait. All rectangles are expressed in the
/// coordinate space of the `root` passed alongside them, which is the scope of
/// the current search.
///
/// Filtering is the host's job: the `collect_*` methods must only report
/// elements that pass the matching predicates.
pub trait FocusHost {
    /// Small copyable handle to an element.
    type Node: Copy + Eq + Hash;

    /// Focus rectangle of `node` mapped into `root`'s coordinate space.
    fn bounds_in_root(&self, root: Self::Node, node: Self::Node) -> Rect;

    /// Hit rectangle of `node` mapped into `root`'s coordinate space.
    ///
    /// Defaults to [`FocusHost::bounds_in_root`].
    fn touch_bounds_in_root(&self, root: Self::Node, node: Self::Node) -> Rect {
        self.bounds_in_root(root, node)
    }

    /// The currently visible area of `root` in its own (scrolled) coordinates.
    ///
    /// Used to synthesize a starting rectangle when nothing is focused.
    fn viewport_in_root(&self, root: Self::Node) -> Rect;

    /// Whether `node` is visible.
    fn is_visible(&self, node: Self::Node) -> bool;

    /// Whether `node` accepts touches.
    fn is_touchable(&self, node: Self::Node) -> bool;

    /// Whether `node` can take focus, given the current input mode.
    fn is_focusable(&self, node: Self::Node, touch_mode: bool) -> bool;

    /// Whether the tree is currently in touch mode.
    fn in_touch_mode(&self) -> bool {
        false
    }

    /// Whether `node` or any of its descendants can take focus.
    fn has_focusable(&self, node: Self::Node) -> bool;

    /// Author-specified focus successor of `node` in `direction`, within `root`.
    fn explicit_next(
        &self,
        root: Self::Node,
        node: Self::Node,
        direction: Direction,
    ) -> Option<Self::Node>;

    /// Author-specified successor cluster of the cluster `node`, within `root`.
    fn explicit_next_cluster(
        &self,
        _root: Self::Node,
        _node: Self::Node,
        _direction: Direction,
    ) -> Option<Self::Node> {
        None
    }

    /// Whether `root` lays out right to left.
    fn layout_is_mirrored(&self, _root: Self::Node) -> bool {
        false
    }

    /// The subtree a search from `focused` is confined to.
    ///
    /// Defaults to `root`.
    fn effective_root_for(&self, root: Self::Node, _focused: Option<Self::Node>) -> Self::Node {
        root
    }

    /// Append every element under `root` that can currently take focus.
    fn collect_focusables(&self, root: Self::Node, direction: Direction, out: &mut Vec<Self::Node>);

    /// Append the keyboard navigation clusters under `root`.
    fn collect_clusters(&self, root: Self::Node, direction: Direction, out: &mut Vec<Self::Node>);

    /// Append every visible touchable element under `root`.
    fn collect_touchables(&self, root: Self::Node, out: &mut Vec<Self::Node>);
}
