// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`FocusHost`] implementation for [`Scene`].

use alloc::vec;
use alloc::vec::Vec;
use waypoint_focus::{Direction, FocusHost, Rect};

use crate::scene::Scene;
use crate::types::{NodeFlags, NodeId};

impl FocusHost for Scene {
    type Node = NodeId;

    fn bounds_in_root(&self, root: NodeId, node: NodeId) -> Rect {
        self.rect_in_root(root, node)
            .map_or(Rect::ZERO, Rect::from_kurbo)
    }

    fn viewport_in_root(&self, root: NodeId) -> Rect {
        self.bounds_in_root(root, root)
    }

    fn is_visible(&self, node: NodeId) -> bool {
        self.has_flags(node, NodeFlags::VISIBLE)
    }

    fn is_touchable(&self, node: NodeId) -> bool {
        self.has_flags(node, NodeFlags::TOUCHABLE)
    }

    fn is_focusable(&self, node: NodeId, touch_mode: bool) -> bool {
        self.flags(node).is_some_and(|flags| {
            flags.contains(NodeFlags::FOCUSABLE)
                && (!touch_mode || flags.contains(NodeFlags::FOCUSABLE_IN_TOUCH_MODE))
        })
    }

    fn in_touch_mode(&self) -> bool {
        self.touch_mode()
    }

    fn has_focusable(&self, node: NodeId) -> bool {
        let touch_mode = self.touch_mode();
        let mut found = false;
        self.visit_visible(node, |id| {
            found = found || self.is_focusable(id, touch_mode);
            !found
        });
        found
    }

    fn explicit_next(&self, root: NodeId, node: NodeId, direction: Direction) -> Option<NodeId> {
        let target = match self.next_focus(node, direction) {
            Some(target) => Some(target),
            None if direction == Direction::Backward => self.find_inside_out(root, node, |id| {
                self.next_focus(id, Direction::Forward) == Some(node)
            }),
            None => None,
        };
        target.filter(|&target| self.is_descendant_of(target, root))
    }

    fn explicit_next_cluster(
        &self,
        root: NodeId,
        node: NodeId,
        direction: Direction,
    ) -> Option<NodeId> {
        let target = match direction {
            Direction::Forward => self.next_cluster(node),
            Direction::Backward => {
                self.find_inside_out(root, node, |id| self.next_cluster(id) == Some(node))
            }
            _ => None,
        };
        target.filter(|&target| self.is_descendant_of(target, root))
    }

    fn layout_is_mirrored(&self, root: NodeId) -> bool {
        self.has_flags(root, NodeFlags::LAYOUT_RTL)
    }

    /// The top-most ancestor of `focused` below `root` that is a cluster with
    /// [`NodeFlags::TOUCHSCREEN_BLOCKS_FOCUS`], or `root`.
    fn effective_root_for(&self, root: NodeId, focused: Option<NodeId>) -> NodeId {
        let Some(focused) = focused.filter(|&focused| focused != root) else {
            return root;
        };
        let blocking = NodeFlags::CLUSTER | NodeFlags::TOUCHSCREEN_BLOCKS_FOCUS;
        let mut effective = None;
        let mut parent = self.parent_of(focused);
        while let Some(current) = parent {
            if current == root {
                return effective.unwrap_or(root);
            }
            if self.has_flags(current, blocking) {
                effective = Some(current);
            }
            parent = self.parent_of(current);
        }
        root
    }

    fn collect_focusables(&self, root: NodeId, _direction: Direction, out: &mut Vec<NodeId>) {
        let touch_mode = self.touch_mode();
        self.visit_visible(root, |id| {
            if self.is_focusable(id, touch_mode) {
                out.push(id);
            }
            true
        });
    }

    /// `root` is the implicit default cluster and is never reported itself.
    fn collect_clusters(&self, root: NodeId, _direction: Direction, out: &mut Vec<NodeId>) {
        self.visit_visible(root, |id| {
            if id != root && self.has_flags(id, NodeFlags::CLUSTER) && self.has_focusable(id) {
                out.push(id);
                return false;
            }
            true
        });
    }

    fn collect_touchables(&self, root: NodeId, out: &mut Vec<NodeId>) {
        self.visit_visible(root, |id| {
            if self.is_touchable(id) {
                out.push(id);
            }
            true
        });
    }
}

impl Scene {
    /// Depth-first pre-order walk over the visible part of `root`'s subtree.
    ///
    /// Invisible nodes are skipped together with their subtrees. `visit`
    /// returns whether to descend into the node's children.
    fn visit_visible(&self, root: NodeId, mut visit: impl FnMut(NodeId) -> bool) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !self.is_visible(id) {
                continue;
            }
            if visit(id) {
                stack.extend(self.children_of(id).iter().rev().copied());
            }
        }
    }

    /// Search outwards from `start`: first its subtree, then each ancestor's
    /// remaining subtree, up to `root`.
    fn find_inside_out(
        &self,
        root: NodeId,
        start: NodeId,
        mut matches: impl FnMut(NodeId) -> bool,
    ) -> Option<NodeId> {
        let mut scope = Some(start);
        let mut searched = None;
        let mut stack = Vec::new();
        while let Some(current) = scope {
            stack.clear();
            stack.push(current);
            while let Some(id) = stack.pop() {
                if Some(id) == searched {
                    continue;
                }
                if matches(id) {
                    return Some(id);
                }
                stack.extend(self.children_of(id).iter().rev().copied());
            }
            if current == root {
                break;
            }
            searched = Some(current);
            scope = self.parent_of(current);
        }
        None
    }
}
