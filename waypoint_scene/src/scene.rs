// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: structure, updates, queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;
use waypoint_focus::Direction;

use crate::types::{LocalNode, NodeFlags, NodeId};

/// A retained tree of nodes with the state focus search needs.
///
/// Nodes carry their bounds in the parent's content coordinates, a scroll
/// offset for their own content, [`NodeFlags`], and author-specified focus
/// links. The scene performs no layout: callers position nodes and then run
/// searches through the [`FocusHost`](waypoint_focus::FocusHost) implementation.
///
/// Mutations take effect immediately. Operations on stale [`NodeId`]s are
/// ignored and queries on them return `None` (or an empty slice).
///
/// ## Example
///
/// ```rust
/// use kurbo::{Rect, Vec2};
/// use waypoint_scene::{LocalNode, Scene};
///
/// let mut scene = Scene::new();
/// let root = scene.insert(
///     None,
///     LocalNode {
///         bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
///         ..LocalNode::default()
///     },
/// );
/// let list = scene.insert(
///     Some(root),
///     LocalNode {
///         bounds: Rect::new(10.0, 10.0, 90.0, 90.0),
///         scroll: Vec2::new(0.0, 40.0),
///         ..LocalNode::default()
///     },
/// );
/// let item = scene.insert(
///     Some(list),
///     LocalNode {
///         bounds: Rect::new(0.0, 50.0, 80.0, 70.0),
///         ..LocalNode::default()
///     },
/// );
///
/// // The item sits 10 down from the list's top edge after scrolling.
/// assert_eq!(
///     scene.rect_in_root(root, item),
///     Some(Rect::new(10.0, 20.0, 90.0, 40.0))
/// );
/// ```
#[derive(Debug, Default)]
pub struct Scene {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    touch_mode: bool,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalNode,
    focus_links: SmallVec<[(Direction, NodeId); 2]>,
    next_cluster: Option<NodeId>,
}

impl Node {
    fn new(generation: u32, local: LocalNode) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
            focus_links: SmallVec::new(),
            next_cluster: None,
        }
    }
}

impl Scene {
    /// Create a new empty scene, not in touch mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node as the last child of `parent` (or as a top-level node if `None`).
    ///
    /// A stale `parent` also yields a top-level node.
    pub fn insert(&mut self, parent: Option<NodeId>, local: LocalNode) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node and its subtree.
    ///
    /// Focus links that point at removed nodes stay in place but no longer
    /// resolve.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.parent_of(id) {
            self.unlink_parent(id, parent);
        }
        let children = self.children_of(id).to_vec();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Update the bounds (in the parent's content coordinates).
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.bounds = bounds;
        }
    }

    /// Update the content scroll offset.
    pub fn set_scroll(&mut self, id: NodeId, scroll: Vec2) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.scroll = scroll;
        }
    }

    /// Update node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.flags = flags;
        }
    }

    /// Set (or with `None`, clear) the node that takes focus after `id` in `direction`.
    ///
    /// Without an explicit Backward link, the Backward successor of a node is the
    /// node whose Forward link names it.
    pub fn set_next_focus(&mut self, id: NodeId, direction: Direction, target: Option<NodeId>) {
        let Some(n) = self.node_opt_mut(id) else {
            return;
        };
        n.focus_links.retain(|(d, _)| *d != direction);
        if let Some(target) = target {
            n.focus_links.push((direction, target));
        }
    }

    /// Set (or with `None`, clear) the cluster that follows the cluster `id`.
    ///
    /// The previous cluster of a node is the one whose next cluster names it.
    pub fn set_next_cluster(&mut self, id: NodeId, target: Option<NodeId>) {
        if let Some(n) = self.node_opt_mut(id) {
            n.next_cluster = target;
        }
    }

    /// Enter or leave touch mode.
    ///
    /// In touch mode only nodes with [`NodeFlags::FOCUSABLE_IN_TOUCH_MODE`] can
    /// take focus.
    pub fn set_touch_mode(&mut self, touch_mode: bool) {
        self.touch_mode = touch_mode;
    }

    /// Whether the scene is in touch mode.
    pub fn touch_mode(&self) -> bool {
        self.touch_mode
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the parent of a node if live, or `None` for top-level nodes or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Get the children of a node, or an empty slice if the node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Returns the local data of a node if the identifier is live.
    pub fn local(&self, id: NodeId) -> Option<&LocalNode> {
        self.node(id).map(|node| &node.local)
    }

    /// Returns the flags of a node if the identifier is live.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node(id).map(|node| node.local.flags)
    }

    /// The focus link stored on `id` for `direction`, live or not.
    pub fn next_focus(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.node(id)?
            .focus_links
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|&(_, target)| target)
    }

    /// The next-cluster link stored on `id`, live or not.
    pub fn next_cluster(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.next_cluster
    }

    /// Whether `node` is `ancestor` or lies in its subtree. False for stale ids.
    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        if !self.is_alive(ancestor) {
            return false;
        }
        let mut current = Some(node).filter(|&id| self.is_alive(id));
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent_of(id);
        }
        false
    }

    /// The bounds of `node` in `root`'s content coordinates.
    ///
    /// Every ancestor strictly between the two contributes its origin minus its
    /// scroll offset. For `root` itself this is its visible area in its own
    /// content coordinates. A node outside `root`'s subtree is mapped into the
    /// coordinates of its own top-level ancestor. Returns `None` for stale ids.
    pub fn rect_in_root(&self, root: NodeId, node: NodeId) -> Option<Rect> {
        let local = &self.node(node)?.local;
        if node == root {
            return Some(local.bounds.with_origin(Point::ZERO) + local.scroll);
        }
        let mut rect = local.bounds;
        let mut ancestor = self.parent_of(node);
        while let Some(current) = ancestor
            && current != root
        {
            let a = &self.node(current)?.local;
            rect = rect + (a.bounds.origin().to_vec2() - a.scroll);
            ancestor = self.parent_of(current);
        }
        Some(rect)
    }

    pub(crate) fn has_flags(&self, id: NodeId, flags: NodeFlags) -> bool {
        self.flags(id).is_some_and(|f| f.contains(flags))
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .filter(|n| n.generation == id.1)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let Some(parent_node) = self.node_opt_mut(parent) else {
            return;
        };
        parent_node.children.push(id);
        if let Some(node) = self.node_opt_mut(id) {
            node.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(node) = self.node_opt_mut(id) {
            node.parent = None;
        }
    }
}
