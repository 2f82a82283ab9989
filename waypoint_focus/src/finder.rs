// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus search engine and its host-driven entry points.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::Candidate;
use crate::absolute::find_in_absolute_direction;
use crate::chain::ChainResolver;
use crate::cluster::{ClusterTarget, step_cluster};
use crate::direction::{
    AbsoluteDirection, Direction, DirectionError, DirectionKind, RelativeDirection,
};
use crate::geometry::{Offset, Rect};
use crate::host::FocusHost;
use crate::relative::step_in_order;
use crate::sorter::sort_reading_order;
use crate::touch::find_nearest_touchable;

/// Tunables of a [`FocusFinder`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FinderConfig {
    /// Touchables are only admitted by [`FocusFinder::find_nearest_touchable`]
    /// while their distance from the point is below this value.
    ///
    /// The default of `0` only admits touchables that already cover the point
    /// on the search axis.
    pub edge_slop: i32,
}

/// Focus search engine.
///
/// A finder owns the scratch buffers used by the searches (collected nodes,
/// candidate bounds, the handle-to-index map and the chain resolver). They are
/// emptied before every call returns, so nothing observed in one call leaks into
/// the next. The finder is meant to live next to the tree it searches, one per
/// UI thread, and needs `&mut self` for every search.
///
/// `K` is the element handle. The host-driven entry points
/// ([`FocusFinder::find_next_focus`] and friends) take a [`FocusHost`] whose
/// `Node` is `K`; the remaining ones work on caller-built candidate lists.
#[derive(Debug)]
pub struct FocusFinder<K> {
    config: FinderConfig,
    nodes: Vec<K>,
    candidates: Vec<Candidate<K>>,
    ordinals: HashMap<K, usize>,
    chains: ChainResolver,
    ordered: Vec<K>,
}

impl<K> Default for FocusFinder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FocusFinder<K> {
    /// Create a finder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FinderConfig::default())
    }

    /// Create a finder with `config`.
    pub fn with_config(config: FinderConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            candidates: Vec::new(),
            ordinals: HashMap::new(),
            chains: ChainResolver::default(),
            ordered: Vec::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: FinderConfig) {
        self.config = config;
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.candidates.clear();
        self.ordinals.clear();
        self.chains.clear();
        self.ordered.clear();
    }

    #[cfg(test)]
    fn scratch_is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.candidates.is_empty()
            && self.ordinals.is_empty()
            && self.ordered.is_empty()
    }
}

impl<K: Copy + Eq + Hash> FocusFinder<K> {
    /// Append `candidates` to `out` in traversal order.
    ///
    /// The candidates are first put into reading order (see
    /// [`sort_reading_order`](crate::sort_reading_order)), then every chain of
    /// author-specified successors reported by `explicit_next` is pulled together
    /// at the position of its earliest member. Successors that are not in
    /// `candidates` are ignored, and links that only form a loop leave their
    /// members in reading order.
    pub fn reading_order(
        &mut self,
        candidates: &[Candidate<K>],
        mirrored: bool,
        explicit_next: impl FnMut(K) -> Option<K>,
        out: &mut Vec<K>,
    ) {
        self.candidates.extend_from_slice(candidates);
        self.order_scratch(mirrored, explicit_next);
        out.extend_from_slice(&self.ordered);
        self.clear();
    }

    /// Step Forward or Backward from `focused` through `candidates` in traversal order.
    ///
    /// See [`FocusFinder::reading_order`] for the order and
    /// [`step_in_order`](crate::step_in_order) for the stepping rules.
    pub fn find_in_relative_direction(
        &mut self,
        focused: Option<K>,
        direction: RelativeDirection,
        candidates: &[Candidate<K>],
        mirrored: bool,
        explicit_next: impl FnMut(K) -> Option<K>,
    ) -> Option<K> {
        self.candidates.extend_from_slice(candidates);
        let found = self.relative_in_scratch(focused, direction, mirrored, explicit_next);
        self.clear();
        found
    }

    /// Step from the cluster `current` to the next or previous cluster.
    ///
    /// `clusters` are ordered like [`FocusFinder::reading_order`] does, using
    /// `explicit_next` as the cluster successor. `None` as `current` and
    /// [`ClusterTarget::Root`] as the result both stand for the implicit default
    /// cluster.
    pub fn find_next_cluster(
        &mut self,
        current: Option<K>,
        direction: Direction,
        clusters: &[Candidate<K>],
        mirrored: bool,
        explicit_next: impl FnMut(K) -> Option<K>,
    ) -> Option<ClusterTarget<K>> {
        self.candidates.extend_from_slice(clusters);
        let found = self.cluster_in_scratch(current, direction, mirrored, explicit_next);
        self.clear();
        found
    }

    /// Find the element that should take focus after `focused` in `direction`.
    ///
    /// The search is confined to [`FocusHost::effective_root_for`]. An
    /// author-specified successor that can take focus wins outright. Otherwise
    /// Forward and Backward step through the traversal order of the focusables
    /// and the four arrows run the geometric search from the focused element's
    /// bounds. With nothing focused, arrows and traversal start from a corner of
    /// the visible area: the top-left one for Right, Down and Forward, the
    /// bottom-right one otherwise.
    pub fn find_next_focus<H>(
        &mut self,
        host: &H,
        root: K,
        focused: Option<K>,
        direction: Direction,
    ) -> Option<K>
    where
        H: FocusHost<Node = K> + ?Sized,
    {
        let effective = host.effective_root_for(root, focused);
        if let Some(next) =
            focused.and_then(|node| find_user_specified_focus(host, effective, node, direction))
        {
            return Some(next);
        }
        let source = match focused {
            Some(node) => host.bounds_in_root(effective, node),
            None => start_rect(host.viewport_in_root(effective), direction),
        };
        self.search_focusables(host, effective, focused, source, direction)
    }

    /// Find the element that should take focus when moving in `direction` from `rect`.
    ///
    /// `rect` is in `root`'s coordinate space. Nothing is treated as focused, so
    /// author-specified successors do not apply.
    pub fn find_next_focus_from_rect<H>(
        &mut self,
        host: &H,
        root: K,
        rect: Rect,
        direction: Direction,
    ) -> Option<K>
    where
        H: FocusHost<Node = K> + ?Sized,
    {
        let effective = host.effective_root_for(root, None);
        self.search_focusables(host, effective, None, rect, direction)
    }

    /// Find the keyboard navigation cluster after `current` in `direction`.
    ///
    /// An author-specified successor cluster wins when it has something
    /// focusable. Otherwise the clusters under `root` are stepped through in
    /// traversal order; stepping past either end, or from `None`, goes through
    /// `root` itself.
    pub fn find_next_keyboard_navigation_cluster<H>(
        &mut self,
        host: &H,
        root: K,
        current: Option<K>,
        direction: Direction,
    ) -> Option<K>
    where
        H: FocusHost<Node = K> + ?Sized,
    {
        if let Some(next) = current
            .and_then(|cluster| host.explicit_next_cluster(root, cluster, direction))
            .filter(|&next| host.has_focusable(next))
        {
            return Some(next);
        }

        host.collect_clusters(root, direction, &mut self.nodes);
        let found = if self.nodes.is_empty() {
            None
        } else {
            self.candidates
                .extend(self.nodes.iter().map(|&id| Candidate {
                    id,
                    bounds: host.bounds_in_root(root, id),
                }));
            let mirrored = host.layout_is_mirrored(root);
            self.cluster_in_scratch(current, direction, mirrored, |node| {
                host.explicit_next_cluster(root, node, Direction::Forward)
            })
        };
        self.clear();
        found.map(|target| target.unwrap_or_root(root))
    }

    /// Find the touchable under `root` nearest to `(x, y)` in `direction`.
    ///
    /// Runs [`find_nearest_touchable`](crate::find_nearest_touchable) over the
    /// host's touchables with the configured edge slop. Forward and Backward
    /// have no meaning for a point and are rejected.
    pub fn find_nearest_touchable<H>(
        &mut self,
        host: &H,
        root: K,
        x: i32,
        y: i32,
        direction: Direction,
        deltas: &mut Offset,
    ) -> Result<Option<K>, DirectionError>
    where
        H: FocusHost<Node = K> + ?Sized,
    {
        let direction = AbsoluteDirection::try_from(direction)?;
        host.collect_touchables(root, &mut self.nodes);
        self.candidates
            .extend(self.nodes.iter().map(|&id| Candidate {
                id,
                bounds: host.touch_bounds_in_root(root, id),
            }));
        let found = find_nearest_touchable(
            x,
            y,
            direction,
            self.config.edge_slop,
            &self.candidates,
            deltas,
        );
        tracing::trace!(
            ?direction,
            candidates = self.candidates.len(),
            found = found.is_some(),
            "nearest touchable search"
        );
        self.clear();
        Ok(found)
    }

    fn search_focusables<H>(
        &mut self,
        host: &H,
        root: K,
        focused: Option<K>,
        source: Rect,
        direction: Direction,
    ) -> Option<K>
    where
        H: FocusHost<Node = K> + ?Sized,
    {
        host.collect_focusables(root, direction, &mut self.nodes);
        let found = if self.nodes.is_empty() {
            None
        } else {
            match direction.kind() {
                DirectionKind::Relative(relative) => {
                    self.candidates
                        .extend(self.nodes.iter().map(|&id| Candidate {
                            id,
                            bounds: host.bounds_in_root(root, id),
                        }));
                    let mirrored = host.layout_is_mirrored(root);
                    self.relative_in_scratch(focused, relative, mirrored, |node| {
                        host.explicit_next(root, node, Direction::Forward)
                    })
                }
                DirectionKind::Absolute(absolute) => {
                    self.candidates.extend(
                        self.nodes
                            .iter()
                            .filter(|&&id| id != root && Some(id) != focused)
                            .map(|&id| Candidate {
                                id,
                                bounds: host.bounds_in_root(root, id),
                            }),
                    );
                    let found = find_in_absolute_direction(source, absolute, &self.candidates);
                    tracing::trace!(
                        direction = ?absolute,
                        candidates = self.candidates.len(),
                        found = found.is_some(),
                        "absolute focus search"
                    );
                    found
                }
            }
        };
        self.clear();
        found
    }

    fn relative_in_scratch(
        &mut self,
        focused: Option<K>,
        direction: RelativeDirection,
        mirrored: bool,
        explicit_next: impl FnMut(K) -> Option<K>,
    ) -> Option<K> {
        if self.candidates.len() < 2 {
            return None;
        }
        self.order_scratch(mirrored, explicit_next);
        let found = step_in_order(&self.ordered, focused, direction);
        tracing::trace!(
            ?direction,
            candidates = self.ordered.len(),
            found = found.is_some(),
            "relative focus search"
        );
        found
    }

    fn cluster_in_scratch(
        &mut self,
        current: Option<K>,
        direction: Direction,
        mirrored: bool,
        explicit_next: impl FnMut(K) -> Option<K>,
    ) -> Option<ClusterTarget<K>> {
        self.order_scratch(mirrored, explicit_next);
        let found = step_cluster(&self.ordered, current, direction);
        tracing::trace!(
            ?direction,
            clusters = self.ordered.len(),
            found = found.is_some(),
            to_root = matches!(found, Some(ClusterTarget::Root)),
            "cluster search"
        );
        found
    }

    /// Sort the scratch candidates into traversal order, leaving it in `self.ordered`.
    fn order_scratch(&mut self, mirrored: bool, mut explicit_next: impl FnMut(K) -> Option<K>) {
        sort_reading_order(&mut self.candidates, mirrored);

        self.ordinals.clear();
        for (index, candidate) in self.candidates.iter().enumerate() {
            self.ordinals.entry(candidate.id).or_insert(index);
        }

        let candidates = &self.candidates;
        let ordinals = &self.ordinals;
        self.chains.resolve(candidates.len(), |index| {
            explicit_next(candidates[index].id).and_then(|target| ordinals.get(&target).copied())
        });

        self.ordered.clear();
        let order = self.chains.ordering();
        self.ordered
            .extend(order.iter().map(|&index| candidates[index].id));
    }
}

/// Follow author-specified successors from `focused` until one can take focus.
///
/// The walk stops with `None` when the links end or loop without reaching such
/// an element. Loops are detected by a second cursor advancing every other step.
fn find_user_specified_focus<H>(
    host: &H,
    root: H::Node,
    focused: H::Node,
    direction: Direction,
) -> Option<H::Node>
where
    H: FocusHost + ?Sized,
{
    let touch_mode = host.in_touch_mode();
    let mut next = host.explicit_next(root, focused, direction);
    let mut cycle_check = next;
    let mut cycle_step = true;
    while let Some(node) = next {
        if host.is_visible(node) && host.is_focusable(node, touch_mode) {
            return Some(node);
        }
        next = host.explicit_next(root, node, direction);
        cycle_step = !cycle_step;
        if cycle_step {
            cycle_check = cycle_check.and_then(|check| host.explicit_next(root, check, direction));
            if next.is_some() && cycle_check == next {
                tracing::debug!(
                    ?direction,
                    "author-specified focus links loop without a focusable element"
                );
                return None;
            }
        }
    }
    None
}

/// A zero-sized rect at the corner of `viewport` a search in `direction` starts from.
fn start_rect(viewport: Rect, direction: Direction) -> Rect {
    if direction.advances() {
        Rect::from_point(viewport.left, viewport.top)
    } else {
        Rect::from_point(viewport.right, viewport.bottom)
    }
}
