// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of author-specified "next focus" chains.
//!
//! Candidates are addressed by their dense index in the current candidate list.
//! Override edges that point outside the list are dropped. Every maximal path
//! that starts at a node without an incoming edge becomes a chain with that node
//! as its head. Several starts may run into the same node (a "hydra"); the
//! first chain resolved keeps its head and later branches are relabelled to it.
//! Links that only form a loop have no start, so their nodes stay unchained and
//! keep their original position.

use alloc::vec::Vec;

/// Sort key of one candidate: chain position, rank within the chain, distance
/// from its chain start.
pub(crate) type ChainKey = (usize, u8, usize);

const RANK_HEAD: u8 = 0;
const RANK_INTERIOR: u8 = 1;
const RANK_TAIL: u8 = 2;

/// Reusable scratch for chain resolution, indexed by candidate position.
#[derive(Debug, Default)]
pub(crate) struct ChainResolver {
    next: Vec<Option<usize>>,
    has_incoming: Vec<bool>,
    head: Vec<Option<usize>>,
    depth: Vec<usize>,
    /// Earliest member position, indexed by head.
    anchor: Vec<usize>,
    order: Vec<usize>,
}

impl ChainResolver {
    /// Resolve chains over `len` candidates.
    ///
    /// `next_of(i)` returns the position of the override target of candidate
    /// `i`, or `None` when it has none or the target is not a candidate.
    pub(crate) fn resolve(&mut self, len: usize, mut next_of: impl FnMut(usize) -> Option<usize>) {
        self.clear();
        self.next.resize(len, None);
        self.has_incoming.resize(len, false);
        self.head.resize(len, None);
        self.depth.resize(len, 0);
        self.anchor.extend(0..len);

        for i in (0..len).rev() {
            if let Some(target) = next_of(i).filter(|&t| t < len) {
                self.next[i] = Some(target);
                self.has_incoming[target] = true;
            }
        }

        for i in (0..len).rev() {
            if self.next[i].is_some() && !self.has_incoming[i] {
                self.set_head_of_chain(i);
            }
        }

        for i in 0..len {
            if let Some(head) = self.head[i] {
                self.anchor[head] = self.anchor[head].min(i);
            }
        }

        let unresolved = (0..len)
            .filter(|&i| self.next[i].is_some() && self.head[i].is_none())
            .count();
        if unresolved > 0 {
            tracing::debug!(
                unresolved,
                "focus override links form a cycle; those candidates keep their original order"
            );
        }
    }

    fn set_head_of_chain(&mut self, start: usize) {
        let mut node = start;
        let mut depth = 0;
        loop {
            match self.head[node] {
                // The chain runs into a loop of its own.
                Some(head) if head == start => {
                    tracing::debug!(start, node, "focus override chain loops back on itself");
                    return;
                }
                Some(other) => {
                    self.adopt_head(start, other);
                    return;
                }
                None => {
                    self.head[node] = Some(start);
                    self.depth[node] = depth;
                }
            }
            match self.next[node] {
                Some(next) => {
                    node = next;
                    depth += 1;
                }
                None => return,
            }
        }
    }

    /// Relabel the branch starting at `start` so it joins the chain headed by `head`.
    fn adopt_head(&mut self, start: usize, head: usize) {
        let mut cursor = Some(start);
        let mut depth = 0;
        while let Some(node) = cursor {
            if self.head[node] != Some(start) {
                break;
            }
            self.head[node] = Some(head);
            self.depth[node] = depth;
            depth += 1;
            cursor = self.next[node];
        }
    }

    /// The head of the chain containing candidate `i`, if any.
    #[cfg(test)]
    fn head_of(&self, i: usize) -> Option<usize> {
        self.head.get(i).copied().flatten()
    }

    /// The sort key of candidate `i`.
    ///
    /// Unchained candidates sort at their own position. Chained ones sort at the
    /// position of their chain's earliest member, with the head first, then the
    /// nodes that still have a successor, then the tail.
    pub(crate) fn sort_key(&self, i: usize) -> ChainKey {
        match self.head[i] {
            None => (i, RANK_HEAD, 0),
            Some(head) => {
                let rank = if head == i {
                    RANK_HEAD
                } else if self.next[i].is_some() {
                    RANK_INTERIOR
                } else {
                    RANK_TAIL
                };
                (self.anchor[head], rank, self.depth[i])
            }
        }
    }

    /// Candidate positions in chain order. Stable for equal keys.
    pub(crate) fn ordering(&mut self) -> &[usize] {
        let len = self.head.len();
        let mut order = core::mem::take(&mut self.order);
        order.clear();
        order.extend(0..len);
        order.sort_by_key(|&i| self.sort_key(i));
        self.order = order;
        &self.order
    }

    /// Reset all scratch, keeping allocations.
    pub(crate) fn clear(&mut self) {
        self.next.clear();
        self.has_incoming.clear();
        self.head.clear();
        self.depth.clear();
        self.anchor.clear();
        self.order.clear();
    }

    #[cfg(test)]
    fn is_clear(&self) -> bool {
        self.next.is_empty()
            && self.has_incoming.is_empty()
            && self.head.is_empty()
            && self.depth.is_empty()
            && self.anchor.is_empty()
            && self.order.is_empty()
    }
}
