// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepping between keyboard navigation clusters.

use crate::direction::Direction;

/// Result of a cluster step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClusterTarget<K> {
    /// A cluster root from the candidate list.
    Cluster(K),
    /// The implicit default cluster, i.e. the root of the search.
    Root,
}

impl<K> ClusterTarget<K> {
    /// Resolve [`ClusterTarget::Root`] to a concrete root handle.
    pub fn unwrap_or_root(self, root: K) -> K {
        match self {
            Self::Cluster(cluster) => cluster,
            Self::Root => root,
        }
    }
}

/// Step from `current` through `ordered` clusters in `direction`.
///
/// `None` as `current` stands for the implicit default cluster. Stepping from it
/// enters the first cluster (or the last, going back). Stepping past either end
/// of the list returns to the default cluster instead of wrapping around, so a
/// full cycle visits the default cluster once. Right and Down step like Forward,
/// Left and Up like Backward. An empty list yields `None`.
pub fn step_cluster<K: Copy + PartialEq>(
    ordered: &[K],
    current: Option<K>,
    direction: Direction,
) -> Option<ClusterTarget<K>> {
    let (first, last) = (ordered.first()?, ordered.last()?);
    let Some(current) = current else {
        return Some(ClusterTarget::Cluster(if direction.advances() {
            *first
        } else {
            *last
        }));
    };

    let neighbor = if direction.advances() {
        ordered
            .iter()
            .rposition(|&k| k == current)
            .and_then(|pos| ordered.get(pos + 1))
    } else {
        ordered
            .iter()
            .position(|&k| k == current)
            .and_then(|pos| pos.checked_sub(1))
            .and_then(|pos| ordered.get(pos))
    };
    Some(neighbor.map_or(ClusterTarget::Root, |&k| ClusterTarget::Cluster(k)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLUSTERS: [u32; 3] = [10, 20, 30];

    #[test]
    fn default_cluster_enters_at_either_end() {
        assert_eq!(
            step_cluster(&CLUSTERS, None, Direction::Forward),
            Some(ClusterTarget::Cluster(10))
        );
        assert_eq!(
            step_cluster(&CLUSTERS, None, Direction::Backward),
            Some(ClusterTarget::Cluster(30))
        );
    }

    #[test]
    fn ends_return_to_root_not_around() {
        assert_eq!(
            step_cluster(&CLUSTERS, Some(30), Direction::Forward),
            Some(ClusterTarget::Root)
        );
        assert_eq!(
            step_cluster(&CLUSTERS, Some(10), Direction::Backward),
            Some(ClusterTarget::Root)
        );
        assert_eq!(
            step_cluster(&CLUSTERS, Some(20), Direction::Forward),
            Some(ClusterTarget::Cluster(30))
        );
        assert_eq!(
            step_cluster(&CLUSTERS, Some(20), Direction::Backward),
            Some(ClusterTarget::Cluster(10))
        );
    }

    #[test]
    fn arrows_map_to_forward_and_backward() {
        assert_eq!(
            step_cluster(&CLUSTERS, Some(10), Direction::Down),
            Some(ClusterTarget::Cluster(20))
        );
        assert_eq!(
            step_cluster(&CLUSTERS, Some(10), Direction::Right),
            Some(ClusterTarget::Cluster(20))
        );
        assert_eq!(
            step_cluster(&CLUSTERS, Some(20), Direction::Up),
            Some(ClusterTarget::Cluster(10))
        );
        assert_eq!(
            step_cluster(&CLUSTERS, Some(20), Direction::Left),
            Some(ClusterTarget::Cluster(10))
        );
    }

    #[test]
    fn unknown_current_returns_to_root() {
        assert_eq!(
            step_cluster(&CLUSTERS, Some(99), Direction::Forward),
            Some(ClusterTarget::Root)
        );
    }

    #[test]
    fn single_cluster_round_trip() {
        assert_eq!(
            step_cluster(&[5_u32], None, Direction::Forward),
            Some(ClusterTarget::Cluster(5))
        );
        assert_eq!(
            step_cluster(&[5_u32], Some(5), Direction::Forward),
            Some(ClusterTarget::Root)
        );
        assert_eq!(step_cluster::<u32>(&[], None, Direction::Forward), None);
        assert_eq!(ClusterTarget::Root.unwrap_or_root(1_u32), 1);
    }
}
