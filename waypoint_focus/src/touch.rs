// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest touchable element from a point.

use crate::Candidate;
use crate::direction::AbsoluteDirection;
use crate::geometry::{Offset, Rect, saturate};

/// Find the touchable nearest to `(x, y)` in `direction`.
///
/// A touchable qualifies when it lies in `direction` from the point and spans
/// the point on the other axis. Going left or up its distance is measured from
/// the point to its near edge. Going right or down the distance is the
/// coordinate of its near edge itself, not an offset from the point. A touchable
/// is only admitted below `edge_slop`. Among admitted touchables one nested
/// inside the current best always replaces it, so the innermost element wins;
/// otherwise a strictly smaller distance wins, unless the newcomer encloses the
/// current best.
///
/// On every accepted improvement the signed offset to the element's edge is
/// written to the matching axis of `deltas`; the other axis is left as it was.
pub fn find_nearest_touchable<K: Copy>(
    x: i32,
    y: i32,
    direction: AbsoluteDirection,
    edge_slop: i32,
    touchables: &[Candidate<K>],
    deltas: &mut Offset,
) -> Option<K> {
    let mut closest: Option<(K, Rect)> = None;
    let mut min_distance = i64::MAX;
    let edge_slop = i64::from(edge_slop);

    for touchable in touchables {
        let bounds = touchable.bounds;
        if !is_touch_candidate(x, y, &bounds, direction) {
            continue;
        }

        let distance = match direction {
            AbsoluteDirection::Left => i64::from(x) - i64::from(bounds.right) + 1,
            AbsoluteDirection::Right => i64::from(bounds.left),
            AbsoluteDirection::Up => i64::from(y) - i64::from(bounds.bottom) + 1,
            AbsoluteDirection::Down => i64::from(bounds.top),
        };
        if distance >= edge_slop {
            continue;
        }

        let better = match &closest {
            None => true,
            Some((_, best)) => {
                best.contains(&bounds) || (!bounds.contains(best) && distance < min_distance)
            }
        };
        if !better {
            continue;
        }

        min_distance = distance;
        closest = Some((touchable.id, bounds));
        match direction {
            AbsoluteDirection::Left => deltas.dx = saturate(-distance),
            AbsoluteDirection::Right => deltas.dx = saturate(distance),
            AbsoluteDirection::Up => deltas.dy = saturate(-distance),
            AbsoluteDirection::Down => deltas.dy = saturate(distance),
        }
    }

    closest.map(|(id, _)| id)
}

/// Whether `dest` lies in `direction` from the point and spans it on the minor axis.
fn is_touch_candidate(x: i32, y: i32, dest: &Rect, direction: AbsoluteDirection) -> bool {
    match direction {
        AbsoluteDirection::Left => dest.left <= x && dest.top <= y && y <= dest.bottom,
        AbsoluteDirection::Right => dest.left >= x && dest.top <= y && y <= dest.bottom,
        AbsoluteDirection::Up => dest.top <= y && dest.left <= x && x <= dest.right,
        AbsoluteDirection::Down => dest.top >= y && dest.left <= x && x <= dest.right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use AbsoluteDirection::{Down, Left, Right, Up};

    fn entry(id: u32, left: i32, top: i32, right: i32, bottom: i32) -> Candidate<u32> {
        Candidate {
            id,
            bounds: Rect::new(left, top, right, bottom),
        }
    }

    #[test]
    fn left_picks_closest_edge_and_writes_dx() {
        let touchables = vec![entry(1, 0, 0, 20, 100), entry(2, 30, 0, 60, 100)];
        let mut deltas = Offset { dx: 0, dy: 7 };
        let found = find_nearest_touchable(80, 50, Left, 100, &touchables, &mut deltas);
        assert_eq!(found, Some(2));
        // 80 - 60 + 1
        assert_eq!(deltas, Offset { dx: -21, dy: 7 });
    }

    #[test]
    fn right_and_down_use_the_near_edge_coordinate() {
        let touchables = vec![entry(1, 50, 0, 60, 100), entry(2, 0, 40, 100, 60)];
        let mut deltas = Offset::default();
        assert_eq!(
            find_nearest_touchable(10, 20, Right, 100, &touchables, &mut deltas),
            Some(1)
        );
        assert_eq!(deltas.dx, 50);
        assert_eq!(
            find_nearest_touchable(10, 20, Down, 100, &touchables, &mut deltas),
            Some(2)
        );
        assert_eq!(deltas, Offset { dx: 50, dy: 40 });

        // The edge at 50 is 40 away from the point but still outside a slop of 45.
        let mut deltas = Offset::default();
        assert_eq!(
            find_nearest_touchable(10, 20, Right, 45, &touchables, &mut deltas),
            None
        );
        assert_eq!(deltas, Offset::default());
    }

    #[test]
    fn full_range_touchables_do_not_overflow() {
        let touchables = vec![entry(1, i32::MIN, i32::MIN, i32::MAX, i32::MAX)];
        let mut deltas = Offset::default();
        // x - right + 1 underflows `i32` but not the widened distance.
        assert_eq!(
            find_nearest_touchable(i32::MIN, 0, Left, 1, &touchables, &mut deltas),
            Some(1)
        );
        assert_eq!(deltas.dx, i32::MAX);
        assert_eq!(
            find_nearest_touchable(0, i32::MIN, Up, 1, &touchables, &mut deltas),
            Some(1)
        );
        assert_eq!(deltas.dy, i32::MAX);
    }

    #[test]
    fn edge_slop_rejects_far_touchables() {
        let touchables = vec![entry(1, 0, 0, 10, 10)];
        let mut deltas = Offset::default();
        // Distance is 100 - 10 + 1 = 91.
        assert_eq!(
            find_nearest_touchable(100, 5, Left, 91, &touchables, &mut deltas),
            None
        );
        assert_eq!(deltas, Offset::default());
        assert_eq!(
            find_nearest_touchable(100, 5, Left, 92, &touchables, &mut deltas),
            Some(1)
        );
    }

    #[test]
    fn innermost_wins_over_distance() {
        // The outer container is closer on the major axis but contains the inner one.
        let touchables = vec![entry(1, 0, 0, 200, 200), entry(2, 10, 10, 50, 50)];
        let mut deltas = Offset::default();
        let found = find_nearest_touchable(20, 190, Up, 1_000, &touchables, &mut deltas);
        assert_eq!(found, Some(2));
        assert_eq!(deltas.dy, -(190 - 50 + 1));

        // Order does not matter: an enclosing container never replaces its child.
        let reversed = vec![touchables[1], touchables[0]];
        let found = find_nearest_touchable(20, 190, Up, 1_000, &reversed, &mut deltas);
        assert_eq!(found, Some(2));
    }

    #[test]
    fn off_axis_touchables_are_skipped() {
        let touchables = vec![entry(1, 0, 200, 10, 210)];
        let mut deltas = Offset::default();
        assert_eq!(
            find_nearest_touchable(50, 50, Left, 1_000, &touchables, &mut deltas),
            None
        );
    }
}
