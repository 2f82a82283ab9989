// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric search in one of the four absolute directions.

use crate::Candidate;
use crate::direction::AbsoluteDirection;
use crate::geometry::{Rect, saturate};
use crate::predicates::is_better_candidate;

/// Find the best candidate in `direction` from `source`.
///
/// `candidates` must already exclude the element being navigated away from.
/// Candidates are scanned in order and a later one only replaces the running
/// best when it is strictly better, so ties go to the earlier candidate.
pub fn find_in_absolute_direction<K: Copy>(
    source: Rect,
    direction: AbsoluteDirection,
    candidates: &[Candidate<K>],
) -> Option<K> {
    let mut best_rect = seed_best(source, direction);
    let mut best = None;

    for candidate in candidates {
        if is_better_candidate(direction, &source, &candidate.bounds, &best_rect) {
            best_rect = candidate.bounds;
            best = Some(candidate.id);
        }
    }
    best
}

/// A rect just behind `source`, so that any real candidate improves on it.
fn seed_best(source: Rect, direction: AbsoluteDirection) -> Rect {
    let dx = saturate(source.width() + 1);
    let dy = saturate(source.height() + 1);
    match direction {
        AbsoluteDirection::Left => source.offset(dx, 0),
        AbsoluteDirection::Right => source.offset(-dx, 0),
        AbsoluteDirection::Up => source.offset(0, dy),
        AbsoluteDirection::Down => source.offset(0, -dy),
    }
}
