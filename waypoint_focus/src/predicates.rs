// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry predicates for directional search.
//!
//! All functions are pure and take the source rectangle first. The "beam" of a
//! source is the infinite strip spanned by its extent on the minor axis; the
//! major axis is the one the search moves along.

use crate::direction::AbsoluteDirection;
use crate::geometry::Rect;

/// Weight applied to the squared major-axis distance.
///
/// Tuned so that staying in line with the source is strongly preferred over a
/// closer candidate that is off to the side.
pub const MAJOR_AXIS_WEIGHT: i64 = 13;

/// Whether `dest` lies at least partially in `direction` from `source`.
///
/// Also covers the zero-sized source used when searching from a point.
pub fn is_candidate(source: &Rect, dest: &Rect, direction: AbsoluteDirection) -> bool {
    match direction {
        AbsoluteDirection::Left => {
            (source.right > dest.right || source.left >= dest.right) && source.left > dest.left
        }
        AbsoluteDirection::Right => {
            (source.left < dest.left || source.right <= dest.left) && source.right < dest.right
        }
        AbsoluteDirection::Up => {
            (source.bottom > dest.bottom || source.top >= dest.bottom) && source.top > dest.top
        }
        AbsoluteDirection::Down => {
            (source.top < dest.top || source.bottom <= dest.top) && source.bottom < dest.bottom
        }
    }
}

/// Whether the beams of `rect1` and `rect2` overlap along the minor axis of `direction`.
pub fn beams_overlap(direction: AbsoluteDirection, rect1: &Rect, rect2: &Rect) -> bool {
    if direction.is_horizontal() {
        rect2.bottom > rect1.top && rect2.top < rect1.bottom
    } else {
        rect2.right > rect1.left && rect2.left < rect1.right
    }
}

/// Whether `dest` is entirely in `direction` from `source`. Touching edges count.
pub fn is_to_direction_of(direction: AbsoluteDirection, source: &Rect, dest: &Rect) -> bool {
    match direction {
        AbsoluteDirection::Left => source.left >= dest.right,
        AbsoluteDirection::Right => source.right <= dest.left,
        AbsoluteDirection::Up => source.top >= dest.bottom,
        AbsoluteDirection::Down => source.bottom <= dest.top,
    }
}

/// Gap between the leading edge of `source` and the near edge of `dest`.
///
/// Zero when `dest` is not strictly ahead of `source`.
pub fn major_axis_distance(direction: AbsoluteDirection, source: &Rect, dest: &Rect) -> i64 {
    let raw = match direction {
        AbsoluteDirection::Left => gap(source.left, dest.right),
        AbsoluteDirection::Right => gap(dest.left, source.right),
        AbsoluteDirection::Up => gap(source.top, dest.bottom),
        AbsoluteDirection::Down => gap(dest.top, source.bottom),
    };
    raw.max(0)
}

/// Distance from the leading edge of `source` to the far edge of `dest`.
///
/// Never below 1, so it can break ties against [`major_axis_distance`].
pub fn major_axis_distance_to_far_edge(
    direction: AbsoluteDirection,
    source: &Rect,
    dest: &Rect,
) -> i64 {
    let raw = match direction {
        AbsoluteDirection::Left => gap(source.left, dest.left),
        AbsoluteDirection::Right => gap(dest.right, source.right),
        AbsoluteDirection::Up => gap(source.top, dest.top),
        AbsoluteDirection::Down => gap(dest.bottom, source.bottom),
    };
    raw.max(1)
}

/// Distance between the centers of `source` and `dest` on the minor axis.
pub fn minor_axis_distance(direction: AbsoluteDirection, source: &Rect, dest: &Rect) -> i64 {
    if direction.is_horizontal() {
        gap(source.center_y(), dest.center_y()).abs()
    } else {
        gap(source.center_x(), dest.center_x()).abs()
    }
}

/// Combine major and minor axis distances into one score. Lower is closer.
///
/// Saturates at `i64::MAX` for distances spanning most of the `i32` range.
pub fn weighted_distance(major: i64, minor: i64) -> i64 {
    MAJOR_AXIS_WEIGHT
        .saturating_mul(major.saturating_mul(major))
        .saturating_add(minor.saturating_mul(minor))
}

/// `to - from`, widened so that it cannot overflow.
fn gap(to: i32, from: i32) -> i64 {
    i64::from(to) - i64::from(from)
}

/// Whether `rect1` beats `rect2` by being exclusively in the beam of `source`.
///
/// For horizontal directions, being in the beam always wins. For vertical ones
/// the beam only wins while `rect1` is not farther away than all of `rect2`:
/// going down, an out-of-beam `rect2` whose far edge is closer than the near edge
/// of `rect1` still wins.
pub fn beam_beats(direction: AbsoluteDirection, source: &Rect, rect1: &Rect, rect2: &Rect) -> bool {
    let rect1_in_beam = beams_overlap(direction, source, rect1);
    let rect2_in_beam = beams_overlap(direction, source, rect2);

    if rect2_in_beam || !rect1_in_beam {
        return false;
    }

    // rect2 can be reached by moving along another axis first.
    if !is_to_direction_of(direction, source, rect2) {
        return true;
    }

    if direction.is_horizontal() {
        return true;
    }

    major_axis_distance(direction, source, rect1)
        < major_axis_distance_to_far_edge(direction, source, rect2)
}

/// Whether `rect1` is a better result than the current best `rect2` for a search
/// from `source` in `direction`.
pub fn is_better_candidate(
    direction: AbsoluteDirection,
    source: &Rect,
    rect1: &Rect,
    rect2: &Rect,
) -> bool {
    if !is_candidate(source, rect1, direction) {
        return false;
    }
    if !is_candidate(source, rect2, direction) {
        return true;
    }
    if beam_beats(direction, source, rect1, rect2) {
        return true;
    }
    if beam_beats(direction, source, rect2, rect1) {
        return false;
    }
    score(direction, source, rect1) < score(direction, source, rect2)
}

fn score(direction: AbsoluteDirection, source: &Rect, dest: &Rect) -> i64 {
    weighted_distance(
        major_axis_distance(direction, source, dest),
        minor_axis_distance(direction, source, dest),
    )
}
