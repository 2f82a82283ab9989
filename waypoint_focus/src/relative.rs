// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepping through an already ordered candidate list.

use crate::direction::RelativeDirection;

/// Step from `focused` through `ordered` in `direction`, wrapping at both ends.
///
/// Forward returns the element after the last occurrence of `focused`, Backward
/// the one before its first occurrence. When `focused` is absent (or not in the
/// list), Forward starts at the first element and Backward at the last. Lists
/// with fewer than two elements have nowhere to go.
pub fn step_in_order<K: Copy + PartialEq>(
    ordered: &[K],
    focused: Option<K>,
    direction: RelativeDirection,
) -> Option<K> {
    let count = ordered.len();
    if count < 2 {
        return None;
    }
    match direction {
        RelativeDirection::Forward => {
            let position = focused.and_then(|f| ordered.iter().rposition(|&k| k == f));
            match position {
                Some(pos) if pos + 1 < count => Some(ordered[pos + 1]),
                _ => Some(ordered[0]),
            }
        }
        RelativeDirection::Backward => {
            let position = focused.and_then(|f| ordered.iter().position(|&k| k == f));
            match position {
                Some(pos) if pos > 0 => Some(ordered[pos - 1]),
                _ => Some(ordered[count - 1]),
            }
        }
    }
}
