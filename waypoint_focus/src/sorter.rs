// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading-order sort: rows top to bottom, then leading edge within a row.

use core::cmp::Ordering;

use crate::Candidate;

/// Sort `items` into reading order.
///
/// Items are first ordered by top edge (then bottom edge). A sweep then groups
/// them into rows: an item whose top is at or below the lowest bottom seen in the
/// current row starts a new row, anything else joins the current row and may
/// extend it downwards. Each row is finally ordered by left edge (then right
/// edge), or by descending left edge when `mirrored` is set.
///
/// All sorts are stable, so items with identical bounds keep their input order.
pub fn sort_reading_order<K>(items: &mut [Candidate<K>], mirrored: bool) {
    if items.len() < 2 {
        return;
    }

    items.sort_by(|a, b| {
        a.bounds
            .top
            .cmp(&b.bounds.top)
            .then(a.bounds.bottom.cmp(&b.bounds.bottom))
    });

    let mut sweep_bottom = items[0].bounds.bottom;
    let mut row_start = 0;
    for i in 1..items.len() {
        let current = items[i].bounds;
        if current.top >= sweep_bottom {
            sort_row(&mut items[row_start..i], mirrored);
            sweep_bottom = current.bottom;
            row_start = i;
        } else {
            sweep_bottom = sweep_bottom.max(current.bottom);
        }
    }
    sort_row(&mut items[row_start..], mirrored);
}

fn sort_row<K>(row: &mut [Candidate<K>], mirrored: bool) {
    if row.len() < 2 {
        return;
    }
    row.sort_by(|a, b| {
        let leading = a.bounds.left.cmp(&b.bounds.left);
        let leading = if mirrored { leading.reverse() } else { leading };
        match leading {
            Ordering::Equal => a.bounds.right.cmp(&b.bounds.right),
            unequal => unequal,
        }
    });
}
