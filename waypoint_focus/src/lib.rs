// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Focus: directional focus search for retained UIs.
//!
//! Given the rectangles of the elements that can take focus, this crate decides
//! which one should receive focus next when the user presses an arrow key, Tab
//! or Shift+Tab, or jumps between keyboard navigation clusters. It also finds the
//! touchable element nearest to a point in a direction.
//!
//! - **Arrow keys** ([`AbsoluteDirection`]) run a geometric search
//!   ([`find_in_absolute_direction`]): candidates inside the beam of the focused
//!   element are preferred, the rest are ranked by a weighted distance that
//!   strongly favours staying on the axis of movement.
//! - **Tab order** ([`RelativeDirection`]) steps through a reading order
//!   ([`sort_reading_order`]): rows of vertically overlapping elements, top to
//!   bottom, each row left to right (right to left when mirrored). Author-specified
//!   "next focus" links are pulled together into chains inside that order.
//! - **Clusters** are stepped through the same way ([`step_cluster`]), passing
//!   through the root of the search between the last and the first cluster.
//! - **Touch** ([`find_nearest_touchable`]) picks the closest touchable along an
//!   axis, preferring the innermost of nested touchables.
//!
//! The free functions are stateless. [`FocusFinder`] wraps them with reusable
//! scratch storage and, through the [`FocusHost`] trait, runs the full search
//! pipeline against an element tree: author-specified successors, candidate
//! collection, coordinate mapping, and the choice between geometric and
//! reading-order search.
//!
//! ## Minimal example
//!
//! ```rust
//! use waypoint_focus::{
//!     AbsoluteDirection, Candidate, FocusFinder, Rect, RelativeDirection,
//!     find_in_absolute_direction,
//! };
//!
//! let source = Rect::new(0, 0, 10, 10);
//! let candidates = [
//!     Candidate { id: "right", bounds: Rect::new(20, 0, 30, 10) },
//!     Candidate { id: "below", bounds: Rect::new(0, 20, 10, 30) },
//! ];
//!
//! assert_eq!(
//!     find_in_absolute_direction(source, AbsoluteDirection::Right, &candidates),
//!     Some("right")
//! );
//! assert_eq!(
//!     find_in_absolute_direction(source, AbsoluteDirection::Down, &candidates),
//!     Some("below")
//! );
//!
//! // Reading order puts "right" first, so Forward from "below" wraps around to it.
//! let mut finder = FocusFinder::new();
//! let next = finder.find_in_relative_direction(
//!     Some("below"),
//!     RelativeDirection::Forward,
//!     &candidates,
//!     false,
//!     |_| None,
//! );
//! assert_eq!(next, Some("right"));
//! ```
//!
//! Handles are generic: any small `Copy + Eq + Hash` identifier works, such as
//! an index, a generational id, or a `&'static str` in tests.
//!
//! Geometry is integral. Hosts that keep [`kurbo::Rect`]s convert with
//! [`Rect::from_kurbo`], which rounds outwards.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math;
//!   typically used when integrating into embedded or `no_std` environments.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod absolute;
mod chain;
mod cluster;
mod direction;
mod finder;
mod geometry;
mod host;
mod predicates;
mod relative;
mod sorter;
mod touch;

pub use absolute::find_in_absolute_direction;
pub use cluster::{ClusterTarget, step_cluster};
pub use direction::{AbsoluteDirection, Direction, DirectionError, DirectionKind, RelativeDirection};
pub use finder::{FinderConfig, FocusFinder};
pub use geometry::{Offset, Rect};
pub use host::FocusHost;
pub use predicates::{
    MAJOR_AXIS_WEIGHT, beam_beats, beams_overlap, is_better_candidate, is_candidate,
    is_to_direction_of, major_axis_distance, major_axis_distance_to_far_edge,
    minor_axis_distance, weighted_distance,
};
pub use relative::step_in_order;
pub use sorter::sort_reading_order;
pub use touch::find_nearest_touchable;

/// One entry of a candidate list: an element handle and its bounds.
///
/// All candidates handed to one search must share a coordinate space, usually
/// that of the search root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Candidate<K> {
    /// Handle of the element.
    pub id: K,
    /// Bounds of the element in the shared coordinate space.
    pub bounds: Rect,
}
