// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Scene: a minimal retained node tree that hosts focus search.
//!
//! [`Scene`] stores a hierarchy of nodes with local bounds, scroll offsets,
//! [`NodeFlags`], and author-specified focus links. It implements
//! [`waypoint_focus::FocusHost`], so a [`waypoint_focus::FocusFinder`] can run
//! arrow, Tab, cluster, and touch searches over it directly.
//!
//! - Bounds are mapped into the coordinate space of the search root, taking the
//!   scroll offset of every container in between into account.
//! - Invisible nodes hide their whole subtree from every search.
//! - In touch mode only nodes flagged [`NodeFlags::FOCUSABLE_IN_TOUCH_MODE`]
//!   can take focus.
//! - Clusters flagged [`NodeFlags::TOUCHSCREEN_BLOCKS_FOCUS`] confine searches
//!   that start inside them.
//! - A Backward link that was never set resolves to the node whose Forward link
//!   points here, searched from the node outwards.
//!
//! This crate performs no layout. Callers position nodes and update them as
//! their UI changes; searches always see the current state.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use waypoint_focus::{Direction, FocusFinder};
//! use waypoint_scene::{LocalNode, NodeFlags, Scene};
//!
//! let button = |x0, y0, x1, y1| LocalNode {
//!     bounds: Rect::new(x0, y0, x1, y1),
//!     flags: NodeFlags::VISIBLE | NodeFlags::FOCUSABLE,
//!     ..LocalNode::default()
//! };
//!
//! let mut scene = Scene::new();
//! let root = scene.insert(
//!     None,
//!     LocalNode {
//!         bounds: Rect::new(0.0, 0.0, 200.0, 100.0),
//!         ..LocalNode::default()
//!     },
//! );
//! let ok = scene.insert(Some(root), button(10.0, 10.0, 60.0, 40.0));
//! let cancel = scene.insert(Some(root), button(80.0, 10.0, 130.0, 40.0));
//!
//! let mut finder = FocusFinder::new();
//! assert_eq!(
//!     finder.find_next_focus(&scene, root, Some(ok), Direction::Right),
//!     Some(cancel)
//! );
//! assert_eq!(
//!     finder.find_next_focus(&scene, root, Some(cancel), Direction::Forward),
//!     Some(ok)
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod scene;
mod types;

pub use scene::Scene;
pub use types::{LocalNode, NodeFlags, NodeId};
