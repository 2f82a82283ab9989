// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end focus navigation over a [`Scene`].

use kurbo::{Rect as KurboRect, Vec2};
use waypoint_focus::{
    Direction, DirectionError, FinderConfig, FocusFinder, FocusHost, Offset, Rect,
};
use waypoint_scene::{LocalNode, NodeFlags, NodeId, Scene};

const FOCUSABLE: NodeFlags = NodeFlags::VISIBLE.union(NodeFlags::FOCUSABLE);
const TOUCH_FOCUSABLE: NodeFlags = FOCUSABLE.union(NodeFlags::FOCUSABLE_IN_TOUCH_MODE);
const CLUSTER: NodeFlags = NodeFlags::VISIBLE.union(NodeFlags::CLUSTER);
const TOUCHABLE: NodeFlags = NodeFlags::VISIBLE.union(NodeFlags::TOUCHABLE);

fn add(
    scene: &mut Scene,
    parent: Option<NodeId>,
    (x0, y0, x1, y1): (f64, f64, f64, f64),
    flags: NodeFlags,
) -> NodeId {
    scene.insert(
        parent,
        LocalNode {
            bounds: KurboRect::new(x0, y0, x1, y1),
            flags,
            ..LocalNode::default()
        },
    )
}

fn root(scene: &mut Scene) -> NodeId {
    add(scene, None, (0.0, 0.0, 400.0, 300.0), NodeFlags::VISIBLE)
}

/// Three buttons on one row, left to right.
fn row(scene: &mut Scene, parent: NodeId) -> [NodeId; 3] {
    [10.0, 100.0, 200.0].map(|x| add(scene, Some(parent), (x, 10.0, x + 40.0, 40.0), FOCUSABLE))
}

#[test]
fn arrows_follow_scrolled_content() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let header = add(&mut scene, Some(root), (10.0, 10.0, 100.0, 40.0), FOCUSABLE);
    let list = add(&mut scene, Some(root), (0.0, 50.0, 300.0, 300.0), NodeFlags::VISIBLE);
    scene.set_scroll(list, Vec2::new(0.0, 100.0));
    let items = [0.0, 120.0, 200.0]
        .map(|y| add(&mut scene, Some(list), (10.0, y, 100.0, y + 40.0), FOCUSABLE));

    // The first item is scrolled above the header.
    assert_eq!(
        scene.bounds_in_root(root, items[0]),
        Rect::new(10, -50, 100, -10)
    );
    assert_eq!(
        scene.bounds_in_root(root, items[1]),
        Rect::new(10, 70, 100, 110)
    );

    let mut finder = FocusFinder::new();
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(header), Direction::Down),
        Some(items[1])
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(items[1]), Direction::Up),
        Some(header)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(items[1]), Direction::Down),
        Some(items[2])
    );
}

#[test]
fn banner_wider_than_the_coordinate_range_is_searchable() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let a = add(&mut scene, Some(root), (10.0, 10.0, 20.0, 20.0), FOCUSABLE);
    let b = add(&mut scene, Some(root), (10.0, 30.0, 20.0, 40.0), FOCUSABLE);
    let banner = add(&mut scene, Some(root), (-3e9, 60.0, 3e9, 80.0), FOCUSABLE);
    assert_eq!(
        scene.bounds_in_root(root, banner),
        Rect::new(i32::MIN, 60, i32::MAX, 80)
    );

    let mut finder = FocusFinder::new();
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(a), Direction::Down),
        Some(b)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(b), Direction::Down),
        Some(banner)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(banner), Direction::Up),
        Some(b)
    );
}

#[test]
fn start_corner_follows_the_root_scroll() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let upper = add(&mut scene, Some(root), (10.0, 50.0, 100.0, 90.0), FOCUSABLE);
    let lower = add(&mut scene, Some(root), (10.0, 150.0, 100.0, 190.0), FOCUSABLE);

    let mut finder = FocusFinder::new();
    assert_eq!(
        finder.find_next_focus(&scene, root, None, Direction::Down),
        Some(upper)
    );

    scene.set_scroll(root, Vec2::new(0.0, 100.0));
    assert_eq!(
        finder.find_next_focus(&scene, root, None, Direction::Down),
        Some(lower)
    );
}

#[test]
fn mirrored_root_tabs_right_to_left() {
    let mut scene = Scene::new();
    let root = add(
        &mut scene,
        None,
        (0.0, 0.0, 400.0, 300.0),
        NodeFlags::VISIBLE | NodeFlags::LAYOUT_RTL,
    );
    let [a, b, c] = row(&mut scene, root);

    let mut finder = FocusFinder::new();
    assert_eq!(
        finder.find_next_focus(&scene, root, None, Direction::Forward),
        Some(c)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(c), Direction::Forward),
        Some(b)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(a), Direction::Forward),
        Some(c)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(c), Direction::Backward),
        Some(a)
    );
}

#[test]
fn clusters_cycle_through_the_root() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let left = add(&mut scene, Some(root), (0.0, 0.0, 100.0, 100.0), CLUSTER);
    add(&mut scene, Some(left), (10.0, 10.0, 50.0, 40.0), FOCUSABLE);
    let right = add(&mut scene, Some(root), (150.0, 0.0, 250.0, 100.0), CLUSTER);
    add(&mut scene, Some(right), (10.0, 10.0, 50.0, 40.0), FOCUSABLE);
    let empty = add(&mut scene, Some(root), (0.0, 200.0, 50.0, 250.0), CLUSTER);
    add(&mut scene, Some(root), (300.0, 200.0, 350.0, 250.0), FOCUSABLE);

    let mut finder = FocusFinder::new();
    let mut step = |current, direction| {
        finder.find_next_keyboard_navigation_cluster(&scene, root, current, direction)
    };
    assert_eq!(step(None, Direction::Forward), Some(left));
    assert_eq!(step(Some(left), Direction::Forward), Some(right));
    assert_eq!(step(Some(right), Direction::Forward), Some(root));
    assert_eq!(step(None, Direction::Backward), Some(right));
    assert_eq!(step(Some(left), Direction::Backward), Some(root));

    // A successor cluster without anything focusable is passed over.
    scene.set_next_cluster(left, Some(empty));
    assert_eq!(
        finder.find_next_keyboard_navigation_cluster(&scene, root, Some(left), Direction::Forward),
        Some(right)
    );

    scene.set_next_cluster(right, Some(left));
    assert_eq!(
        finder.find_next_keyboard_navigation_cluster(&scene, root, Some(right), Direction::Forward),
        Some(left)
    );
}

#[test]
fn touch_mode_skips_plain_focusables() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let a = add(&mut scene, Some(root), (10.0, 10.0, 50.0, 40.0), FOCUSABLE);
    let b = add(&mut scene, Some(root), (100.0, 10.0, 140.0, 40.0), TOUCH_FOCUSABLE);
    let c = add(&mut scene, Some(root), (200.0, 10.0, 240.0, 40.0), FOCUSABLE);
    let d = add(&mut scene, Some(root), (300.0, 10.0, 340.0, 40.0), TOUCH_FOCUSABLE);
    scene.set_next_focus(b, Direction::Right, Some(c));

    let mut finder = FocusFinder::new();
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(a), Direction::Right),
        Some(b)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(b), Direction::Right),
        Some(c)
    );

    scene.set_touch_mode(true);
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(b), Direction::Right),
        Some(d)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(d), Direction::Forward),
        Some(b)
    );
}

#[test]
fn blocking_cluster_confines_the_search() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let panel = add(
        &mut scene,
        Some(root),
        (0.0, 0.0, 200.0, 200.0),
        CLUSTER | NodeFlags::TOUCHSCREEN_BLOCKS_FOCUS,
    );
    let first = add(&mut scene, Some(panel), (10.0, 10.0, 50.0, 40.0), FOCUSABLE);
    let second = add(&mut scene, Some(panel), (100.0, 10.0, 140.0, 40.0), FOCUSABLE);
    let outside = add(&mut scene, Some(root), (250.0, 10.0, 290.0, 40.0), FOCUSABLE);

    let mut finder = FocusFinder::new();
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(first), Direction::Right),
        Some(second)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(second), Direction::Right),
        None
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(second), Direction::Forward),
        Some(first)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(outside), Direction::Left),
        Some(second)
    );

    scene.set_flags(panel, CLUSTER);
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(second), Direction::Right),
        Some(outside)
    );
}

#[test]
fn backward_follows_forward_links_in_reverse() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let [a, b, c] = row(&mut scene, root);
    scene.set_next_focus(a, Direction::Forward, Some(c));

    let mut finder = FocusFinder::new();
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(a), Direction::Forward),
        Some(c)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(c), Direction::Backward),
        Some(a)
    );
    // The chain a -> c sits ahead of b in the traversal order.
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(c), Direction::Forward),
        Some(b)
    );
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(b), Direction::Backward),
        Some(c)
    );
}

#[test]
fn reverse_lookup_prefers_the_nearest_container() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let far = add(&mut scene, Some(root), (300.0, 200.0, 340.0, 240.0), FOCUSABLE);
    let group = add(&mut scene, Some(root), (0.0, 0.0, 300.0, 100.0), NodeFlags::VISIBLE);
    let near = add(&mut scene, Some(group), (10.0, 10.0, 50.0, 40.0), FOCUSABLE);
    let target = add(&mut scene, Some(group), (100.0, 10.0, 140.0, 40.0), FOCUSABLE);
    scene.set_next_focus(far, Direction::Forward, Some(target));
    scene.set_next_focus(near, Direction::Forward, Some(target));

    let mut finder = FocusFinder::new();
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(target), Direction::Backward),
        Some(near)
    );
}

#[test]
fn links_to_removed_or_hidden_nodes_fall_back_to_geometry() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let [a, b, c] = row(&mut scene, root);
    scene.set_next_focus(a, Direction::Right, Some(c));

    let mut finder = FocusFinder::new();
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(a), Direction::Right),
        Some(c)
    );

    scene.remove(c);
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(a), Direction::Right),
        Some(b)
    );

    scene.set_flags(b, NodeFlags::FOCUSABLE);
    assert_eq!(
        finder.find_next_focus(&scene, root, Some(a), Direction::Right),
        None
    );
}

#[test]
fn nearest_touchable_prefers_the_innermost() {
    let mut scene = Scene::new();
    let root = root(&mut scene);
    let outer = add(&mut scene, Some(root), (100.0, 0.0, 140.0, 40.0), TOUCHABLE);
    let inner = add(&mut scene, Some(outer), (0.0, 5.0, 20.0, 35.0), TOUCHABLE);
    assert_eq!(
        scene.touch_bounds_in_root(root, inner),
        Rect::new(100, 5, 120, 35)
    );

    // Going right, the distance is the near edge coordinate, 100 here.
    let mut finder = FocusFinder::with_config(FinderConfig { edge_slop: 150 });
    let mut deltas = Offset::default();
    assert_eq!(
        finder.find_nearest_touchable(&scene, root, 50, 20, Direction::Right, &mut deltas),
        Ok(Some(inner))
    );
    assert_eq!(deltas, Offset { dx: 100, dy: 0 });

    finder.set_config(FinderConfig { edge_slop: 100 });
    let mut deltas = Offset::default();
    assert_eq!(
        finder.find_nearest_touchable(&scene, root, 50, 20, Direction::Right, &mut deltas),
        Ok(None)
    );

    // Out of reach with the default slop.
    finder.set_config(FinderConfig::default());
    let mut deltas = Offset::default();
    assert_eq!(
        finder.find_nearest_touchable(&scene, root, 50, 20, Direction::Right, &mut deltas),
        Ok(None)
    );
    assert_eq!(deltas, Offset::default());

    assert_eq!(
        finder.find_nearest_touchable(&scene, root, 50, 20, Direction::Forward, &mut deltas),
        Err(DirectionError::NotAbsolute(Direction::Forward))
    );
}
