// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for layout, hit testing, and the viewport.
//!
//! 1. Rebuilding without toggles does not move anything.
//! 2. Every child starts right of its parent's box.
//! 3. No two nodes of one pass share a row.
//! 4. Parent and child boxes never overlap, so the first hit is the only hit, also
//!    after a collapse moved visible nodes onto stale hidden boxes.
//! 5. Collapsing twice restores every flag; expanding and rebuilding restores layout.
//! 6. Zooming at a point keeps the scene point under it fixed.
//! 7. Fit-to-view centers the scheme within one pixel.

use carpinus_layout::{
    Category, Layout, LayoutConfig, LayoutEngine, MonospaceMeasurer, Point, Size, SourceNode,
    TreeNode, Vec2,
};
use carpinus_scene::{InputConfig, InputController, Modifiers, PointerEvent, Scheme, State};
use carpinus_viewport::{Viewport, ViewportConfig, ZoomDirection};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Context),
        Just(Category::Subcontext),
        Just(Category::Feature),
    ]
}

fn label_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,24}"
}

fn tree_strategy() -> impl Strategy<Value = SourceNode> {
    let leaf = (label_strategy(), category_strategy()).prop_map(|(l, c)| SourceNode::new(l, c));
    let inner = leaf.prop_recursive(4, 48, 5, |inner| {
        (
            label_strategy(),
            category_strategy(),
            prop::collection::vec(inner, 0..5),
        )
            .prop_map(|(l, c, children)| SourceNode::new(l, c).with_children(children))
    });
    (label_strategy(), prop::collection::vec(inner, 0..5))
        .prop_map(|(l, children)| SourceNode::new(l, Category::Root).with_children(children))
}

fn engine() -> LayoutEngine<MonospaceMeasurer> {
    LayoutEngine::new(LayoutConfig::default(), MonospaceMeasurer::default()).unwrap()
}

fn nth_preorder<'a>(node: &'a mut TreeNode, n: &mut usize) -> Option<&'a mut TreeNode> {
    if *n == 0 {
        return Some(node);
    }
    *n -= 1;
    for child in &mut node.children {
        if let Some(found) = nth_preorder(child, n) {
            return Some(found);
        }
    }
    None
}

fn for_each_edge(node: &TreeNode, f: &mut impl FnMut(&TreeNode, &TreeNode)) {
    for child in &node.children {
        f(node, child);
        for_each_edge(child, f);
    }
}

fn viewport_state(zoom_factor: f64) -> State {
    State::new(
        Viewport::new(ViewportConfig {
            zoom_factor,
            initial_scale: 1.0,
        })
        .unwrap(),
    )
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Rebuild is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rebuild_without_toggles_is_idempotent(source in tree_strategy()) {
        let engine = engine();
        let created = engine.create(&source);
        let once = engine.rebuild(created.root.clone());
        let twice = engine.rebuild(once.root.clone());
        prop_assert_eq!(&once, &created);
        prop_assert_eq!(&twice, &once);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Children start right of their parent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn children_start_after_parent_right_edge(source in tree_strategy()) {
        let layout = engine().create(&source);
        let gap = LayoutConfig::default().gap.x;
        let mut violations = Vec::new();
        for_each_edge(&layout.root, &mut |parent, child| {
            if child.position.x < parent.position.x + parent.size.width + gap {
                violations.push((parent.label.clone(), child.label.clone()));
            }
        });
        prop_assert!(
            violations.is_empty(),
            "children overlapping parents: {:?}",
            violations
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Rows are unique and the measure bounds every node
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_node_has_its_own_row(source in tree_strategy()) {
        let Layout { root, measure } = engine().create(&source);
        let mut rows: Vec<f64> = root.breadth_first().map(|n| n.position.y).collect();
        let count = rows.len();
        rows.sort_by(f64::total_cmp);
        rows.dedup();
        prop_assert_eq!(rows.len(), count);
        prop_assert_eq!(count, source.node_count());

        for node in root.breadth_first() {
            let r = node.bounds();
            prop_assert!(r.x1 <= measure.width && r.y1 <= measure.height);
            prop_assert!(node.size.width >= LayoutConfig::default().min_node_width);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Hit testing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn node_centers_hit_their_own_node(source in tree_strategy()) {
        let layout = engine().create(&source);
        let mut scheme = Scheme::new();
        scheme.set_layout(layout.clone());
        for node in layout.root.breadth_first() {
            let hit = scheme.node_at(node.bounds().center());
            prop_assert_eq!(hit.map(|n| n.position), Some(node.position));
        }
        for_each_edge(&layout.root, &mut |parent, child| {
            assert!(parent.bounds().intersect(child.bounds()).area() <= 0.0);
        });
    }

    #[test]
    fn visible_centers_hit_their_own_node_after_rebuild(
        source in tree_strategy(),
        pick in any::<usize>(),
    ) {
        let engine = engine();
        let mut root = engine.create(&source).root;
        let mut n = pick % root.node_count();
        nth_preorder(&mut root, &mut n).unwrap().collapse_children();
        let layout = engine.rebuild(root);

        let mut scheme = Scheme::new();
        scheme.set_layout(layout.clone());
        for node in layout.root.visible() {
            let hit = scheme.node_at(node.bounds().center());
            prop_assert_eq!(hit.map(|n| n.position), Some(node.position));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Collapse round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn collapse_twice_restores_flags(source in tree_strategy(), pick in any::<usize>()) {
        let created = engine().create(&source).root;
        let mut root = created.clone();
        let mut n = pick % root.node_count();
        let node = nth_preorder(&mut root, &mut n).unwrap();
        node.collapse_children();
        node.collapse_children();
        prop_assert_eq!(root, created);
    }

    #[test]
    fn expand_after_collapse_restores_layout(source in tree_strategy(), pick in any::<usize>()) {
        let engine = engine();
        let created = engine.create(&source);
        let mut root = created.root.clone();
        let index = pick % root.node_count();

        let mut n = index;
        nth_preorder(&mut root, &mut n).unwrap().collapse_children();
        let collapsed = engine.rebuild(root);
        prop_assert!(collapsed.measure.height <= created.measure.height);

        let mut root = collapsed.root;
        let mut n = index;
        nth_preorder(&mut root, &mut n).unwrap().collapse_children();
        let restored = engine.rebuild(root);
        prop_assert_eq!(restored, created);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Zoom anchoring
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zoom_keeps_pivot_fixed(
        scale in 0.1_f64..10.0,
        ox in -500.0_f64..500.0,
        oy in -500.0_f64..500.0,
        px in 0.0_f64..1000.0,
        py in 0.0_f64..1000.0,
        zoom_in in any::<bool>(),
    ) {
        let mut state = viewport_state(0.05);
        state.change_scale(scale, Vec2::new(ox, oy)).unwrap();
        let pivot = Point::new(px, py);
        let before = state.viewport().screen_to_scene(pivot);
        let direction = if zoom_in { ZoomDirection::In } else { ZoomDirection::Out };
        state.zoom_at(pivot, direction).unwrap();
        let after = state.viewport().screen_to_scene(pivot);
        prop_assert!((before - after).hypot() < 1e-6, "{:?} moved to {:?}", before, after);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Fit-to-view
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fit_centers_scheme(
        source in tree_strategy(),
        w in 100.0_f64..2000.0,
        h in 100.0_f64..2000.0,
    ) {
        let mut state = viewport_state(0.05);
        state.change_canvas_size(w, h);
        state.set_scheme(engine().create(&source));
        state.fit_scheme();

        let viewport = state.viewport();
        let measure = state.scheme().measure();
        let top_left = viewport.scene_to_screen(Point::ORIGIN);
        let bottom_right = viewport.scene_to_screen(Point::new(measure.width, measure.height));
        let center = top_left.midpoint(bottom_right);
        prop_assert!((center.x - w / 2.0).abs() <= 1.0);
        prop_assert!((center.y - h / 2.0).abs() <= 1.0);
        prop_assert!(top_left.x >= -1.0 && top_left.y >= -1.0);
        prop_assert!(bottom_right.x <= w + 1.0 && bottom_right.y <= h + 1.0);
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn root_with_two_contexts_packs_rows_in_preorder() {
    let source = SourceNode::new("root", Category::Root)
        .with_child(
            SourceNode::new("A", Category::Context)
                .with_child(SourceNode::new("A1", Category::Feature)),
        )
        .with_child(SourceNode::new("B", Category::Context));
    let config = LayoutConfig::default();
    let root = engine().create(&source).root;
    let a = &root.children[0];
    let a1 = &a.children[0];
    let b = &root.children[1];

    assert_eq!(root.position.x, 0.0);
    assert_eq!(a.position.x, root.size.width + config.gap.x);
    assert_eq!(b.position.x, a.position.x);
    assert_eq!(a1.position.x, a.position.x + a.size.width + config.gap.x);
    assert!(root.position.y < a.position.y);
    assert!(a.position.y < a1.position.y);
    assert!(a1.position.y < b.position.y);
}

#[test]
fn wheel_zoom_in_at_cursor_scales_by_factor() {
    let mut state = viewport_state(0.1);
    state.change_canvas_size(800.0, 600.0);
    let mut input = InputController::new(InputConfig::default());
    let cursor = Point::new(100.0, 100.0);
    let before = state.viewport().screen_to_scene(cursor);

    let response = input.handle(
        PointerEvent::Wheel {
            position: cursor,
            delta_y: -1.0,
            modifiers: Modifiers::empty(),
        },
        &mut state,
    );

    assert!(response.prevent_default);
    assert!((state.viewport().scale() - 1.1).abs() < 1e-12);
    assert!((state.viewport().screen_to_scene(cursor) - before).hypot() < 1e-9);
    assert_eq!(state.viewport().canvas_size(), Size::new(800.0, 600.0));
}
