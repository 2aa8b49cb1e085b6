//! End-to-end checks of the per-frame protocol: tick catch-up, draw order,
//! event cascade and tree mutation from handlers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use trellis_core::{DrawCommand, ManualClock, RecordingContext};
use trellis_layout::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn window(tree: &mut ComponentTree, fps: u32) -> ComponentId {
    tree.create_window(WindowConfig::new(fps).with_size(200.0, 100.0))
}

fn block(tree: &mut ComponentTree, parent: ComponentId) -> ComponentId {
    let id = tree.create(ComponentKind::Block);
    tree.add_child(parent, id).unwrap();
    tree.component(id)
        .unwrap()
        .set_width(WidthConstraint::fill())
        .set_height(HeightConstraint::fill());
    id
}

#[test]
fn test_unattached_component_has_no_root() {
    let mut tree = ComponentTree::new();
    let orphan = tree.create(ComponentKind::Circle);
    assert_eq!(tree.find_root(orphan), Err(LayoutError::NoRootAncestor));
    assert_eq!(tree.bounds(orphan), Err(LayoutError::NoRootAncestor));
}

#[test]
fn test_geometry_matches_layout_formulas() {
    let mut tree = ComponentTree::new();
    let root = window(&mut tree, 60);
    let id = tree.create(ComponentKind::Block);
    tree.add_child(root, id).unwrap();

    tree.component(id)
        .unwrap()
        .set_width(WidthConstraint::relative(0.25))
        .set_x(XConstraint::pixels_from_far(15.0));
    // P - offset - W
    assert_eq!(tree.width(id).unwrap(), 50.0);
    assert_eq!(tree.left(id).unwrap(), 200.0 - 15.0 - 50.0);

    tree.set_x(id, XConstraint::center()).unwrap();
    assert_eq!(tree.left(id).unwrap(), (200.0 - 50.0) / 2.0);
}

#[test]
fn test_partial_interval_does_not_tick() {
    init_tracing();
    let mut tree = ComponentTree::new();
    let root = window(&mut tree, 244);
    let interval = WindowConfig::new(244).tick_interval();
    let clock = ManualClock::new();
    let mut ctx = RecordingContext::new();

    assert_eq!(tree.draw_window(root, &clock, &mut ctx).unwrap(), 0);
    clock.advance(interval * 7 / 2);
    assert_eq!(tree.draw_window(root, &clock, &mut ctx).unwrap(), 3);
    // The remaining half interval completes on the next half
    clock.advance(interval / 2);
    assert_eq!(tree.draw_window(root, &clock, &mut ctx).unwrap(), 1);
}

#[test]
fn test_animation_runs_at_tick_rate() {
    let mut tree = ComponentTree::new();
    let root = window(&mut tree, 100);
    let id = tree.create(ComponentKind::Block);
    tree.add_child(root, id).unwrap();

    tree.animate(id, |anim| {
        anim.set_x_animation(Easing::Linear, 0.5, XConstraint::pixels(100.0));
    })
    .unwrap();

    let clock = ManualClock::new();
    let mut ctx = RecordingContext::new();
    tree.draw_window(root, &clock, &mut ctx).unwrap();
    assert_eq!(tree.left(id).unwrap(), 0.0);

    clock.advance(Duration::from_millis(250));
    tree.draw_window(root, &clock, &mut ctx).unwrap();
    assert_eq!(tree.left(id).unwrap(), 50.0);

    clock.advance(Duration::from_secs(2));
    tree.draw_window(root, &clock, &mut ctx).unwrap();
    assert_eq!(tree.left(id).unwrap(), 100.0);
    assert!(!tree.constraints(id).unwrap().is_animating());
}

#[test]
fn test_click_cascades_through_every_level() {
    init_tracing();
    let mut tree = ComponentTree::new();
    let root = window(&mut tree, 60);
    let outer = block(&mut tree, root);
    let middle = block(&mut tree, outer);
    let inner = block(&mut tree, middle);
    let elsewhere = tree.create(ComponentKind::Block);
    tree.add_child(root, elsewhere).unwrap();
    tree.component(elsewhere)
        .unwrap()
        .set_x(XConstraint::pixels(150.0))
        .set_width(WidthConstraint::pixels(10.0))
        .set_height(HeightConstraint::pixels(10.0));

    let hits = Rc::new(Cell::new(0));
    for id in [outer, middle, inner, elsewhere] {
        let hits = hits.clone();
        tree.component(id).unwrap().on_mouse_click(move |_, _, _| {
            hits.set(hits.get() + 1);
            Ok(())
        });
    }

    tree.set_cursor(root, 50.0, 50.0).unwrap();
    tree.mouse_click(root, MouseButton::Left).unwrap();
    assert_eq!(hits.get(), 3);

    tree.set_cursor(root, 155.0, 5.0).unwrap();
    tree.mouse_click(root, MouseButton::Left).unwrap();
    assert_eq!(hits.get(), 7);
}

#[test]
fn test_cursor_is_scaled_before_hit_testing() {
    let mut tree = ComponentTree::new();
    let root = window(&mut tree, 60);
    let id = tree.create(ComponentKind::Block);
    tree.add_child(root, id).unwrap();
    tree.component(id)
        .unwrap()
        .set_width(WidthConstraint::pixels(20.0))
        .set_height(HeightConstraint::pixels(20.0));

    tree.set_viewport(root, 400.0, 200.0, 2.0).unwrap();
    tree.set_cursor(root, 30.0, 30.0).unwrap();
    assert!(tree.is_hovered(id).unwrap());

    tree.set_cursor(root, 50.0, 30.0).unwrap();
    assert!(!tree.is_hovered(id).unwrap());
}

#[test]
fn test_click_handler_starts_animation_on_other_component() {
    let mut tree = ComponentTree::new();
    let root = window(&mut tree, 10);
    let button = block(&mut tree, root);
    let panel = tree.create(ComponentKind::Block);
    tree.add_child(root, panel).unwrap();

    tree.component(button).unwrap().on_mouse_click(move |tree, _, _| {
        tree.animate(panel, |anim| {
            anim.set_color_animation(Easing::Linear, 1.0, Color::BLACK);
        })
    });

    tree.set_cursor(root, 10.0, 10.0).unwrap();
    tree.mouse_click(root, MouseButton::Left).unwrap();

    let animation = tree
        .constraints(panel)
        .unwrap()
        .color_slot()
        .animation()
        .map(|animation| animation.total_ticks());
    assert_eq!(animation, Some(10));
}

#[test]
fn test_detached_child_keeps_stale_parent() {
    let mut tree = ComponentTree::new();
    let root = window(&mut tree, 60);
    let panel = block(&mut tree, root);
    let clock = ManualClock::new();
    let mut ctx = RecordingContext::new();

    tree.draw_window(root, &clock, &mut ctx).unwrap();
    let painted = ctx.take_commands().len();

    tree.remove_child(root, panel).unwrap();
    assert_eq!(tree.parent(panel).unwrap(), Some(root));
    assert_eq!(tree.find_root(panel).unwrap(), root);

    tree.draw_window(root, &clock, &mut ctx).unwrap();
    assert_eq!(ctx.commands(), &[DrawCommand::ClearStencil]);
    assert_eq!(painted, 2);
}

#[test]
fn test_enter_handler_can_restructure_tree() {
    let mut tree = ComponentTree::new();
    let root = window(&mut tree, 60);
    let trigger = block(&mut tree, root);
    let spawned = Rc::new(RefCell::new(None));

    let slot = spawned.clone();
    tree.component(trigger).unwrap().on_mouse_enter(move |tree, id| {
        let child = tree.create(ComponentKind::Circle);
        tree.add_child(id, child)?;
        *slot.borrow_mut() = Some(child);
        Ok(())
    });

    let clock = ManualClock::new();
    let mut ctx = RecordingContext::new();
    tree.set_cursor(root, 10.0, 10.0).unwrap();
    tree.draw_window(root, &clock, &mut ctx).unwrap();

    let child = spawned.borrow().expect("enter handler ran");
    assert_eq!(tree.children(trigger).unwrap(), &[child]);
    assert_eq!(tree.find_root(child).unwrap(), root);
}
