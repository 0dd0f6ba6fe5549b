//! Pointer handling of the egui panels, driven headlessly
//!
//! Verifies that:
//! 1. Each left or right press logs exactly one click entry
//! 2. A press on the canvas selects and drags in canvas-local coordinates
//! 3. Releasing the button ends the drag but keeps the selection
//! 4. A press outside the canvas never moves the selected rectangle

use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect};
use glam::Vec2;
use mouse_engine::panels;
use mouse_engine::{EventLog, Scene};

fn frame_input(events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1280.0, 800.0))),
        events,
        ..Default::default()
    }
}

fn button(pos: Pos2, button: PointerButton, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn press_at(pos: Pos2) -> Vec<Event> {
    vec![
        Event::PointerMoved(pos),
        button(pos, PointerButton::Primary, true),
    ]
}

fn release_at(pos: Pos2) -> Vec<Event> {
    vec![button(pos, PointerButton::Primary, false)]
}

/// Runs one frame of the scene window and returns the canvas rect
fn run_canvas(ctx: &egui::Context, scene: &mut Scene, events: Vec<Event>) -> Rect {
    let mut canvas = None;
    let _ = ctx.run(frame_input(events), |ctx| {
        canvas = panels::scene_canvas(ctx, scene);
    });
    canvas.expect("scene window is open")
}

/// Lays the scene window out until its position is settled
fn settled_canvas(ctx: &egui::Context, scene: &mut Scene) -> Rect {
    run_canvas(ctx, scene, Vec::new());
    run_canvas(ctx, scene, Vec::new())
}

fn run_mouse_debug(ctx: &egui::Context, log: &mut EventLog, events: Vec<Event>) {
    let _ = ctx.run(frame_input(events), |ctx| {
        panels::mouse_debug(ctx, log, None);
    });
}

#[test]
fn test_each_press_logs_one_click() {
    let ctx = egui::Context::default();
    let mut log = EventLog::new();

    run_mouse_debug(&ctx, &mut log, press_at(Pos2::new(237.0, 161.0)));
    assert_eq!(log.entries(), ["Left Click at (237.0, 161.0)"]);

    // Holding and releasing the button adds nothing
    run_mouse_debug(&ctx, &mut log, Vec::new());
    run_mouse_debug(&ctx, &mut log, release_at(Pos2::new(237.0, 161.0)));
    assert_eq!(log.len(), 1);

    let right = Pos2::new(40.0, 25.5);
    run_mouse_debug(
        &ctx,
        &mut log,
        vec![
            Event::PointerMoved(right),
            button(right, PointerButton::Secondary, true),
        ],
    );
    assert_eq!(log.len(), 2);
    assert_eq!(log.last(), Some("Right Click at (40.0, 25.5)"));
}

#[test]
fn test_press_without_pointer_position_is_not_logged() {
    let ctx = egui::Context::default();
    let mut log = EventLog::new();

    run_mouse_debug(
        &ctx,
        &mut log,
        vec![
            button(Pos2::new(10.0, 10.0), PointerButton::Primary, true),
            Event::PointerGone,
        ],
    );
    assert!(log.is_empty());
}

#[test]
fn test_canvas_press_drag_release() {
    let ctx = egui::Context::default();
    let mut scene = Scene::default();
    let canvas = settled_canvas(&ctx, &mut scene);
    assert!((canvas.size() - egui::vec2(600.0, 400.0)).length() < 0.5);

    // Canvas-local (60, 70) is inside the first rectangle at (50, 60)
    let grab = canvas.min + egui::vec2(60.0, 70.0);
    run_canvas(&ctx, &mut scene, press_at(grab));
    assert_eq!(scene.selected(), Some(0));
    assert!(scene.is_dragging());
    assert!((scene.drag_offset() - Vec2::new(10.0, 10.0)).length() < 1e-3);

    // Raw position (-20, -20) is clamped to the canvas corner
    let past_corner = canvas.min + egui::vec2(-10.0, -10.0);
    run_canvas(&ctx, &mut scene, vec![Event::PointerMoved(past_corner)]);
    assert_eq!(scene.objects()[0].position, Vec2::ZERO);

    let far = canvas.max + egui::vec2(200.0, 200.0);
    run_canvas(&ctx, &mut scene, vec![Event::PointerMoved(far)]);
    assert_eq!(scene.objects()[0].position, Vec2::new(520.0, 320.0));

    run_canvas(&ctx, &mut scene, release_at(far));
    assert!(!scene.is_dragging());
    assert_eq!(scene.selected(), Some(0));
}

#[test]
fn test_canvas_press_on_empty_space_clears_selection() {
    let ctx = egui::Context::default();
    let mut scene = Scene::default();
    let canvas = settled_canvas(&ctx, &mut scene);

    let grab = canvas.min + egui::vec2(60.0, 70.0);
    run_canvas(&ctx, &mut scene, press_at(grab));
    run_canvas(&ctx, &mut scene, release_at(grab));
    assert_eq!(scene.selected(), Some(0));

    let empty = canvas.min + egui::vec2(10.0, 390.0);
    run_canvas(&ctx, &mut scene, press_at(empty));
    assert_eq!(scene.selected(), None);
    assert!(!scene.is_dragging());
}

#[test]
fn test_press_outside_canvas_keeps_selection_in_place() {
    let ctx = egui::Context::default();
    let mut scene = Scene::default();
    let canvas = settled_canvas(&ctx, &mut scene);

    let grab = canvas.min + egui::vec2(60.0, 70.0);
    run_canvas(&ctx, &mut scene, press_at(grab));
    run_canvas(&ctx, &mut scene, release_at(grab));
    let before = scene.objects()[0].position;

    let outside = Pos2::new(1200.0, 760.0);
    assert!(!canvas.contains(outside));
    run_canvas(&ctx, &mut scene, press_at(outside));
    run_canvas(
        &ctx,
        &mut scene,
        vec![Event::PointerMoved(canvas.min + egui::vec2(300.0, 200.0))],
    );

    assert_eq!(scene.selected(), Some(0));
    assert!(!scene.is_dragging());
    assert_eq!(scene.objects()[0].position, before);
}
