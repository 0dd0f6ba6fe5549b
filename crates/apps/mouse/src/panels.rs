//! Per-frame egui windows
//!
//! Each function draws one window. The app calls them in a fixed order
//! every frame; there is no registry of panels.

use egui::{Color32, PointerButton, Pos2, Rgba, Sense, Stroke, StrokeKind};
use glam::Vec2;
use system::{FrameContext, MouseButtonType};

use crate::event_log::EventLog;
use crate::keyboard::KeyTracker;
use crate::scene::Scene;

/// Height of the scrollable log region in points
pub const LOG_REGION_HEIGHT: f32 = 200.0;

const CANVAS_BACKGROUND: Color32 = Color32::from_gray(24);
const SELECTION_STROKE: f32 = 2.0;

fn to_vec2(pos: Pos2) -> Vec2 {
    Vec2::new(pos.x, pos.y)
}

fn held_label(held: bool) -> &'static str {
    if held {
        "Held"
    } else {
        "Released"
    }
}

fn to_color32([r, g, b, a]: [f32; 4]) -> Color32 {
    Rgba::from_rgba_unmultiplied(r, g, b, a).into()
}

/// Background clear color editor
pub fn color_picker(ctx: &egui::Context, color: &mut [f32; 3]) {
    egui::Window::new("Background Color")
        .default_pos([10.0, 10.0])
        .show(ctx, |ui| {
            ui.color_edit_button_rgb(color);
        });
}

/// FPS and frame time for the current frame
pub fn perf_stats(ctx: &egui::Context, frame: &FrameContext) {
    egui::Window::new("Performance")
        .default_pos([10.0, 80.0])
        .show(ctx, |ui| {
            ui.label(format!("FPS: {:.1}", frame.fps()));
            ui.label(format!("Frame Time: {:.2} ms", frame.frame_time_ms()));
        });
}

/// Event log with manual entry and clear buttons
///
/// The list follows new entries only while it is scrolled to the bottom.
pub fn log_window(ctx: &egui::Context, log: &mut EventLog, elapsed: f32) {
    egui::Window::new("Log")
        .default_pos([10.0, 170.0])
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Click to Log").clicked() {
                    log.log_button(elapsed);
                }
                if ui.button("Clear").clicked() {
                    log.clear();
                }
            });

            egui::Frame::group(ui.style()).show(ui, |ui| {
                let row_height = ui.text_style_height(&egui::TextStyle::Body);
                egui::ScrollArea::both()
                    .id_salt("log_region")
                    .max_height(LOG_REGION_HEIGHT)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show_rows(ui, row_height, log.len(), |ui, rows| {
                        for line in &log.entries()[rows] {
                            ui.label(line.as_str());
                        }
                    });
            });
        });
}

/// Pointer readout in GUI space and window space, plus click logging
///
/// `window_cursor` is the windowing layer's cursor position in physical
/// pixels; the GUI position is in egui points.
pub fn mouse_debug(ctx: &egui::Context, log: &mut EventLog, window_cursor: Option<Vec2>) {
    let (gui_pos, left_down, right_down, left_clicked, right_clicked) = ctx.input(|i| {
        (
            i.pointer.latest_pos(),
            i.pointer.button_down(PointerButton::Primary),
            i.pointer.button_down(PointerButton::Secondary),
            i.pointer.button_pressed(PointerButton::Primary),
            i.pointer.button_pressed(PointerButton::Secondary),
        )
    });

    // A press whose position egui already lost has nothing to report
    if let Some(click_pos) = gui_pos.map(to_vec2) {
        if left_clicked {
            log.log_click(MouseButtonType::Left, click_pos);
        }
        if right_clicked {
            log.log_click(MouseButtonType::Right, click_pos);
        }
    }

    egui::Window::new("Mouse Debug")
        .default_pos([560.0, 10.0])
        .show(ctx, |ui| {
            match gui_pos {
                Some(pos) => ui.label(format!("GUI Mouse Pos: ({:.1}, {:.1})", pos.x, pos.y)),
                None => ui.label("GUI Mouse Pos: outside window"),
            };
            match window_cursor {
                Some(pos) => ui.label(format!("Window Cursor Pos: ({:.1}, {:.1})", pos.x, pos.y)),
                None => ui.label("Window Cursor Pos: outside window"),
            };
            ui.label(format!("Left Button: {}", held_label(left_down)));
            ui.label(format!("Right Button: {}", held_label(right_down)));
        });
}

/// Held state of each tracked key
pub fn keyboard_debug(ctx: &egui::Context, keys: &KeyTracker) {
    egui::Window::new("Keyboard Debug")
        .default_pos([560.0, 150.0])
        .show(ctx, |ui| {
            for (name, held) in keys.states() {
                ui.label(format!("{name}: {}", held_label(held)));
            }
            ui.separator();
            ui.weak("Esc closes the window");
        });
}

/// Canvas with the draggable rectangles
///
/// Returns the canvas rectangle in GUI space, or `None` while the window is
/// collapsed.
pub fn scene_canvas(ctx: &egui::Context, scene: &mut Scene) -> Option<egui::Rect> {
    egui::Window::new("Scene")
        .default_pos([180.0, 60.0])
        .resizable(false)
        .show(ctx, |ui| {
            let canvas = scene.canvas_size();
            let (response, painter) =
                ui.allocate_painter(egui::vec2(canvas.x, canvas.y), Sense::click_and_drag());
            let origin = response.rect.min;

            let (pressed, down, pointer) = ui.input(|i| {
                (
                    i.pointer.button_pressed(PointerButton::Primary),
                    i.pointer.button_down(PointerButton::Primary),
                    i.pointer.interact_pos(),
                )
            });

            if let Some(pointer) = pointer {
                let local = to_vec2(pointer) - to_vec2(origin);
                if pressed && response.contains_pointer() {
                    scene.press(local);
                } else if down {
                    scene.drag_to(local);
                }
            }
            if !down {
                scene.release();
            }

            painter.rect_filled(response.rect, 0.0, CANVAS_BACKGROUND);
            for (index, object) in scene.objects().iter().enumerate() {
                let rect = egui::Rect::from_min_size(
                    origin + egui::vec2(object.position.x, object.position.y),
                    egui::vec2(object.size.x, object.size.y),
                );
                painter.rect_filled(rect, 0.0, to_color32(object.color));
                if scene.selected() == Some(index) {
                    painter.rect_stroke(
                        rect,
                        0.0,
                        Stroke::new(SELECTION_STROKE, Color32::WHITE),
                        StrokeKind::Outside,
                    );
                }
            }

            response.rect
        })
        .and_then(|window| window.inner)
}

/// Property editor for the selected rectangle
pub fn inspector(ctx: &egui::Context, scene: &mut Scene) {
    egui::Window::new("Inspector")
        .default_pos([560.0, 300.0])
        .show(ctx, |ui| {
            let (Some(index), Some(object)) = (scene.selected(), scene.selected_object().copied())
            else {
                ui.label("No selection");
                return;
            };

            let canvas = scene.canvas_size();
            let mut position = object.position;
            let mut size = object.size;
            let mut color = object.color;

            ui.label(format!("Object #{index}"));
            egui::Grid::new("inspector_grid")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Position");
                    ui.horizontal(|ui| {
                        ui.add(egui::DragValue::new(&mut position.x).speed(1.0).prefix("x: "));
                        ui.add(egui::DragValue::new(&mut position.y).speed(1.0).prefix("y: "));
                    });
                    ui.end_row();

                    ui.label("Size");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::DragValue::new(&mut size.x)
                                .speed(1.0)
                                .range(1.0..=canvas.x)
                                .prefix("w: "),
                        );
                        ui.add(
                            egui::DragValue::new(&mut size.y)
                                .speed(1.0)
                                .range(1.0..=canvas.y)
                                .prefix("h: "),
                        );
                    });
                    ui.end_row();

                    ui.label("Color");
                    ui.color_edit_button_rgba_unmultiplied(&mut color);
                    ui.end_row();
                });

            if size != object.size {
                scene.set_size(size);
            }
            if position != object.position {
                scene.set_position(position);
            }
            if color != object.color {
                scene.set_color(color);
            }

            if ui.button("Deselect").clicked() {
                scene.clear_selection();
            }
        });
}
