//! Event logging through the app's input path and settings loading

use glam::Vec2;
use mouse_engine::{load_or_default, EventLog, MouseApp, MouseConfig, TRACKED_KEYS};
use std::io::Write;
use system::{InputState, MouseButtonType};

#[test]
fn test_clear_after_mixed_entries() {
    let mut log = EventLog::new();
    log.log_button(1.0);
    log.log_click(MouseButtonType::Left, Vec2::new(5.0, 5.0));
    log.log_click(MouseButtonType::Right, Vec2::new(6.0, 7.0));
    assert_eq!(log.len(), 3);

    log.clear();
    assert!(log.is_empty());

    log.log_button(2.0);
    assert_eq!(log.len(), 1);
}

#[test]
fn test_each_click_appends_one_entry() {
    let mut log = EventLog::new();
    for i in 0..10 {
        log.log_click(MouseButtonType::Left, Vec2::new(i as f32, 0.0));
        assert_eq!(log.len(), i * 2 + 1);
        log.log_click(MouseButtonType::Right, Vec2::new(0.0, i as f32));
        assert_eq!(log.len(), i * 2 + 2);
    }
}

#[test]
fn test_every_tracked_key_logs_press_and_release() {
    let mut app = MouseApp::default();
    let mut input = InputState::new();

    for (key, _) in TRACKED_KEYS.iter() {
        input.inject_key(*key, true);
        app.handle_input(&input);
        app.handle_input(&input);
        input.inject_key(*key, false);
        app.handle_input(&input);
    }

    let expected: Vec<String> = TRACKED_KEYS
        .iter()
        .flat_map(|(_, name)| [format!("Key {name} pressed"), format!("Key {name} released")])
        .collect();
    assert_eq!(app.log.entries(), expected.as_slice());
}

#[test]
fn test_simultaneous_keys_log_independently() {
    let mut app = MouseApp::default();
    let mut input = InputState::new();
    for (key, _) in TRACKED_KEYS.iter() {
        input.inject_key(*key, true);
    }
    app.handle_input(&input);
    assert_eq!(app.log.len(), TRACKED_KEYS.len());
    app.handle_input(&input);
    assert_eq!(app.log.len(), TRACKED_KEYS.len());
}

#[test]
fn test_settings_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
background = [0.5, 0.5, 0.5]

[window]
title = "Custom"

[canvas]
width = 320.0
height = 240.0
"#
    )
    .unwrap();

    let config = load_or_default(Some(file.path())).unwrap();
    assert_eq!(config.window.title, "Custom");
    assert_eq!(config.window.width, 800);

    let app = MouseApp::new(&config);
    assert_eq!(app.background, [0.5, 0.5, 0.5]);
    assert_eq!(app.scene.canvas_size(), Vec2::new(320.0, 240.0));
    // The blue rectangle at (400, 300) no longer fits and is pulled inside
    let last = app.scene.objects()[2];
    assert_eq!(last.position, Vec2::new(260.0, 150.0));
}

#[test]
fn test_default_settings_match_startup_values() {
    let config = MouseConfig::default();
    assert_eq!(config.background, [0.2, 0.3, 0.4]);
    assert_eq!((config.window.width, config.window.height), (800, 600));
}
