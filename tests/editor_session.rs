use eframe_coloring::EditorConfig;
use eframe_coloring::error::{ConfigError, ExportError};
use eframe_coloring::file_handler::decode_artwork;
use eframe_coloring::{BufferPoint, Editor, FillColor, PixelBuffer, Tool, TouchEvent};
use egui::{Rect, Vec2, pos2, vec2};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const RED: FillColor = FillColor::rgb(255, 0, 0);

/// Editor with a 10x10 white page drawn 1:1 at the screen origin
fn editor_with_page() -> Editor {
    let mut editor = Editor::default();
    editor.load_artwork(PixelBuffer::filled(10, 10, WHITE).unwrap());
    editor.set_canvas_rect(Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0)));
    editor
}

#[test]
fn test_defaults() {
    let editor = Editor::default();
    assert_eq!(editor.tool(), Tool::Fill);
    assert_eq!(editor.color(), FillColor::rgb(0xFF, 0x57, 0x33));
    assert!(!editor.has_artwork());
    assert!(editor.session_id().is_none());
    assert_eq!(editor.viewport().scale(), 1.7);
}

#[test]
fn test_tap_fills_region_under_pointer() {
    let mut editor = editor_with_page();
    editor.set_color(RED);

    assert!(editor.pointer_down(pos2(2.5, 7.5)));
    assert!(!editor.pointer_up());

    let page = editor.current_snapshot().unwrap();
    assert_eq!(page.get(BufferPoint::new(9, 9)), Some(RED.to_rgba()));
    assert!(editor.can_undo());
}

#[test]
fn test_tap_outside_canvas_does_nothing() {
    let mut editor = editor_with_page();
    assert!(!editor.pointer_down(pos2(25.0, 5.0)));
    editor.pointer_up();
    assert!(!editor.can_undo());
}

#[test]
fn test_pointer_without_canvas_rect_is_ignored() {
    let mut editor = Editor::default();
    editor.load_artwork(PixelBuffer::filled(4, 4, WHITE).unwrap());
    assert!(!editor.pointer_down(pos2(1.0, 1.0)));
    editor.pointer_up();
    assert_eq!(editor.history().unwrap().len(), 1);
}

#[test]
fn test_brush_stroke_commits_on_release() {
    let mut editor = editor_with_page();
    editor.select_tool(Tool::Brush);
    editor.set_color(RED);

    assert!(editor.pointer_down(pos2(1.5, 1.5)));
    assert!(editor.pointer_move(pos2(5.5, 1.5)));

    // visible but not yet in history
    assert_eq!(editor.current_buffer().unwrap().get(BufferPoint::new(3, 1)), Some(RED.to_rgba()));
    assert_eq!(editor.current_snapshot().unwrap().get(BufferPoint::new(3, 1)), Some(WHITE));
    assert_eq!(editor.history().unwrap().len(), 1);

    editor.pointer_up();
    assert_eq!(editor.history().unwrap().len(), 2);
    let page = editor.current_snapshot().unwrap();
    for x in 1..=5 {
        assert_eq!(page.get(BufferPoint::new(x, 1)), Some(RED.to_rgba()));
    }
    assert_eq!(page.get(BufferPoint::new(1, 2)), Some(WHITE));

    assert!(editor.undo());
    assert_eq!(editor.current_snapshot().unwrap().get(BufferPoint::new(3, 1)), Some(WHITE));
}

#[test]
fn test_eraser_on_blank_page_adds_no_history() {
    let mut editor = editor_with_page();
    editor.select_tool(Tool::Eraser);
    assert!(!editor.pointer_down(pos2(4.5, 4.5)));
    assert!(!editor.pointer_move(pos2(6.5, 4.5)));
    editor.pointer_up();
    assert_eq!(editor.history().unwrap().len(), 1);
}

#[test]
fn test_switching_tool_commits_open_stroke() {
    let mut editor = editor_with_page();
    editor.select_tool(Tool::Brush);
    editor.set_color(RED);
    editor.pointer_down(pos2(0.5, 0.5));

    editor.select_tool(Tool::Fill);
    assert_eq!(editor.history().unwrap().len(), 2);
    assert!(!editor.is_interacting());
}

#[test]
fn test_second_finger_commits_stroke_and_zooms() {
    let mut editor = editor_with_page();
    editor.select_tool(Tool::Brush);
    editor.set_color(RED);

    editor.pointer_down(pos2(0.5, 0.5));
    editor.handle_touch(&TouchEvent::down([pos2(0.5, 0.5), pos2(100.5, 0.5)]));
    assert_eq!(editor.history().unwrap().len(), 2);
    assert!(editor.is_interacting());

    editor.handle_touch(&TouchEvent::moved([pos2(0.5, 0.5), pos2(50.5, 0.5)]));
    assert!((editor.viewport().scale() - 0.85).abs() < 1e-5);
    // zooming never touches pixels
    assert_eq!(editor.history().unwrap().len(), 2);
}

#[test]
fn test_pan_tool_moves_viewport_once_per_frame() {
    let mut editor = editor_with_page();
    editor.select_tool(Tool::Pan);
    editor.pointer_down(pos2(5.0, 5.0));
    editor.pointer_move(pos2(8.0, 9.0));
    assert!(editor.is_interacting());
    assert_eq!(editor.viewport().pan(), Vec2::ZERO);

    assert!(editor.end_frame());
    assert_eq!(editor.viewport().pan(), vec2(3.0, 4.0));
    assert!(!editor.end_frame());
    editor.pointer_up();
    assert!(!editor.can_undo());
}

#[test]
fn test_fit_to_view_caps_at_default_scale() {
    let mut editor = Editor::default();
    editor.load_artwork(PixelBuffer::filled(1000, 500, WHITE).unwrap());
    editor.fit_to_view(vec2(1000.0, 1000.0));
    assert!((editor.viewport().scale() - 0.9).abs() < 1e-6);

    editor.fit_to_view(vec2(100_000.0, 100_000.0));
    assert_eq!(editor.viewport().scale(), 1.7);
}

#[test]
fn test_export_png_matches_current_snapshot() {
    let mut editor = editor_with_page();
    editor.set_color(RED);
    editor.pointer_down(pos2(1.0, 1.0));
    editor.pointer_up();

    let png = editor.export_png().unwrap();
    let decoded = decode_artwork(&png).unwrap();
    assert_eq!(decoded, **editor.current_snapshot().unwrap());
    // exporting is read-only
    assert_eq!(editor.history().unwrap().len(), 2);
    assert!(!editor.can_redo());
}

#[test]
fn test_export_without_artwork_fails() {
    let editor = Editor::default();
    assert!(matches!(editor.export_png(), Err(ExportError::NoArtwork)));
}

#[test]
fn test_save_png_to_disk() {
    let editor = editor_with_page();
    let path = std::env::temp_dir().join(format!("coloring-test-{}.png", std::process::id()));
    editor.save_png(&path).unwrap();

    let reloaded = eframe_coloring::file_handler::load_artwork(&path).unwrap();
    assert_eq!(reloaded.size(), [10, 10]);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_bad_bytes_keep_current_session() {
    let mut editor = editor_with_page();
    let session = editor.session_id();
    assert!(editor.load_artwork_from_bytes(b"not a png").is_err());
    assert_eq!(editor.session_id(), session);
    assert!(editor.has_artwork());
}

#[test]
fn test_shared_editor_across_threads() {
    let shared = editor_with_page().into_shared();

    let worker = {
        let shared = shared.clone();
        std::thread::spawn(move || {
            let mut editor = shared.lock();
            editor.set_color(RED);
            editor.fill_at(BufferPoint::new(0, 0)).changed()
        })
    };
    assert!(worker.join().unwrap());

    let editor = shared.lock();
    assert!(editor.can_undo());
    assert_eq!(
        editor.current_snapshot().unwrap().get(BufferPoint::new(5, 5)),
        Some(RED.to_rgba())
    );
}

#[test]
fn test_out_of_range_viewport_config_is_rejected() {
    let mut inverted = EditorConfig::default();
    inverted.viewport.min_scale = 3.0;
    inverted.viewport.max_scale = 0.5;
    assert!(matches!(Editor::new(inverted), Err(ConfigError::Invalid(_))));

    let mut nan = EditorConfig::default();
    nan.viewport.max_scale = f32::NAN;
    assert!(matches!(Editor::new(nan), Err(ConfigError::Invalid(_))));

    let mut tiny_history = EditorConfig::default();
    tiny_history.history.max_entries = Some(1);
    assert!(Editor::new(tiny_history).is_err());

    let editor = Editor::new(EditorConfig::default()).unwrap();
    assert_eq!(editor.viewport().scale(), 1.7);
}
