#![warn(clippy::all, rust_2018_idioms)]

use eframe_coloring::{ColoringApp, Editor, EditorConfig};

/// Usage: `eframe_coloring [artwork.png] [config.json]`
fn main() -> eframe::Result {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let artwork = args.next();
    let config = match args.next() {
        Some(path) => EditorConfig::load(&path).unwrap_or_else(|err| {
            log::warn!("Ignoring config {}: {}", path, err);
            EditorConfig::default()
        }),
        None => EditorConfig::default(),
    };

    let mut editor = Editor::new(config).unwrap_or_else(|err| {
        log::warn!("Falling back to default editor settings: {}", err);
        Editor::default()
    });
    if let Some(path) = artwork {
        if let Err(err) = editor.load_artwork_from_path(&path) {
            log::error!("Failed to load artwork {}: {}", path, err);
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Coloring Book")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 360.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "Coloring Book",
        native_options,
        Box::new(move |cc| Ok(Box::new(ColoringApp::new(cc, editor)))),
    )
}
