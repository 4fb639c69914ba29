use std::path::PathBuf;

use crate::color::Palette;
use crate::editor::Editor;
use crate::file_handler::EXPORT_FILE_NAME;
use crate::input::InputHandler;
use crate::panels::{central_panel, palette_panel, tools_panel};
use crate::renderer::CanvasRenderer;

/// The native coloring book window.
///
/// Only the palette (selected category and recent colors) outlives a run;
/// everything else is rebuilt from the artwork and config on start.
pub struct ColoringApp {
    pub(crate) editor: Editor,
    pub(crate) renderer: CanvasRenderer,
    pub(crate) input: InputHandler,
    /// Fit the artwork to the canvas area on the next frame
    pub(crate) needs_fit: bool,
    pub(crate) show_reset_confirm: bool,
    pub(crate) export_path: PathBuf,
    /// Last load/save message shown in the tools panel
    pub(crate) status: Option<String>,
}

impl ColoringApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, mut editor: Editor) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(palette) = eframe::get_value::<Palette>(storage, eframe::APP_KEY) {
                log::info!("Restored palette with {} recent colors", palette.recent().len());
                *editor.palette_mut() = palette;
            }
        }
        Self::with_editor(editor)
    }

    pub fn with_editor(editor: Editor) -> Self {
        Self {
            editor,
            renderer: CanvasRenderer::new(),
            input: InputHandler::new(),
            needs_fit: true,
            show_reset_confirm: false,
            export_path: PathBuf::from(EXPORT_FILE_NAME),
            status: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub(crate) fn save_page(&mut self) {
        self.status = Some(match self.editor.save_png(&self.export_path) {
            Ok(()) => format!("Saved {}", self.export_path.display()),
            Err(err) => {
                log::error!("Failed to save {}: {}", self.export_path.display(), err);
                format!("Save failed: {err}")
            }
        });
    }

    /// Loads artwork dropped onto the window
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let result = match (&file.path, &file.bytes) {
                (Some(path), _) => self.editor.load_artwork_from_path(path),
                (None, Some(bytes)) => self.editor.load_artwork_from_bytes(bytes),
                (None, None) => continue,
            };
            match result {
                Ok(_) => {
                    self.needs_fit = true;
                    self.status = Some(format!("Opened {}", file.name));
                }
                Err(err) => {
                    log::error!("Failed to open dropped file {}: {}", file.name, err);
                    self.status = Some(format!("Could not open {}: {err}", file.name));
                }
            }
        }
    }

    /// Lays out one frame of the UI and feeds this frame's input to the editor.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.handle_dropped_files(ctx);

        tools_panel(self, ctx);
        palette_panel(self, ctx);
        central_panel(self, ctx);

        if self.show_reset_confirm {
            self.show_reset_dialog(ctx);
        }

        if self.editor.end_frame() || self.editor.is_interacting() {
            ctx.request_repaint();
        }
    }

    fn show_reset_dialog(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset page")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Remove all coloring and start over?");
                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        self.editor.reset();
                        self.show_reset_confirm = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_reset_confirm = false;
                    }
                });
            });
    }
}

impl eframe::App for ColoringApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.editor.palette());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
