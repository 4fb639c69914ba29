use egui::{self, Color32, Context, Painter, Rect, TextureHandle, TextureOptions};

use crate::editor::Editor;

/// Keeps the artwork texture in sync with the editor and paints it.
///
/// The texture is re-uploaded only when `Editor::revision` moves, so panning
/// and zooming never touch pixel data.
#[derive(Default)]
pub struct CanvasRenderer {
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
    uploads: u64,
}

impl std::fmt::Debug for CanvasRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasRenderer")
            .field("uploaded_revision", &self.uploaded_revision)
            .field("uploads", &self.uploads)
            .finish()
    }
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of texture uploads so far
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Uploads the current buffer if it changed since the last call.
    pub fn sync(&mut self, ctx: &Context, editor: &Editor) -> Option<&TextureHandle> {
        let Some(buffer) = editor.current_buffer() else {
            self.texture = None;
            self.uploaded_revision = None;
            return None;
        };

        if self.uploaded_revision != Some(editor.revision()) {
            // Nearest filtering keeps outlines crisp when zoomed in
            let image = buffer.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("artwork", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_revision = Some(editor.revision());
            self.uploads += 1;
        }
        self.texture.as_ref()
    }

    /// Paints the artwork into `canvas_rect`.
    pub fn paint(&mut self, ctx: &Context, painter: &Painter, editor: &Editor, canvas_rect: Rect) {
        let Some(texture) = self.sync(ctx, editor) else {
            return;
        };
        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);
        painter.image(texture.id(), canvas_rect, uv, Color32::WHITE);
    }
}
