use std::path::Path;
use std::sync::Arc;

use egui::{Pos2, Rect, Vec2};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::color::{FillColor, Palette};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::error::{ConfigError, ExportError, LoadError};
use crate::file_handler;
use crate::fill::{FillResult, FloodFill, SkipReason};
use crate::history::HistoryStore;
use crate::input::{GestureController, TouchEvent};
use crate::pixel_buffer::{BufferPoint, PixelBuffer, Snapshot};
use crate::stroke::{ActiveStroke, StrokeStyle};
use crate::tool::Tool;
use crate::viewport::ViewportTransform;

/// An editor shared with a worker thread. Each `Editor` method is one atomic
/// unit of work (edit and history commit), so hold the lock for a single call.
pub type SharedEditor = Arc<Mutex<Editor>>;

/// Everything tied to one loaded artwork
#[derive(Debug)]
struct Session {
    id: Uuid,
    history: HistoryStore,
    /// Working copy checked out while a stroke is being drawn
    stroke: Option<(PixelBuffer, ActiveStroke)>,
}

/// The coloring session: tool and color selection, gestures, viewport and
/// snapshot history for the loaded artwork.
///
/// Stored snapshots are never written to. Every edit clones the current
/// snapshot into a working buffer, modifies it, and pushes it as a new entry.
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    engine: FloodFill,
    viewport: ViewportTransform,
    gestures: GestureController,
    tool: Tool,
    color: FillColor,
    brush_width: f32,
    palette: Palette,
    canvas_rect: Option<Rect>,
    session: Option<Session>,
    /// Bumped whenever the visible pixels change
    revision: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_checked_config(EditorConfig::default())
    }
}

impl Editor {
    /// Creates an editor, rejecting configs whose viewport or history
    /// settings are out of range.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_checked_config(config))
    }

    fn with_checked_config(config: EditorConfig) -> Self {
        Self {
            engine: FloodFill::new(config.fill),
            viewport: ViewportTransform::new(config.viewport),
            gestures: GestureController::new(),
            tool: Tool::default(),
            color: config.default_color,
            brush_width: 1.0,
            palette: Palette::default(),
            canvas_rect: None,
            session: None,
            revision: 0,
            config,
        }
    }

    pub fn into_shared(self) -> SharedEditor {
        Arc::new(Mutex::new(self))
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // --- artwork lifecycle ---

    /// Starts a new session on `artwork`, which becomes history entry 0.
    pub fn load_artwork(&mut self, artwork: PixelBuffer) -> Uuid {
        let id = Uuid::new_v4();
        log::info!(
            "[{}] New session on {}x{} artwork",
            id,
            artwork.width(),
            artwork.height()
        );

        let mut history = HistoryStore::with_max_entries(self.config.history.max_entries);
        history.push(artwork.into_snapshot());

        self.gestures.reset();
        self.viewport = ViewportTransform::new(self.config.viewport);
        self.session = Some(Session {
            id,
            history,
            stroke: None,
        });
        self.revision += 1;
        id
    }

    /// Decodes and loads artwork from disk. On failure the current session is kept.
    pub fn load_artwork_from_path(&mut self, path: impl AsRef<Path>) -> Result<Uuid, LoadError> {
        let artwork = file_handler::load_artwork(path)?;
        Ok(self.load_artwork(artwork))
    }

    /// Decodes and loads artwork from encoded bytes. On failure the current session is kept.
    pub fn load_artwork_from_bytes(&mut self, bytes: &[u8]) -> Result<Uuid, LoadError> {
        let artwork = file_handler::decode_artwork(bytes)?;
        Ok(self.load_artwork(artwork))
    }

    pub fn has_artwork(&self) -> bool {
        self.session.is_some()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.id)
    }

    /// Size of the loaded artwork as `[width, height]`
    pub fn artwork_size(&self) -> Option<[usize; 2]> {
        self.current_snapshot().map(|s| s.size())
    }

    /// Scales the artwork to fit `view_size`, capped at the default scale.
    pub fn fit_to_view(&mut self, view_size: Vec2) {
        if let Some(size) = self.artwork_size() {
            self.viewport.fit_to_view(view_size, size);
        }
    }

    // --- selection state ---

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        log::info!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        if let Some(command) = self.gestures.reset() {
            self.execute(command);
        }
        self.tool = tool;
    }

    pub fn color(&self) -> FillColor {
        self.color
    }

    pub fn set_color(&mut self, color: FillColor) {
        self.color = color;
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn set_brush_width(&mut self, width: f32) {
        self.brush_width = width.clamp(1.0, 64.0);
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    // --- viewport & input ---

    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportTransform {
        &mut self.viewport
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    /// True while a pan or pinch is in progress
    pub fn is_interacting(&self) -> bool {
        self.gestures.is_interacting()
    }

    /// Records where the canvas is currently drawn on screen.
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    pub fn canvas_rect(&self) -> Option<Rect> {
        self.canvas_rect
    }

    /// Maps a screen position to the artwork pixel under it.
    pub fn screen_to_buffer(&self, screen: Pos2) -> Option<BufferPoint> {
        let rect = self.canvas_rect?;
        let size = self.artwork_size()?;
        ViewportTransform::screen_to_buffer(screen, rect, size)
    }

    /// Feeds one touch event through the gesture controller. Returns true if the artwork changed.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        match self.gestures.handle(event, self.tool, &mut self.viewport) {
            Some(command) => self.execute(command),
            None => false,
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) -> bool {
        self.handle_touch(&TouchEvent::down([pos]))
    }

    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        self.handle_touch(&TouchEvent::moved([pos]))
    }

    pub fn pointer_up(&mut self) -> bool {
        self.handle_touch(&TouchEvent::up(Vec::new()))
    }

    /// Applies the latest pending pan; call once per rendered frame.
    pub fn end_frame(&mut self) -> bool {
        self.viewport.commit_frame()
    }

    /// Runs a canvas command. Returns true if the artwork changed.
    pub fn execute(&mut self, command: Command) -> bool {
        let point = command.position().map(|pos| self.screen_to_buffer(pos));
        match (command, point) {
            (Command::EndStroke, _) => self.end_stroke(),
            (_, Some(None)) | (_, None) => {
                log::debug!("Ignoring {:?}: no canvas mapping yet", command);
                false
            }
            (Command::Fill { .. }, Some(Some(point))) => self.fill_at(point).changed(),
            (Command::BeginStroke { .. }, Some(Some(point))) => self.begin_stroke(point),
            (Command::ExtendStroke { .. }, Some(Some(point))) => self.extend_stroke(point),
        }
    }

    // --- edits ---

    /// Flood fills from `seed` with the selected color and commits the result.
    pub fn fill_at(&mut self, seed: BufferPoint) -> FillResult {
        self.end_stroke();
        let Some(session) = self.session.as_mut() else {
            return FillResult::Skipped(SkipReason::NoBuffer);
        };
        let Some(current) = session.history.current() else {
            return FillResult::Skipped(SkipReason::NoBuffer);
        };

        let mut working = PixelBuffer::clone(current);
        let result = self.engine.fill(&mut working, seed, self.color);
        match result {
            FillResult::Filled { painted } if painted > 0 => {
                session.history.push(working.into_snapshot());
                self.revision += 1;
                log::debug!(
                    "[{}] Filled {} px at ({}, {}) with {}",
                    session.id,
                    painted,
                    seed.x,
                    seed.y,
                    self.color
                );
            }
            _ => log::debug!("[{}] Fill at ({}, {}): {:?}", session.id, seed.x, seed.y, result),
        }
        result
    }

    fn stroke_style(&self) -> StrokeStyle {
        let color = match self.tool {
            Tool::Eraser => FillColor::WHITE,
            _ => self.color,
        };
        StrokeStyle {
            color,
            width: self.brush_width,
        }
    }

    /// Checks out a working copy and stamps the first point of a stroke.
    pub fn begin_stroke(&mut self, start: BufferPoint) -> bool {
        self.end_stroke();
        let style = self.stroke_style();
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(current) = session.history.current() else {
            return false;
        };
        let mut working = PixelBuffer::clone(current);
        let stroke = ActiveStroke::begin(&mut working, start, style);
        let changed = stroke.painted() > 0;
        session.stroke = Some((working, stroke));
        if changed {
            self.revision += 1;
        }
        changed
    }

    pub fn extend_stroke(&mut self, to: BufferPoint) -> bool {
        let Some((working, stroke)) = self.session.as_mut().and_then(|s| s.stroke.as_mut()) else {
            return false;
        };
        let changed = stroke.extend(working, to) > 0;
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Commits the open stroke to history. A stroke that painted nothing is dropped.
    pub fn end_stroke(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some((working, stroke)) = session.stroke.take() else {
            return false;
        };
        if stroke.painted() == 0 {
            return false;
        }
        log::debug!(
            "[{}] Committed stroke of {} points ({} px)",
            session.id,
            stroke.points().len(),
            stroke.painted()
        );
        session.history.push(working.into_snapshot());
        true
    }

    // --- history ---

    fn step_history(&mut self, label: &str, step: fn(&mut HistoryStore) -> Option<Snapshot>) -> bool {
        self.end_stroke();
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match step(&mut session.history) {
            Some(_) => {
                log::info!(
                    "[{}] {} (entry {:?} of {})",
                    session.id,
                    label,
                    session.history.cursor(),
                    session.history.len()
                );
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    pub fn undo(&mut self) -> bool {
        self.step_history("Undo", HistoryStore::undo)
    }

    pub fn redo(&mut self) -> bool {
        self.step_history("Redo", HistoryStore::redo)
    }

    /// Restores the original artwork and drops all edits.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.step_history("Reset", HistoryStore::reset)
    }

    pub fn can_undo(&self) -> bool {
        self.history().is_some_and(HistoryStore::can_undo)
    }

    pub fn can_redo(&self) -> bool {
        self.history().is_some_and(HistoryStore::can_redo)
    }

    pub fn can_reset(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.stroke.is_some() || s.history.can_reset())
    }

    pub fn history(&self) -> Option<&HistoryStore> {
        self.session.as_ref().map(|s| &s.history)
    }

    // --- output ---

    /// The committed snapshot at the history cursor
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.history()?.current()
    }

    /// What should be on screen: the stroke working copy if one is open, else the current snapshot.
    pub fn current_buffer(&self) -> Option<&PixelBuffer> {
        let session = self.session.as_ref()?;
        match &session.stroke {
            Some((working, _)) => Some(working),
            None => session.history.current().map(|s| &**s),
        }
    }

    /// Increments whenever `current_buffer` changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Encodes the current snapshot as PNG. Never touches history.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        let snapshot = self.current_snapshot().ok_or(ExportError::NoArtwork)?;
        let bytes = file_handler::encode_png(snapshot)?;
        log::info!("Exported {}x{} PNG ({} bytes)", snapshot.width(), snapshot.height(), bytes.len());
        Ok(bytes)
    }

    /// Encodes the current snapshot and writes it to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let snapshot = self.current_snapshot().ok_or(ExportError::NoArtwork)?;
        file_handler::save_png(path, snapshot)
    }
}
