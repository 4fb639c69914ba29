use egui::{Pos2, Rect, Vec2};

use crate::config::ViewportSettings;
use crate::pixel_buffer::BufferPoint;

/// Pan offset and zoom factor of the canvas on screen.
///
/// Pan is in screen points relative to the centred position; scale is the
/// ratio of on-screen size to intrinsic buffer size.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportTransform {
    pan: Vec2,
    scale: f32,
    /// Latest pan requested since the last `commit_frame`
    pending_pan: Option<Vec2>,
    settings: ViewportSettings,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(ViewportSettings::default())
    }
}

impl ViewportTransform {
    pub fn new(settings: ViewportSettings) -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: settings.default_scale,
            pending_pan: None,
            settings,
        }
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The pan the canvas is heading to: the pending value if any, else the committed one.
    pub fn target_pan(&self) -> Vec2 {
        self.pending_pan.unwrap_or(self.pan)
    }

    /// Maps a screen position to the buffer pixel underneath it.
    ///
    /// `canvas_rect` is the canvas as rendered, so it already reflects pan and
    /// scale; only its ratio to the intrinsic size matters. Returns `None` for a
    /// degenerate rect. The result may lie outside the buffer.
    pub fn screen_to_buffer(
        screen: Pos2,
        canvas_rect: Rect,
        buffer_size: [usize; 2],
    ) -> Option<BufferPoint> {
        if !(canvas_rect.width() > 0.0 && canvas_rect.height() > 0.0) {
            return None;
        }
        let local = screen - canvas_rect.min;
        let x = (local.x * buffer_size[0] as f32) / canvas_rect.width();
        let y = (local.y * buffer_size[1] as f32) / canvas_rect.height();
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        Some(BufferPoint::new(x.floor() as i64, y.floor() as i64))
    }

    /// Maps a buffer pixel to the screen position of its top-left corner.
    pub fn buffer_to_screen(point: BufferPoint, canvas_rect: Rect, buffer_size: [usize; 2]) -> Pos2 {
        let sx = canvas_rect.width() / buffer_size[0].max(1) as f32;
        let sy = canvas_rect.height() / buffer_size[1].max(1) as f32;
        canvas_rect.min + Vec2::new(point.x as f32 * sx, point.y as f32 * sy)
    }

    /// Where the canvas sits on screen: centred in `view`, shifted by pan, sized by scale.
    pub fn canvas_rect(&self, view: Rect, buffer_size: [usize; 2]) -> Rect {
        let size = Vec2::new(buffer_size[0] as f32, buffer_size[1] as f32) * self.scale;
        Rect::from_center_size(view.center() + self.pan, size)
    }

    /// Multiplies the scale by a pinch distance ratio, clamped to the configured range.
    pub fn apply_pinch(&mut self, ratio: f32) {
        if ratio.is_nan() {
            return;
        }
        self.scale = (self.scale * ratio).clamp(self.settings.min_scale, self.settings.max_scale);
    }

    pub fn apply_pan(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
        self.pending_pan = None;
    }

    /// Requests a new pan value; applied at the next `commit_frame` when coalescing.
    pub fn request_pan(&mut self, pan: Vec2) {
        if self.settings.coalesce_pan {
            self.pending_pan = Some(pan);
        } else {
            self.set_pan(pan);
        }
    }

    /// Applies the most recent pending pan. Returns true if the pan changed.
    pub fn commit_frame(&mut self) -> bool {
        match self.pending_pan.take() {
            Some(pan) if pan != self.pan => {
                self.pan = pan;
                true
            }
            _ => false,
        }
    }

    /// Picks a scale that shows the whole artwork inside `view_size`, capped at the default scale.
    pub fn fit_to_view(&mut self, view_size: Vec2, buffer_size: [usize; 2]) {
        let [w, h] = buffer_size;
        self.pan = Vec2::ZERO;
        self.pending_pan = None;
        if w == 0 || h == 0 || view_size.x <= 0.0 || view_size.y <= 0.0 {
            self.scale = self.settings.default_scale;
            return;
        }
        let fit = (view_size.x / w as f32).min(view_size.y / h as f32) * self.settings.fit_margin;
        self.scale = fit
            .min(self.settings.default_scale)
            .clamp(self.settings.min_scale, self.settings.max_scale);
    }
}
