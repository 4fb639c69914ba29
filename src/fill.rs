use crate::color::FillColor;
use crate::config::FillSettings;
use crate::pixel_buffer::{BufferPoint, PixelBuffer, Rgba, is_outline};

/// Why a fill did not touch the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The seed is not inside the buffer
    OutOfBounds,
    /// The seed is part of the line art
    Outline,
    /// The seed is outside the artwork (alpha 0)
    Transparent,
    /// No artwork has been loaded yet
    NoBuffer,
}

/// Outcome of a flood fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillResult {
    Skipped(SkipReason),
    /// The fill ran; `painted` may be 0 when the region already had the color.
    Filled { painted: usize },
}

impl FillResult {
    /// True if at least one pixel changed
    pub fn changed(&self) -> bool {
        matches!(self, Self::Filled { painted } if *painted > 0)
    }
}

/// 4-connected flood fill bounded by outline pixels and transparency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloodFill {
    settings: FillSettings,
}

impl Default for FloodFill {
    fn default() -> Self {
        Self::new(FillSettings::default())
    }
}

impl FloodFill {
    pub fn new(settings: FillSettings) -> Self {
        Self { settings }
    }

    fn within_tolerance(&self, pixel: Rgba, seed: Rgba) -> bool {
        let tolerance = self.settings.tolerance;
        pixel[..3]
            .iter()
            .zip(&seed[..3])
            .all(|(p, s)| p.abs_diff(*s) <= tolerance)
    }

    /// Repaints the region reachable from `seed` in place.
    ///
    /// Every comparison is made against the seed's original color, so the region
    /// cannot drift across a gradient. Neighbours are pushed unconditionally and
    /// checked when popped; a painted pixel equals `color` and is never revisited.
    pub fn fill(&self, buffer: &mut PixelBuffer, seed: BufferPoint, color: FillColor) -> FillResult {
        let Some(seed_pixel) = buffer.get(seed) else {
            return FillResult::Skipped(SkipReason::OutOfBounds);
        };
        if is_outline(seed_pixel, self.settings.outline_threshold) {
            return FillResult::Skipped(SkipReason::Outline);
        }
        if seed_pixel[3] == 0 {
            return FillResult::Skipped(SkipReason::Transparent);
        }

        let paint = color.to_rgba();
        let mut painted = 0;
        let mut stack = vec![seed];

        while let Some(point) = stack.pop() {
            let Some(pixel) = buffer.get(point) else {
                continue;
            };
            if pixel[3] == 0 || is_outline(pixel, self.settings.outline_threshold) {
                continue;
            }
            if !self.within_tolerance(pixel, seed_pixel) || color.matches_rgb(pixel) {
                continue;
            }

            buffer.set(point, paint);
            painted += 1;

            let BufferPoint { x, y } = point;
            stack.extend([
                BufferPoint::new(x + 1, y),
                BufferPoint::new(x - 1, y),
                BufferPoint::new(x, y + 1),
                BufferPoint::new(x, y - 1),
            ]);
        }

        FillResult::Filled { painted }
    }
}
