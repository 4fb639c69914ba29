use std::sync::Arc;

use crate::error::BufferError;

/// One RGBA pixel
pub type Rgba = [u8; 4];

/// Immutable, shareable canvas state as stored in history
pub type Snapshot = Arc<PixelBuffer>;

/// Channel threshold below which a non-transparent pixel counts as line art
pub const OUTLINE_THRESHOLD: u8 = 30;

/// Integer position in buffer space. May lie outside the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferPoint {
    pub x: i64,
    pub y: i64,
}

impl BufferPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Returns true if the pixel is an impassable outline: near-black and not transparent.
pub fn is_outline(pixel: Rgba, threshold: u8) -> bool {
    let [r, g, b, a] = pixel;
    r < threshold && g < threshold && b < threshold && a > 0
}

/// A width x height RGBA raster, row-major with the origin at the top left.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    /// Wraps raw RGBA bytes, checking that the length matches the dimensions.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::Empty { width, height });
        }
        if width.checked_mul(height).and_then(|n| n.checked_mul(4)) != Some(pixels.len()) {
            return Err(BufferError::SizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a buffer where every pixel has the same color.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Result<Self, BufferError> {
        let count = width.saturating_mul(height);
        let pixels = color.iter().copied().cycle().take(count.saturating_mul(4)).collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `[width, height]`, the order egui uses for image sizes
    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn contains(&self, point: BufferPoint) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u64) < self.width as u64
            && (point.y as u64) < self.height as u64
    }

    fn offset(&self, point: BufferPoint) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }
        Some((point.y as usize * self.width + point.x as usize) * 4)
    }

    /// Reads a pixel, or `None` when the point is outside the buffer.
    pub fn get(&self, point: BufferPoint) -> Option<Rgba> {
        let i = self.offset(point)?;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Writes a pixel. Returns false (and writes nothing) outside the buffer.
    pub fn set(&mut self, point: BufferPoint, color: Rgba) -> bool {
        match self.offset(point) {
            Some(i) => {
                self.pixels[i..i + 4].copy_from_slice(&color);
                true
            }
            None => false,
        }
    }

    /// Freezes this buffer into a history snapshot.
    pub fn into_snapshot(self) -> Snapshot {
        Arc::new(self)
    }

    /// Converts to an egui image for texture upload.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(self.size(), &self.pixels)
    }
}
