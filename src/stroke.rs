use crate::color::FillColor;
use crate::pixel_buffer::{BufferPoint, PixelBuffer};

/// Color and width of a freehand stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: FillColor,
    pub width: f32,
}

/// A freehand stroke being painted onto a working copy.
///
/// Each new point rasterizes the segment from the previous point with
/// round caps, so a stroke of N points paints N-1 connected segments.
#[derive(Debug, Clone)]
pub struct ActiveStroke {
    style: StrokeStyle,
    points: Vec<BufferPoint>,
    painted: usize,
}

impl ActiveStroke {
    /// Starts a stroke and stamps its first point.
    pub fn begin(buffer: &mut PixelBuffer, start: BufferPoint, style: StrokeStyle) -> Self {
        let painted = stamp(buffer, start, style);
        Self {
            style,
            points: vec![start],
            painted,
        }
    }

    /// Extends the stroke to `point`, returning the number of pixels changed.
    pub fn extend(&mut self, buffer: &mut PixelBuffer, point: BufferPoint) -> usize {
        let Some(&last) = self.points.last() else {
            return 0;
        };
        if last == point {
            return 0;
        }
        let changed = paint_segment(buffer, last, point, self.style);
        self.points.push(point);
        self.painted += changed;
        changed
    }

    pub fn points(&self) -> &[BufferPoint] {
        &self.points
    }

    /// Total pixels changed since the stroke began
    pub fn painted(&self) -> usize {
        self.painted
    }
}

/// Paints a round dot of the style's width centred on `center`.
pub fn stamp(buffer: &mut PixelBuffer, center: BufferPoint, style: StrokeStyle) -> usize {
    let paint = style.color.to_rgba();
    let radius = (style.width.max(1.0) / 2.0).floor() as i64;
    let mut changed = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let point = BufferPoint::new(center.x + dx, center.y + dy);
            match buffer.get(point) {
                Some(pixel) if pixel != paint => {
                    buffer.set(point, paint);
                    changed += 1;
                }
                _ => {}
            }
        }
    }
    changed
}

/// Paints a line from `from` to `to` by stamping at every pixel step.
pub fn paint_segment(
    buffer: &mut PixelBuffer,
    from: BufferPoint,
    to: BufferPoint,
    style: StrokeStyle,
) -> usize {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return stamp(buffer, from, style);
    }
    let mut changed = 0;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let point = BufferPoint::new(
            from.x + (dx as f64 * t).round() as i64,
            from.y + (dy as f64 * t).round() as i64,
        );
        changed += stamp(buffer, point, style);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn style(width: f32) -> StrokeStyle {
        StrokeStyle {
            color: FillColor::rgb(0, 0, 255),
            width,
        }
    }

    #[test]
    fn test_thin_horizontal_segment() {
        let mut buffer = PixelBuffer::filled(10, 3, WHITE).unwrap();
        let changed = paint_segment(&mut buffer, BufferPoint::new(1, 1), BufferPoint::new(8, 1), style(1.0));
        assert_eq!(changed, 8);
        assert_eq!(buffer.get(BufferPoint::new(0, 1)), Some(WHITE));
        assert_eq!(buffer.get(BufferPoint::new(8, 1)), Some([0, 0, 255, 255]));
        assert_eq!(buffer.get(BufferPoint::new(4, 0)), Some(WHITE));
    }

    #[test]
    fn test_wide_stamp_is_round_and_clipped() {
        let mut buffer = PixelBuffer::filled(5, 5, WHITE).unwrap();
        // radius 2 disc at the corner: only the in-bounds quarter is painted
        let changed = stamp(&mut buffer, BufferPoint::new(0, 0), style(4.0));
        assert_eq!(changed, 6);
        assert_eq!(buffer.get(BufferPoint::new(2, 2)), Some(WHITE));
    }

    #[test]
    fn test_active_stroke_accumulates() {
        let mut buffer = PixelBuffer::filled(10, 10, WHITE).unwrap();
        let mut stroke = ActiveStroke::begin(&mut buffer, BufferPoint::new(0, 0), style(1.0));
        assert_eq!(stroke.painted(), 1);
        assert_eq!(stroke.extend(&mut buffer, BufferPoint::new(0, 0)), 0);
        assert_eq!(stroke.extend(&mut buffer, BufferPoint::new(0, 4)), 4);
        assert_eq!(stroke.points().len(), 2);
        assert_eq!(stroke.painted(), 5);
    }
}
