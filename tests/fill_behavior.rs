use eframe_coloring::pixel_buffer::Rgba;
use eframe_coloring::{BufferPoint, Editor, FillColor, FillResult, FloodFill, PixelBuffer, SkipReason};

const WHITE: Rgba = [255, 255, 255, 255];
const BLACK: Rgba = [0, 0, 0, 255];
const RED: FillColor = FillColor::rgb(0xFF, 0x00, 0x00);

/// 500x500 white page with a 2px black square outline around a 100x100 interior at 200..300
fn square_page() -> PixelBuffer {
    let mut page = PixelBuffer::filled(500, 500, WHITE).unwrap();
    for y in 198..302 {
        for x in 198..302 {
            let interior = (200..300).contains(&x) && (200..300).contains(&y);
            if !interior {
                page.set(BufferPoint::new(x, y), BLACK);
            }
        }
    }
    page
}

fn count(buffer: &PixelBuffer, color: Rgba) -> usize {
    buffer
        .pixels()
        .chunks_exact(4)
        .filter(|px| *px == color.as_slice())
        .count()
}

#[test]
fn test_fill_square_interior() {
    let mut editor = Editor::default();
    editor.load_artwork(square_page());
    editor.set_color(RED);

    let result = editor.fill_at(BufferPoint::new(250, 250));
    assert_eq!(result, FillResult::Filled { painted: 10_000 });

    let page = editor.current_snapshot().unwrap();
    assert_eq!(count(page, RED.to_rgba()), 10_000);
    // the outline and the outside are untouched
    assert_eq!(count(page, BLACK), 104 * 104 - 100 * 100);
    assert_eq!(page.get(BufferPoint::new(10, 10)), Some(WHITE));
    assert_eq!(page.get(BufferPoint::new(199, 250)), Some(BLACK));
    assert_eq!(editor.history().unwrap().len(), 2);
}

#[test]
fn test_fill_twice_is_idempotent() {
    let engine = FloodFill::default();
    let mut page = square_page();
    engine.fill(&mut page, BufferPoint::new(250, 250), RED);
    let once = page.clone();

    let second = engine.fill(&mut page, BufferPoint::new(250, 250), RED);
    assert_eq!(second, FillResult::Filled { painted: 0 });
    assert_eq!(page, once);
}

#[test]
fn test_repeat_fill_adds_no_history() {
    let mut editor = Editor::default();
    editor.load_artwork(square_page());
    editor.set_color(RED);
    assert!(editor.fill_at(BufferPoint::new(250, 250)).changed());
    assert!(!editor.fill_at(BufferPoint::new(250, 250)).changed());
    assert_eq!(editor.history().unwrap().len(), 2);
}

#[test]
fn test_outline_and_transparent_pixels_survive() {
    let engine = FloodFill::default();
    let mut page = PixelBuffer::filled(5, 1, WHITE).unwrap();
    page.set(BufferPoint::new(1, 0), [10, 10, 10, 255]);
    page.set(BufferPoint::new(3, 0), [200, 200, 200, 0]);

    assert_eq!(
        engine.fill(&mut page, BufferPoint::new(1, 0), RED),
        FillResult::Skipped(SkipReason::Outline)
    );
    assert_eq!(
        engine.fill(&mut page, BufferPoint::new(3, 0), RED),
        FillResult::Skipped(SkipReason::Transparent)
    );
    assert_eq!(
        engine.fill(&mut page, BufferPoint::new(5, 0), RED),
        FillResult::Skipped(SkipReason::OutOfBounds)
    );

    // a fill from the right edge stops at the transparent pixel
    assert_eq!(
        engine.fill(&mut page, BufferPoint::new(4, 0), RED),
        FillResult::Filled { painted: 1 }
    );
    assert_eq!(page.get(BufferPoint::new(3, 0)), Some([200, 200, 200, 0]));
    assert_eq!(page.get(BufferPoint::new(1, 0)), Some([10, 10, 10, 255]));
}

#[test]
fn test_regions_are_four_connected() {
    // Two white cells that touch only at a corner
    let engine = FloodFill::default();
    let mut page = PixelBuffer::filled(2, 2, BLACK).unwrap();
    page.set(BufferPoint::new(0, 0), WHITE);
    page.set(BufferPoint::new(1, 1), WHITE);

    assert_eq!(
        engine.fill(&mut page, BufferPoint::new(0, 0), RED),
        FillResult::Filled { painted: 1 }
    );
    assert_eq!(page.get(BufferPoint::new(1, 1)), Some(WHITE));
}

#[test]
fn test_tolerance_boundary() {
    let engine = FloodFill::default();
    let mut page = PixelBuffer::filled(3, 1, WHITE).unwrap();
    page.set(BufferPoint::new(1, 0), [245, 245, 245, 255]);
    page.set(BufferPoint::new(2, 0), [244, 255, 255, 255]);

    let result = engine.fill(&mut page, BufferPoint::new(0, 0), RED);
    assert_eq!(result, FillResult::Filled { painted: 2 });
    // off by 11 in one channel stays
    assert_eq!(page.get(BufferPoint::new(2, 0)), Some([244, 255, 255, 255]));
}

#[test]
fn test_fill_without_artwork() {
    let mut editor = Editor::default();
    assert_eq!(
        editor.fill_at(BufferPoint::new(0, 0)),
        FillResult::Skipped(SkipReason::NoBuffer)
    );
    assert!(!editor.can_undo());
}
