use std::io::Cursor;
use std::path::Path;

use image::ImageEncoder;
use image::codecs::png::PngEncoder;

use crate::error::{ExportError, LoadError};
use crate::pixel_buffer::PixelBuffer;

/// Default file name offered when saving a finished page
pub const EXPORT_FILE_NAME: &str = "coloring.png";

/// Decode artwork from a file on disk into an RGBA buffer
pub fn load_artwork(path: impl AsRef<Path>) -> Result<PixelBuffer, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let buffer = decode_artwork(&bytes)?;
    log::info!(
        "Loaded artwork {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// Decode artwork from encoded image bytes (PNG or JPEG)
pub fn decode_artwork(bytes: &[u8]) -> Result<PixelBuffer, LoadError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::new(
        width as usize,
        height as usize,
        rgba.into_raw(),
    )?)
}

/// Encode a buffer as PNG bytes
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    PngEncoder::new(Cursor::new(&mut bytes)).write_image(
        buffer.pixels(),
        buffer.width() as u32,
        buffer.height() as u32,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode a buffer as PNG and write it to `path`
pub fn save_png(path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<(), ExportError> {
    let path = path.as_ref();
    let bytes = encode_png(buffer)?;
    std::fs::write(path, &bytes)?;
    log::info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
