use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::Result;

/// Load any image the `image` crate can decode as an RGBA8 buffer.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?;
    let buffer = PixelBuffer::from(img.to_rgba8());
    debug!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        "decoded image"
    );
    Ok(buffer)
}

/// Decode an in-memory encoded image (PNG, JPEG, ...) as an RGBA8 buffer.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes)?;
    Ok(PixelBuffer::from(img.to_rgba8()))
}

/// Save a buffer as 8-bit RGBA PNG.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    buffer
        .to_rgba_image()
        .save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a buffer as 8-bit RGBA TIFF.
pub fn save_tiff(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    buffer
        .to_rgba_image()
        .save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a buffer as BMP.
pub fn save_bmp(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    buffer
        .to_rgba_image()
        .save_with_format(path, ImageFormat::Bmp)?;
    Ok(())
}

/// Save a buffer, choosing format from file extension. Defaults to PNG.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("tiff" | "tif") => save_tiff(buffer, path),
        Some("bmp") => save_bmp(buffer, path),
        _ => save_png(buffer, path),
    }
}

/// Encode a buffer as PNG bytes without touching the filesystem.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    buffer
        .to_rgba_image()
        .write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
