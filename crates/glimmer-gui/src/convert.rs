use glimmer_core::buffer::PixelBuffer;

/// Convert an RGBA8 buffer (straight alpha) to an egui ColorImage.
pub fn buffer_to_color_image(buffer: &PixelBuffer) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [buffer.width() as usize, buffer.height() as usize],
        buffer.as_raw(),
    )
}
