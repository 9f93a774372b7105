#![allow(dead_code)]

use glimmer_core::buffer::PixelBuffer;

/// A 1x1 buffer holding a single pixel.
pub fn single_pixel(rgba: [u8; 4]) -> PixelBuffer {
    PixelBuffer::from_pixel(1, 1, rgba)
}

/// A buffer whose samples cycle through every byte value, so each channel
/// sees a spread of inputs.
pub fn ramp_buffer(width: u32, height: u32) -> PixelBuffer {
    let len = width as usize * height as usize * 4;
    let data: Vec<u8> = (0..len).map(|i| ((i * 7 + i / 4) % 256) as u8).collect();
    PixelBuffer::from_raw(width, height, data).expect("ramp dimensions match")
}

/// Reference implementation of one color channel, written out step by step.
pub fn reference_color(value: u8, brightness: i32, contrast: i32) -> u8 {
    let c = contrast as f64;
    let factor = 259.0 * (255.0 + c) / (255.0 * (259.0 - c));
    let v = factor * (value as f64 - 128.0) + 128.0 + brightness as f64;
    if v < 0.0 {
        0
    } else if v > 255.0 {
        255
    } else {
        v.round_ties_even() as u8
    }
}

/// Reference implementation of the alpha channel.
pub fn reference_alpha(value: u8, opacity: f64) -> u8 {
    (value as f64 * opacity).clamp(0.0, 255.0).round_ties_even() as u8
}
