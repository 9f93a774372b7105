/// Interleaved samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Index of the alpha sample within a pixel.
pub const ALPHA_INDEX: usize = 3;

/// Minimum pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Pivot of the contrast curve. Channels at this value are fixed points.
pub const MID_GRAY: f64 = 128.0;

/// Contrast value that zeroes the denominator of the contrast factor.
pub const SINGULAR_CONTRAST: i32 = 259;

/// Largest value an 8-bit channel can hold.
pub const CHANNEL_MAX: f64 = 255.0;

/// Brightness slider range.
pub const BRIGHTNESS_RANGE: std::ops::RangeInclusive<i32> = -255..=255;

/// Contrast slider range.
pub const CONTRAST_RANGE: std::ops::RangeInclusive<i32> = -255..=255;

/// Opacity slider range.
pub const OPACITY_RANGE: std::ops::RangeInclusive<f64> = 0.0..=1.0;

/// File name offered when exporting the adjusted image.
pub const DEFAULT_EXPORT_FILENAME: &str = "result.png";
