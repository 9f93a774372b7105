use serde::{Deserialize, Serialize};

use crate::consts::{BRIGHTNESS_RANGE, CONTRAST_RANGE, OPACITY_RANGE};

/// Current brightness, contrast and opacity settings.
///
/// `Default` is the identity: applying it reproduces the source exactly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustParams {
    /// Added to R, G and B after contrast.
    #[serde(default)]
    pub brightness: i32,
    /// Legacy contrast amount. 0 leaves channels unchanged, 259 is invalid.
    #[serde(default)]
    pub contrast: i32,
    /// Multiplier applied to alpha.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl Default for AdjustParams {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 0,
            opacity: default_opacity(),
        }
    }
}

impl AdjustParams {
    pub fn new(brightness: i32, contrast: i32, opacity: f64) -> Self {
        Self {
            brightness,
            contrast,
            opacity,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Pull every field into its slider range. A NaN opacity falls back to
    /// the default. Contrast 259 lies outside the range, so the result always
    /// has a valid contrast factor.
    pub fn clamped(self) -> Self {
        let opacity = if self.opacity.is_nan() {
            default_opacity()
        } else {
            self.opacity
                .clamp(*OPACITY_RANGE.start(), *OPACITY_RANGE.end())
        };
        Self {
            brightness: self
                .brightness
                .clamp(*BRIGHTNESS_RANGE.start(), *BRIGHTNESS_RANGE.end()),
            contrast: self
                .contrast
                .clamp(*CONTRAST_RANGE.start(), *CONTRAST_RANGE.end()),
            opacity,
        }
    }
}

impl std::fmt::Display for AdjustParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "brightness={}, contrast={}, opacity={:.2}",
            self.brightness, self.contrast, self.opacity
        )
    }
}
