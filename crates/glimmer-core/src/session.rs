use std::path::Path;

use tracing::{debug, warn};

use crate::adjust::{transform, AdjustParams};
use crate::buffer::PixelBuffer;
use crate::error::{GlimmerError, Result};
use crate::io::image_io::{encode_png, save_image};

/// Editing state for one loaded image.
///
/// The source buffer is kept untouched; every `apply` recomputes the output
/// from it with the current parameters, so edits never accumulate.
#[derive(Debug, Default)]
pub struct Session {
    source: Option<PixelBuffer>,
    params: AdjustParams,
    output: Option<PixelBuffer>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source image and render it with the current parameters.
    pub fn load(&mut self, source: PixelBuffer) -> Result<&PixelBuffer> {
        debug!(
            width = source.width(),
            height = source.height(),
            "source image loaded"
        );
        self.source = Some(source);
        self.output = None;
        self.apply()
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&PixelBuffer> {
        self.source.as_ref()
    }

    /// Last successfully rendered buffer.
    pub fn output(&self) -> Option<&PixelBuffer> {
        self.output.as_ref()
    }

    pub fn params(&self) -> AdjustParams {
        self.params
    }

    pub fn set_params(&mut self, params: AdjustParams) {
        self.params = params;
    }

    pub fn set_brightness(&mut self, brightness: i32) {
        self.params.brightness = brightness;
    }

    pub fn set_contrast(&mut self, contrast: i32) {
        self.params.contrast = contrast;
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.params.opacity = opacity;
    }

    /// Recompute the output from the source.
    ///
    /// On failure the previous output is left in place.
    pub fn apply(&mut self) -> Result<&PixelBuffer> {
        let Some(source) = self.source.as_ref() else {
            warn!("adjustment requested before an image was loaded");
            return Err(GlimmerError::NoImageLoaded);
        };
        let rendered = transform(source, &self.params)?;
        Ok(self.output.insert(rendered))
    }

    /// Restore identity parameters, re-rendering if an image is loaded.
    pub fn reset(&mut self) -> Result<()> {
        self.params = AdjustParams::default();
        if self.source.is_some() {
            self.apply()?;
        }
        Ok(())
    }

    /// The buffer an export would write: the rendered output, or the source
    /// when nothing has been rendered yet.
    pub fn current(&self) -> Result<&PixelBuffer> {
        self.output
            .as_ref()
            .or(self.source.as_ref())
            .ok_or(GlimmerError::NoImageLoaded)
    }

    pub fn export(&self, path: &Path) -> Result<()> {
        save_image(self.current()?, path)
    }

    pub fn export_png_bytes(&self) -> Result<Vec<u8>> {
        encode_png(self.current()?)
    }
}
