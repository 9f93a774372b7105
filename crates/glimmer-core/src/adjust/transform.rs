use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::adjust::params::AdjustParams;
use crate::buffer::PixelBuffer;
use crate::consts::{
    ALPHA_INDEX, CHANNELS, CHANNEL_MAX, MID_GRAY, PARALLEL_PIXEL_THRESHOLD, SINGULAR_CONTRAST,
};
use crate::error::{GlimmerError, Result};

/// Samples per parallel work item when no row stride is known.
const FLAT_CHUNK_SAMPLES: usize = CHANNELS * 4096;

/// Legacy contrast factor: `259 * (255 + c) / (255 * (259 - c))`.
///
/// Exactly 1.0 at `c = 0`. Fails at `c = 259`, where the denominator is zero.
pub fn contrast_factor(contrast: i32) -> Result<f64> {
    if contrast == SINGULAR_CONTRAST {
        return Err(GlimmerError::InvalidParameter { contrast });
    }
    let c = contrast as f64;
    Ok(259.0 * (255.0 + c) / (255.0 * (259.0 - c)))
}

/// Store a computed channel value into 8-bit range.
///
/// Values below 0 become 0, above 255 become 255, and in-range values round
/// to nearest with ties to even. NaN is rejected.
pub fn clamp8(value: f64) -> Result<u8> {
    if value.is_nan() {
        return Err(GlimmerError::InvalidValue { value });
    }
    Ok(value.clamp(0.0, CHANNEL_MAX).round_ties_even() as u8)
}

/// Output value for every possible input sample, one table for the color
/// channels and one for alpha.
struct ChannelTables {
    color: [u8; 256],
    alpha: [u8; 256],
}

impl ChannelTables {
    fn new(params: &AdjustParams) -> Result<Self> {
        let factor = contrast_factor(params.contrast)?;
        let brightness = params.brightness as f64;
        let opacity = params.opacity;

        let mut color = [0u8; 256];
        let mut alpha = [0u8; 256];
        for v in 0..256 {
            let x = v as f64;
            // contrast, then brightness, then clamp
            let contrasted = factor * (x - MID_GRAY) + MID_GRAY;
            color[v] = clamp8(contrasted + brightness)?;
            alpha[v] = clamp8(x * opacity)?;
        }

        Ok(Self { color, alpha })
    }

    fn apply(&self, src: &[u8], dst: &mut [u8]) {
        for (s, d) in src
            .chunks_exact(CHANNELS)
            .zip(dst.chunks_exact_mut(CHANNELS))
        {
            d[0] = self.color[s[0] as usize];
            d[1] = self.color[s[1] as usize];
            d[2] = self.color[s[2] as usize];
            d[ALPHA_INDEX] = self.alpha[s[ALPHA_INDEX] as usize];
        }
    }

    /// `chunk_len` must be a non-zero multiple of `CHANNELS`.
    fn apply_all(&self, src: &[u8], dst: &mut [u8], chunk_len: usize) {
        if src.len() / CHANNELS >= PARALLEL_PIXEL_THRESHOLD {
            dst.par_chunks_mut(chunk_len)
                .zip(src.par_chunks(chunk_len))
                .for_each(|(d, s)| self.apply(s, d));
        } else {
            self.apply(src, dst);
        }
    }
}

/// Apply contrast, brightness and opacity to `source`, returning a new buffer.
///
/// Each pixel depends only on its own samples. R, G and B go through
/// contrast, brightness and a clamp; alpha is only scaled by opacity and
/// clamped. `source` is never modified.
pub fn transform(source: &PixelBuffer, params: &AdjustParams) -> Result<PixelBuffer> {
    let start = Instant::now();
    let tables = ChannelTables::new(params)?;

    let src = source.as_raw();
    let mut out = vec![0u8; src.len()];
    tables.apply_all(src, &mut out, source.stride().max(CHANNELS));

    debug!(
        width = source.width(),
        height = source.height(),
        %params,
        elapsed_us = start.elapsed().as_micros() as u64,
        "transform complete"
    );

    PixelBuffer::from_raw(source.width(), source.height(), out)
}

/// Same as [`transform`] for a bare interleaved RGBA sample slice.
pub fn transform_samples(samples: &[u8], params: &AdjustParams) -> Result<Vec<u8>> {
    if samples.len() % CHANNELS != 0 {
        return Err(GlimmerError::InvalidBufferLength { len: samples.len() });
    }
    let tables = ChannelTables::new(params)?;
    let mut out = vec![0u8; samples.len()];
    tables.apply_all(samples, &mut out, FLAT_CHUNK_SAMPLES);
    Ok(out)
}
