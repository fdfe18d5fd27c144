//! Linear tone adjustment
//!
//! Contrast/brightness mapping over intensity samples:
//! `y = contrast * x + brightness`, clamped to `[0, 255]`. The mapping
//! is per-sample and channel-agnostic, so one call adjusts a grayscale
//! buffer or an interleaved RGBA buffer alike.
//!
//! Because samples live in `[0, 255]`, the affine curve is hoisted into
//! a 256-entry lookup table once per call; the per-sample work is then a
//! single table read, which matters when a slider change reprocesses
//! millions of samples.

use crate::{EnhanceError, EnhanceResult};
use tonescale_core::{IntensityBuffer, MAX_SAMPLE};

/// A 256-entry lookup table mapping input levels [0..255] to adjusted
/// output levels [0..255].
pub type ToneLut = [u8; 256];

/// Contrast and brightness parameters for the linear tone transform.
///
/// `contrast` is a multiplicative factor and `brightness` an additive
/// offset. A UI typically constrains them to ranges like `[0, 3]` and
/// `[-255, 255]`; the transform accepts any finite values and rejects
/// non-finite ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    pub contrast: f32,
    pub brightness: f32,
}

impl ToneParams {
    /// Create new tone parameters
    pub fn new(contrast: f32, brightness: f32) -> Self {
        Self {
            contrast,
            brightness,
        }
    }

    /// The identity mapping: contrast 1.0, brightness 0.0
    pub fn identity() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Check that both parameters are finite.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::InvalidParameters`] if `contrast` or
    /// `brightness` is NaN or infinite. A non-finite value entering the
    /// clamp arithmetic would produce undefined output, so it is
    /// rejected before any sample is touched.
    pub fn validate(&self) -> EnhanceResult<()> {
        if !self.contrast.is_finite() {
            return Err(EnhanceError::InvalidParameters(format!(
                "contrast must be finite, got {}",
                self.contrast
            )));
        }
        if !self.brightness.is_finite() {
            return Err(EnhanceError::InvalidParameters(format!(
                "brightness must be finite, got {}",
                self.brightness
            )));
        }
        Ok(())
    }
}

impl Default for ToneParams {
    fn default() -> Self {
        Self::identity()
    }
}

/// Evaluate the affine curve for one sample: scale, offset, round to
/// nearest, clamp to [0, 255].
#[inline]
fn apply_affine(params: ToneParams, value: u16) -> u16 {
    let mapped = params.contrast * f32::from(value) + params.brightness + 0.5;
    (mapped as i32).clamp(0, 255) as u16
}

/// Generate the lookup table for a contrast/brightness mapping.
///
/// Entry `i` holds `contrast * i + brightness` rounded to nearest
/// (half away from zero) and clamped to `[0, 255]`.
///
/// Useful on its own when a caller holds several buffers (e.g.
/// per-channel views of one image) and wants to build the curve once;
/// [`contrast_brightness`] composes this with [`map_lut`].
///
/// # Errors
///
/// Returns [`EnhanceError::InvalidParameters`] if either parameter is
/// non-finite.
pub fn tone_lut(params: ToneParams) -> EnhanceResult<ToneLut> {
    params.validate()?;

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = apply_affine(params, i as u16) as u8;
    }
    Ok(lut)
}

/// Map a buffer through a lookup table, producing a new buffer.
///
/// The input buffer is not modified. A sample above the 8-bit range
/// (an upstream contract violation) reads the top table entry.
pub fn map_lut(buf: &IntensityBuffer, lut: &ToneLut) -> IntensityBuffer {
    let samples = buf
        .samples()
        .iter()
        .map(|&x| u16::from(lut[usize::from(x.min(MAX_SAMPLE))]))
        .collect();
    IntensityBuffer::from_samples(samples)
}

/// Apply a linear contrast/brightness transform to a buffer.
///
/// Each output sample is `contrast * x + brightness`, rounded to
/// nearest and clamped to `[0, 255]`. The output buffer has the same
/// length and layout as the input; the input is left untouched so the
/// caller can revert to it. An empty buffer yields an empty buffer.
///
/// `ToneParams::identity()` reproduces the input exactly.
///
/// # Errors
///
/// Returns [`EnhanceError::InvalidParameters`] if `contrast` or
/// `brightness` is non-finite. Never fails on buffer contents: a sample
/// above the 8-bit range is passed through the affine curve directly
/// and clamped like any other value.
///
/// # Example
///
/// ```
/// use tonescale_core::IntensityBuffer;
/// use tonescale_enhance::{ToneParams, contrast_brightness};
///
/// let buf = IntensityBuffer::from_bytes(&[10, 200, 50]);
/// let out = contrast_brightness(&buf, ToneParams::new(2.0, -20.0)).unwrap();
/// assert_eq!(out.samples(), &[0, 255, 80]);
/// ```
pub fn contrast_brightness(
    buf: &IntensityBuffer,
    params: ToneParams,
) -> EnhanceResult<IntensityBuffer> {
    let lut = tone_lut(params)?;

    let samples = buf
        .samples()
        .iter()
        .map(|&x| match lut.get(usize::from(x)) {
            Some(&y) => u16::from(y),
            None => apply_affine(params, x),
        })
        .collect();
    Ok(IntensityBuffer::from_samples(samples))
}
