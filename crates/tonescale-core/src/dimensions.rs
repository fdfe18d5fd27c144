//! ImageDimensions - relating a flat buffer back to a 2D image
//!
//! The pipeline itself never needs width or height; dimensions exist so
//! the caller can reconstruct a displayable image from a flat sample
//! buffer and sanity-check that a buffer and an image actually belong
//! together.

use crate::buffer::IntensityBuffer;
use crate::error::{Error, Result};

/// Width and height of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    /// Create new dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels
    #[inline]
    pub fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Number of flat samples for an image with `channels` samples per
    /// pixel (1 for grayscale, 4 for interleaved RGBA).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `channels` is 0.
    pub fn sample_count(&self, channels: u8) -> Result<u64> {
        if channels == 0 {
            return Err(Error::InvalidParameter(
                "channels must be >= 1".to_string(),
            ));
        }
        self.pixels()
            .checked_mul(u64::from(channels))
            .ok_or_else(|| Error::InvalidParameter("sample count overflows u64".to_string()))
    }

    /// Check that `buffer` has exactly the sample count these dimensions
    /// imply for `channels` samples per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the lengths disagree, or
    /// [`Error::InvalidParameter`] if `channels` is 0.
    pub fn matches(&self, buffer: &IntensityBuffer, channels: u8) -> Result<()> {
        let expected = self.sample_count(channels)?;
        let actual = buffer.len() as u64;
        if expected != actual {
            return Err(Error::DimensionMismatch {
                width: self.width,
                height: self.height,
                channels,
                expected,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_and_samples() {
        let dims = ImageDimensions::new(640, 480);
        assert_eq!(dims.pixels(), 307_200);
        assert_eq!(dims.sample_count(1).unwrap(), 307_200);
        assert_eq!(dims.sample_count(4).unwrap(), 1_228_800);
    }

    #[test]
    fn test_zero_channels_rejected() {
        let dims = ImageDimensions::new(2, 2);
        assert!(matches!(
            dims.sample_count(0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_matches() {
        let dims = ImageDimensions::new(2, 3);
        let gray = IntensityBuffer::from_bytes(&[0; 6]);
        let rgba = IntensityBuffer::from_bytes(&[0; 24]);
        assert!(dims.matches(&gray, 1).is_ok());
        assert!(dims.matches(&rgba, 4).is_ok());
        assert!(matches!(
            dims.matches(&gray, 4),
            Err(Error::DimensionMismatch { expected: 24, actual: 6, .. })
        ));
    }

    #[test]
    fn test_large_dimensions_do_not_overflow() {
        let dims = ImageDimensions::new(u32::MAX, u32::MAX);
        assert_eq!(dims.pixels(), (u32::MAX as u64) * (u32::MAX as u64));
        // (2^32 - 1)^2 * 4 exceeds u64
        assert!(matches!(
            dims.sample_count(4),
            Err(Error::InvalidParameter(_))
        ));
    }
}
