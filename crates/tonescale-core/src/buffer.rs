//! IntensityBuffer - flat intensity sample storage
//!
//! The buffer holds the decoded samples of an image as one flat sequence
//! in row-major, channel-interleaved order. The pipeline is
//! channel-agnostic: every element is treated identically, whether it
//! came from a grayscale image or from interleaved RGBA data.

use crate::error::{Error, Result};

/// Maximum valid intensity sample value.
pub const MAX_SAMPLE: u16 = 255;

/// A flat, ordered sequence of intensity samples.
///
/// Samples are stored as `u16` but are contractually confined to the
/// 8-bit range `[0, 255]`. The wider storage type exists so that an
/// out-of-range value handed over by a broken collaborator is
/// representable and can be detected (see
/// [`IntensityBuffer::histogram`]) instead of being silently wrapped at
/// construction time.
///
/// The core never mutates a buffer it is given; every transform
/// allocates a fresh output buffer, so the caller can always revert to
/// the pre-transform state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntensityBuffer {
    samples: Vec<u16>,
}

impl IntensityBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Create a buffer from raw samples
    ///
    /// The samples are taken as-is; values above 255 are representable
    /// and will be reported by range-checked operations downstream.
    pub fn from_samples(samples: Vec<u16>) -> Self {
        Self { samples }
    }

    /// Create a buffer from 8-bit samples
    ///
    /// This is the natural entry point for decoded image data
    /// (e.g. an RGBA byte stream). The conversion is lossless and the
    /// resulting buffer is in range by construction.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            samples: bytes.iter().map(|&b| u16::from(b)).collect(),
        }
    }

    /// Get the number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get a sample by index
    pub fn get(&self, index: usize) -> Option<u16> {
        self.samples.get(index).copied()
    }

    /// View the samples as a slice
    #[inline]
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Consume the buffer, returning the underlying samples
    pub fn into_samples(self) -> Vec<u16> {
        self.samples
    }

    /// Convert the buffer back to 8-bit samples for re-encoding/display.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSample`] if any sample is outside
    /// `[0, 255]`; a post-transform buffer is always in range, so an
    /// error here indicates an upstream defect.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.samples
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                if value > MAX_SAMPLE {
                    Err(Error::InvalidSample { value, index })
                } else {
                    Ok(value as u8)
                }
            })
            .collect()
    }
}

impl From<Vec<u16>> for IntensityBuffer {
    fn from(samples: Vec<u16>) -> Self {
        Self::from_samples(samples)
    }
}

impl From<&[u8]> for IntensityBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
