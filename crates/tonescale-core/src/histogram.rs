//! Histogram generation for intensity buffers
//!
//! Counts the occurrence of each 8-bit intensity level across a buffer.
//! The histogram has a fixed shape of 256 bins in ascending level order;
//! charting collaborators rely on that ordering to plot left-to-right by
//! level.

use crate::buffer::{IntensityBuffer, MAX_SAMPLE};
use crate::error::{Error, Result};

/// Number of bins in an intensity histogram (one per 8-bit level).
pub const HISTOGRAM_BINS: usize = 256;

/// One histogram bin: an intensity level and the number of samples
/// observed at exactly that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBin {
    pub level: u8,
    pub count: u64,
}

/// Frequency distribution of intensity levels across a buffer.
///
/// Always exactly [`HISTOGRAM_BINS`] bins, levels `0..=255` in ascending
/// order. Counts are exact: the sum over all bins equals the length of
/// the buffer the histogram was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HISTOGRAM_BINS],
}

impl Histogram {
    /// Create an all-zero histogram (the histogram of an empty buffer)
    pub fn empty() -> Self {
        Self {
            counts: [0; HISTOGRAM_BINS],
        }
    }

    /// Get the count for one intensity level
    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.counts[usize::from(level)]
    }

    /// View all 256 counts, indexed by level
    #[inline]
    pub fn counts(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.counts
    }

    /// Iterate over the bins in ascending level order
    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(level, &count)| HistogramBin {
                level: level as u8,
                count,
            })
    }

    /// Total number of samples counted (equals the source buffer length)
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single-bin count; useful for scaling a chart's y-axis.
    /// Zero for the histogram of an empty buffer.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Add another histogram's counts into this one.
    ///
    /// Counting is a commutative reduce, so a caller may histogram
    /// disjoint chunks of a buffer independently and merge the partial
    /// results without changing the outcome.
    pub fn merge(&mut self, other: &Histogram) {
        for (dst, src) in self.counts.iter_mut().zip(other.counts.iter()) {
            *dst += src;
        }
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::empty()
    }
}

impl IntensityBuffer {
    /// Build the intensity histogram of this buffer.
    ///
    /// Single pass; bin `l` counts the elements exactly equal to `l`.
    /// The result is independent of sample order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSample`] on the first sample outside
    /// `[0, 255]`. Out-of-range values are a contract violation by an
    /// upstream collaborator and are never clamped or dropped, so the
    /// defect surfaces instead of vanishing into a plausible-looking
    /// chart.
    ///
    /// # Example
    ///
    /// ```
    /// use tonescale_core::IntensityBuffer;
    ///
    /// let buf = IntensityBuffer::from_bytes(&[0, 0, 255, 128, 128, 128]);
    /// let hist = buf.histogram().unwrap();
    /// assert_eq!(hist.count(0), 2);
    /// assert_eq!(hist.count(128), 3);
    /// assert_eq!(hist.count(255), 1);
    /// assert_eq!(hist.total(), 6);
    /// ```
    pub fn histogram(&self) -> Result<Histogram> {
        let mut counts = [0u64; HISTOGRAM_BINS];

        for (index, &value) in self.samples().iter().enumerate() {
            if value > MAX_SAMPLE {
                return Err(Error::InvalidSample { value, index });
            }
            counts[usize::from(value)] += 1;
        }

        Ok(Histogram { counts })
    }
}
