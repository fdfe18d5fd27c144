//! Tonescale Core - Data structures for the intensity adjustment pipeline
//!
//! This crate provides the fundamental data structures used throughout
//! the tonescale library:
//!
//! - [`IntensityBuffer`] - flat, channel-interleaved intensity samples
//! - [`Histogram`] / [`HistogramBin`] - fixed 256-bin level distribution
//! - [`ImageDimensions`] - width/height for relating a flat buffer to a
//!   2D image
//!
//! The pipeline is stateless: buffers are owned by the caller, passed in
//! for the duration of one call, and never mutated in place. Histogram
//! construction lives here as [`IntensityBuffer::histogram`]; the
//! contrast/brightness transform lives in the `tonescale-enhance` crate.

pub mod buffer;
pub mod dimensions;
pub mod error;
pub mod histogram;

pub use buffer::{IntensityBuffer, MAX_SAMPLE};
pub use dimensions::ImageDimensions;
pub use error::{Error, Result};
pub use histogram::{HISTOGRAM_BINS, Histogram, HistogramBin};
