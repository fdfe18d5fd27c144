//! Tonescale - contrast/brightness adjustment with live histograms
//!
//! # Overview
//!
//! Tonescale is the processing core of an interactive image-adjustment
//! tool: the application decodes an image into a flat
//! [`IntensityBuffer`], shows the buffer's [`Histogram`], and on every
//! contrast/brightness control change produces an adjusted buffer plus
//! its histogram for display. The core is pure and stateless; decoding,
//! encoding, chart rendering, and widget state belong to the caller.
//!
//! # Example
//!
//! ```
//! use tonescale::{IntensityBuffer, enhance::{ToneParams, contrast_brightness}};
//!
//! // Decoded image data (e.g. interleaved RGBA bytes)
//! let original = IntensityBuffer::from_bytes(&[10, 200, 50, 255]);
//! let before = original.histogram().unwrap();
//!
//! // Slider moved: contrast 2.0, brightness -20
//! let adjusted = contrast_brightness(&original, ToneParams::new(2.0, -20.0)).unwrap();
//! let after = adjusted.histogram().unwrap();
//!
//! assert_eq!(adjusted.samples(), &[0, 255, 80, 255]);
//! assert_eq!(before.total(), after.total());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use tonescale_core::*;

// Re-export the adjustment crate as a module
pub use tonescale_enhance as enhance;
