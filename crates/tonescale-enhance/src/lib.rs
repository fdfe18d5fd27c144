//! tonescale-enhance - Tone adjustment operations
//!
//! This crate provides the contrast/brightness transform of the
//! tonescale pipeline:
//!
//! - [`contrast_brightness`] - linear per-sample adjustment with
//!   clamping, the operation a UI invokes on every slider change
//! - [`tone_lut`] / [`map_lut`] - the underlying lookup-table split for
//!   callers that build the curve once and apply it to several buffers
//!
//! All operations are pure: they take a buffer by reference and return
//! a freshly allocated result.

mod error;
pub mod tone;

pub use error::{EnhanceError, EnhanceResult};
pub use tone::{ToneLut, ToneParams, contrast_brightness, map_lut, tone_lut};
