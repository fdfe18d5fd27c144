//! tonescale-test - Regression test helpers for tonescale
//!
//! Provides [`RegParams`], a small comparison tracker used by the
//! workspace's `tests/*_reg.rs` integration tests: each comparison is
//! indexed, failures are collected with context, and `cleanup()` reports
//! the overall result.
//!
//! # Usage
//!
//! ```
//! use tonescale_test::RegParams;
//!
//! let mut rp = RegParams::new("histogram");
//! rp.compare_values(6.0, 6.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;
