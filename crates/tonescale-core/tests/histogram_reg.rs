//! Histogram regression test
//!
//! Exercises histogram construction over synthetic image buffers:
//! conservation, exact counts, order independence, partial merging,
//! and out-of-range rejection.

use rand::seq::SliceRandom;
use tonescale_core::{HISTOGRAM_BINS, ImageDimensions, IntensityBuffer};
use tonescale_test::RegParams;

/// Build a horizontal-ramp grayscale buffer: each row cycles through
/// the 8-bit levels left to right, so a 256-wide buffer hits every
/// level exactly `height` times.
fn make_gradient(width: u32, height: u32) -> IntensityBuffer {
    let mut samples = Vec::with_capacity((width * height) as usize);
    for _y in 0..height {
        for x in 0..width {
            samples.push((x % 256) as u16);
        }
    }
    IntensityBuffer::from_samples(samples)
}

#[test]
fn histogram_reg_conservation() {
    let mut rp = RegParams::new("histogram_conservation");

    let dims = ImageDimensions::new(256, 64);
    let buf = make_gradient(dims.width, dims.height);
    rp.compare_values(dims.pixels() as f64, buf.len() as f64, 0.0);

    let hist = buf.histogram().unwrap();
    rp.compare_values(buf.len() as f64, hist.total() as f64, 0.0);
    rp.compare_values(HISTOGRAM_BINS as f64, hist.bins().count() as f64, 0.0);

    // A 256-wide gradient hits each level exactly `height` times
    rp.compare_values(64.0, hist.count(0) as f64, 0.0);
    rp.compare_values(64.0, hist.count(100) as f64, 0.0);
    rp.compare_values(64.0, hist.max_count() as f64, 0.0);

    assert!(rp.cleanup(), "histogram conservation tests failed");
}

#[test]
fn histogram_reg_exact_counts() {
    let mut rp = RegParams::new("histogram_exact");

    let buf = IntensityBuffer::from_bytes(&[0, 0, 255, 128, 128, 128]);
    let hist = buf.histogram().unwrap();

    rp.compare_values(2.0, hist.count(0) as f64, 0.0);
    rp.compare_values(3.0, hist.count(128) as f64, 0.0);
    rp.compare_values(1.0, hist.count(255) as f64, 0.0);
    rp.compare_values(6.0, hist.total() as f64, 0.0);

    let nonzero = hist.bins().filter(|b| b.count > 0).count();
    rp.compare_values(3.0, nonzero as f64, 0.0);

    assert!(rp.cleanup(), "histogram exactness tests failed");
}

#[test]
fn histogram_reg_order_independence() {
    let mut rp = RegParams::new("histogram_order");

    let buf = make_gradient(200, 10);
    let reference = buf.histogram().unwrap();

    let mut rng = rand::rng();
    let mut samples = buf.into_samples();
    for _ in 0..4 {
        samples.shuffle(&mut rng);
        let shuffled = IntensityBuffer::from_samples(samples.clone());
        let hist = shuffled.histogram().unwrap();
        rp.compare_values(1.0, if hist == reference { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "histogram order independence tests failed");
}

#[test]
fn histogram_reg_merge_partials() {
    let mut rp = RegParams::new("histogram_merge");

    let buf = make_gradient(256, 8);
    let whole = buf.histogram().unwrap();

    // Chunked counting then commutative merge
    let samples = buf.samples();
    let mid = samples.len() / 3;
    let left = IntensityBuffer::from_samples(samples[..mid].to_vec());
    let right = IntensityBuffer::from_samples(samples[mid..].to_vec());

    let mut merged = left.histogram().unwrap();
    merged.merge(&right.histogram().unwrap());

    rp.compare_values(1.0, if merged == whole { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(whole.total() as f64, merged.total() as f64, 0.0);

    assert!(rp.cleanup(), "histogram merge tests failed");
}

#[test]
fn histogram_reg_rejects_out_of_range() {
    let mut rp = RegParams::new("histogram_range");

    let buf = IntensityBuffer::from_samples(vec![0, 300, 10]);
    rp.compare_values(1.0, if buf.histogram().is_err() { 1.0 } else { 0.0 }, 0.0);

    // An in-range buffer with the offending value clipped succeeds
    let buf = IntensityBuffer::from_samples(vec![0, 255, 10]);
    rp.compare_values(1.0, if buf.histogram().is_ok() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "histogram range tests failed");
}

#[test]
fn histogram_reg_empty_buffer() {
    let mut rp = RegParams::new("histogram_empty");

    let hist = IntensityBuffer::new().histogram().unwrap();
    rp.compare_values(0.0, hist.total() as f64, 0.0);
    rp.compare_values(0.0, hist.max_count() as f64, 0.0);
    rp.compare_values(HISTOGRAM_BINS as f64, hist.bins().count() as f64, 0.0);
    rp.compare_values(0.0, hist.bins().map(|b| b.count).sum::<u64>() as f64, 0.0);

    assert!(rp.cleanup(), "histogram empty-buffer tests failed");
}
