//! CPU baseline for the vector-add benchmark.
//!
//! This is the reference the GPU scenarios are timed against, and its
//! output is what both kernels must reproduce bit-for-bit.

use std::time::{Duration, Instant};

/// Result of a timed CPU run.
#[derive(Debug)]
pub struct CpuRun {
    /// Wall-clock time for all `iterations` passes.
    pub elapsed: Duration,
    /// Output vector from the final pass.
    pub output: Vec<i32>,
}

/// Build the two input vectors: `a[i] = i`, `b[i] = n - i - 1`.
///
/// Every elementwise sum is therefore `n - 1`, which makes mismatches
/// trivially visible in either path.
pub fn make_vectors(n: usize) -> (Vec<i32>, Vec<i32>) {
    let a: Vec<i32> = (0..n as i32).collect();
    let b: Vec<i32> = (0..n as i32).map(|i| n as i32 - i - 1).collect();
    (a, b)
}

/// Add `a` and `b` elementwise, `iterations` times, and measure it.
///
/// The output vector is allocated outside the timed region; the timer
/// covers only the repeated addition, mirroring what the device kernels do.
pub fn time_add(a: &[i32], b: &[i32], iterations: usize) -> CpuRun {
    debug_assert_eq!(a.len(), b.len());
    let mut out = vec![0i32; a.len()];

    let start = Instant::now();
    for _ in 0..iterations {
        for j in 0..a.len() {
            out[j] = a[j] + b[j];
        }
    }
    let elapsed = start.elapsed();

    CpuRun {
        elapsed,
        output: out,
    }
}
