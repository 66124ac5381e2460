// SPDX-License-Identifier: Apache-2.0

//! Wall-clock measurement helpers used by the benchmark runner.

use std::time::{Duration, Instant};

/// Measure the execution time of a closure.
pub fn measure<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}

/// Convert a duration to fractional milliseconds.
pub fn duration_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}
