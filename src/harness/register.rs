//! Register-only benchmark loops.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::util::unroll;

use super::seconds;

/// First value of the ascending 64-bit sequence. The descending sequence starts at its
/// complement.
pub const SEQUENCE_64_START: u64 = 0x0200_0000_0000_0000;

/// Distance between consecutive values of the 64-bit sequences. Advances both 32-bit halves at
/// once.
pub const SEQUENCE_64_STEP: u64 = 0x1_0000_0001;

/// Timings and checksums of one kernel in the register-only test.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterResult {
    /// Report label of the kernel
    pub label: String,
    /// Time of the straight loop
    pub elapsed: Duration,
    /// Time of the unrolled loop
    pub unrolled_elapsed: Duration,
    /// Sum of all counts of the straight loop
    pub total: u64,
    /// Sum of all counts of the unrolled loop
    pub unrolled_total: u64,
}

impl fmt::Display for RegisterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:6.3}s ({:.3}s unrolled) {} {}",
            self.label,
            seconds(self.elapsed),
            seconds(self.unrolled_elapsed),
            self.total,
            self.unrolled_total
        )
    }
}

/// Run a 32-bit kernel over `0..n` followed by `u32::MAX` down to `u32::MAX - n + 1`, where `n`
/// is the configured number of register iterations. The values are visited once in a straight
/// loop and once in a loop unrolled four times.
///
/// # Errors
/// Fails with [`HarnessError::InvalidConfig`](crate::HarnessError::InvalidConfig) before running
/// anything if `n` is zero or not a multiple of four.
pub fn bench_register<F>(label: &str, kernel: F, config: &BenchConfig) -> Result<RegisterResult>
where
    F: Fn(u32) -> u32,
{
    config.validate()?;
    let n = config.register_iterations;
    let stop = u32::MAX - n;

    let start = Instant::now();
    let mut total = 0u64;
    for x in 0..n {
        total += kernel(x) as u64;
    }
    let mut x = u32::MAX;
    while x > stop {
        total += kernel(x) as u64;
        x -= 1;
    }
    let total = black_box(total);
    let elapsed = start.elapsed();

    let start = Instant::now();
    let mut unrolled_total = 0u64;
    let mut x = 0u32;
    while x < n {
        unroll!(4, |v: u32 = {x}| unrolled_total += kernel(v) as u64, v += 1);
        x += 4;
    }
    let mut x = u32::MAX;
    while x > stop {
        unroll!(4, |v: u32 = {x}| unrolled_total += kernel(v) as u64, v -= 1);
        x -= 4;
    }
    let unrolled_total = black_box(unrolled_total);
    let unrolled_elapsed = start.elapsed();

    log::debug!("{} finished register-only test in {:?}", label, elapsed + unrolled_elapsed);

    Ok(RegisterResult {
        label: label.to_string(),
        elapsed,
        unrolled_elapsed,
        total,
        unrolled_total,
    })
}

/// Run a 64-bit kernel over half as many values per direction as [`bench_register`]. The
/// ascending sequence starts at [`SEQUENCE_64_START`] and advances by [`SEQUENCE_64_STEP`], the
/// descending sequence visits the complements of the ascending one. The unrolled loop handles two
/// values per iteration.
///
/// # Errors
/// Fails like [`bench_register`] on an invalid configuration.
pub fn bench_register_u64<F>(label: &str, kernel: F, config: &BenchConfig) -> Result<RegisterResult>
where
    F: Fn(u64) -> u32,
{
    config.validate()?;
    let n = (config.register_iterations / 2) as u64;

    let start = Instant::now();
    let mut total = 0u64;
    let mut t = SEQUENCE_64_START;
    for _ in 0..n {
        total += kernel(t) as u64;
        t = t.wrapping_add(SEQUENCE_64_STEP);
    }
    let mut t = !SEQUENCE_64_START;
    for _ in 0..n {
        total += kernel(t) as u64;
        t = t.wrapping_sub(SEQUENCE_64_STEP);
    }
    let total = black_box(total);
    let elapsed = start.elapsed();

    let start = Instant::now();
    let mut unrolled_total = 0u64;
    let mut t = SEQUENCE_64_START;
    for _ in 0..n / 2 {
        unroll!(2, |v: u64 = {t}| unrolled_total += kernel(v) as u64, v = v.wrapping_add(SEQUENCE_64_STEP));
        t = t.wrapping_add(2 * SEQUENCE_64_STEP);
    }
    let mut t = !SEQUENCE_64_START;
    for _ in 0..n / 2 {
        unroll!(2, |v: u64 = {t}| unrolled_total += kernel(v) as u64, v = v.wrapping_sub(SEQUENCE_64_STEP));
        t = t.wrapping_sub(2 * SEQUENCE_64_STEP);
    }
    let unrolled_total = black_box(unrolled_total);
    let unrolled_elapsed = start.elapsed();

    log::debug!("{} finished register-only test in {:?}", label, elapsed + unrolled_elapsed);

    Ok(RegisterResult {
        label: label.to_string(),
        elapsed,
        unrolled_elapsed,
        total,
        unrolled_total,
    })
}
