//! The benchmark harness. Drives every kernel over two access patterns and reports the elapsed
//! time and a checksum of the counts.
//!
//! # Register-only
//! Each kernel counts a sequence of values generated in a register: ascending from zero, then
//! descending from the maximum value. The sequence is run twice, once as a straight loop and once
//! with the loop body unrolled, and both runs are timed and summed separately (see [`register`]).
//!
//! # Shoot-out
//! Each buffer kernel counts all bits of a large buffer of random words in memory (see
//! [`shootout`]). Allocating and filling the buffer is excluded from the timing.
//!
//! The checksums only exist to keep the compiler from optimizing the work away. Totals of the
//! register-only and the shoot-out tests count different inputs and are not comparable.

pub mod register;
pub mod report;
pub mod shootout;

pub use register::{bench_register, bench_register_u64, RegisterResult};
pub use report::{run, run_register_suite, run_shootout_suite};
pub use shootout::{bench_shootout, InputBuffer, ShootoutResult};

use std::time::Duration;

/// Seconds of a duration, as printed in the report.
pub(crate) fn seconds(duration: Duration) -> f64 {
    duration.as_secs_f64()
}

#[cfg(test)]
mod tests;
