#![warn(missing_docs)]

//! This crate compares algorithms for counting the set bits (population count, Hamming weight)
//! of 32-bit and 64-bit integers, and provides the harness that benchmarks them.
//!
//! # Kernels
//!  - [Shift-and-test][kernels::simple], looking at one bit per iteration.
//!  - Two [byte lookup][kernels::lookup_mask] [variants][kernels::lookup_bytes] using a 256-entry
//!    [table][kernels::BYTE_COUNTS].
//!  - [Kernighan's trick][kernels::kernighan], looping once per set bit.
//!  - [Modular reduction][kernels::modular], folding 5-bit lanes modulo 31.
//!  - [SWAR][kernels::parallel] parallel bit counting.
//!  - The [hardware instruction][kernels::builtin32] for [both widths][kernels::builtin64].
//!
//! The [buffer kernels][kernels::buffer] apply these to a byte slice, reading it as 32-bit or
//! 64-bit words and counting trailing bytes with the lookup table.
//!
//! # Benchmark
//! The [harness] runs every kernel over values generated in registers (straight and unrolled
//! loops) and over a large random buffer in memory, and prints the elapsed time together with a
//! checksum of all counts. The sizes are set by [`BenchConfig`].
//!
//! # Intrinsics
//! The hardware popcount is selected through the [`CountStrategy`](arch::CountStrategy) trait.
//! [`Strategy::detect`] picks the hardware strategy if the CPU supports it and the instruction
//! is compiled in, and the software emulation otherwise. On x86 the `popcnt` intrinsics are only
//! emitted if the feature is enabled at compile time (`-C target-feature=+popcnt` or
//! `-C target-cpu=native`).
//!
//! # Safety
//! This crate uses no unsafe code, with the only exception being the `popcnt` intrinsics. They
//! cannot fail with any input, provided they are supported by the target machine.

pub use crate::arch::Strategy;
pub use crate::config::BenchConfig;
pub use crate::error::{HarnessError, Result};

pub mod arch;
pub mod config;
pub mod error;
pub mod harness;
pub mod kernels;

pub(crate) mod util;
