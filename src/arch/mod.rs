//! Architecture-specific population count
//!
//! This module contains the two counting strategies the benchmark compares against the
//! hand-written kernels: a software emulation that never touches a popcount instruction, and a
//! hardware strategy that delegates to the platform's native instruction. Currently the hardware
//! strategy has explicit intrinsics for x86_64 (POPCNT) and relies on LLVM lowering to `cnt` on
//! ARM64 (aarch64).

use std::fmt;

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

/// Generic software implementation for all architectures
pub mod generic;

pub use generic::SoftwareCount;

/// Trait for the population count strategy used by the `builtin` kernels.
pub trait CountStrategy {
    /// Count the number of set bits in a 32-bit value
    fn popcount_u32(value: u32) -> u32;

    /// Count the number of set bits in a 64-bit value
    fn popcount_u64(value: u64) -> u32;
}

/// Hardware population count for the target architecture.
#[cfg(target_arch = "x86_64")]
pub type HardwareCount = x86_64::X86PopCount;

/// Hardware population count for the target architecture.
#[cfg(target_arch = "aarch64")]
pub type HardwareCount = aarch64::Arm64PopCount;

/// Hardware population count for the target architecture. Without a dedicated module, this
/// falls back to `count_ones`, which LLVM lowers to whatever the target offers.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub type HardwareCount = generic::NativeCount;

/// The counting strategy selected at initialization time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// SWAR emulation without any popcount instruction
    Software,
    /// Native popcount instruction
    Hardware,
}

impl Strategy {
    /// Select the strategy for the running machine. On x86 the hardware strategy requires both a
    /// CPU reporting `popcnt` and the feature being enabled at compile time, since without the
    /// latter [`HardwareCount`] cannot emit the instruction. ARM64 always has `cnt`, and every
    /// other architecture uses the software emulation.
    pub fn detect() -> Self {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            if !std::is_x86_feature_detected!("popcnt") {
                return Strategy::Software;
            }
            if !Self::popcnt_compiled() {
                log::warn!(
                    "cpu supports popcnt but it is not enabled at compile time, using software \
                     popcount; build with -C target-feature=+popcnt to use the instruction"
                );
                return Strategy::Software;
            }
            Strategy::Hardware
        }

        #[cfg(target_arch = "aarch64")]
        {
            Strategy::Hardware
        }

        #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Strategy::Software
        }
    }

    /// Whether the popcount instruction is available to [`HardwareCount`] at compile time.
    pub const fn popcnt_compiled() -> bool {
        cfg!(any(target_feature = "popcnt", target_arch = "aarch64"))
    }

    /// Count the set bits of a 32-bit value with this strategy. This dispatches on every call,
    /// so timed loops should dispatch once and use the [`CountStrategy`] type directly.
    pub fn popcount_u32(self, value: u32) -> u32 {
        match self {
            Strategy::Software => SoftwareCount::popcount_u32(value),
            Strategy::Hardware => HardwareCount::popcount_u32(value),
        }
    }

    /// Count the set bits of a 64-bit value with this strategy.
    pub fn popcount_u64(self, value: u64) -> u32 {
        match self {
            Strategy::Software => SoftwareCount::popcount_u64(value),
            Strategy::Hardware => HardwareCount::popcount_u64(value),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Software => f.write_str("software"),
            Strategy::Hardware => f.write_str("hardware"),
        }
    }
}
