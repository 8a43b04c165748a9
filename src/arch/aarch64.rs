//! ARM64 (AArch64) hardware population count

use super::CountStrategy;

/// ARM64 popcount
pub struct Arm64PopCount;

impl CountStrategy for Arm64PopCount {
    #[inline(always)]
    fn popcount_u32(value: u32) -> u32 {
        // The standard library already uses the cnt instruction when available
        value.count_ones()
    }

    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        value.count_ones()
    }
}
