//! x86_64 hardware population count
//!
//! Uses the `POPCNT` instruction (SSE4.2 resp. SSE4a on AMD) through its intrinsics when the
//! feature is enabled at compile time.

use super::CountStrategy;

/// x86_64 popcount using the POPCNT instruction
pub struct X86PopCount;

impl CountStrategy for X86PopCount {
    #[inline(always)]
    fn popcount_u32(value: u32) -> u32 {
        #[cfg(target_feature = "popcnt")]
        unsafe {
            std::arch::x86_64::_popcnt32(value as i32) as u32
        }

        #[cfg(not(target_feature = "popcnt"))]
        {
            // LLVM picks popcnt on its own once the feature is enabled
            value.count_ones()
        }
    }

    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        #[cfg(target_feature = "popcnt")]
        unsafe {
            std::arch::x86_64::_popcnt64(value as i64) as u32
        }

        #[cfg(not(target_feature = "popcnt"))]
        {
            value.count_ones()
        }
    }
}
