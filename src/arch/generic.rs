//! Generic implementations for all architectures

use super::CountStrategy;

/// Software population count. Uses the SWAR reduction for both widths, so no popcount
/// instruction is ever emitted regardless of the target features.
pub struct SoftwareCount;

impl CountStrategy for SoftwareCount {
    #[inline(always)]
    fn popcount_u32(value: u32) -> u32 {
        let x = value - ((value >> 1) & 0x5555_5555);
        let x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
        (((x + (x >> 4)) & 0x0F0F_0F0F).wrapping_mul(0x0101_0101)) >> 24
    }

    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        let x = value - ((value >> 1) & 0x5555_5555_5555_5555);
        let x = (x & 0x3333_3333_3333_3333) + ((x >> 2) & 0x3333_3333_3333_3333);
        ((((x + (x >> 4)) & 0x0F0F_0F0F_0F0F_0F0F).wrapping_mul(0x0101_0101_0101_0101)) >> 56)
            as u32
    }
}

/// Population count through `count_ones`, leaving instruction selection to the compiler.
pub struct NativeCount;

impl CountStrategy for NativeCount {
    #[inline(always)]
    fn popcount_u32(value: u32) -> u32 {
        value.count_ones()
    }

    #[inline(always)]
    fn popcount_u64(value: u64) -> u32 {
        value.count_ones()
    }
}
