//! Population count kernels. Every kernel maps an unsigned integer to the number of bits set in
//! it, using a different strategy. All kernels are total and must agree on every input; the
//! benchmark only measures how fast they get there.
//!
//! The buffer kernels in [`buffer`] apply these to a byte slice, as used by the shoot-out.

use crate::arch::{CountStrategy, HardwareCount};

pub mod buffer;

pub use buffer::*;

/// A 32-bit population count kernel.
pub type Kernel32 = fn(u32) -> u32;

/// A 64-bit population count kernel.
pub type Kernel64 = fn(u64) -> u32;

/// Number of set bits in every byte value. Built at compile time.
pub static BYTE_COUNTS: [u8; 256] = byte_counts();

const fn byte_counts() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 1;
    while i < 256 {
        // the count of i is the count of i / 2 plus its lowest bit
        table[i] = table[i >> 1] + (i & 1) as u8;
        i += 1;
    }
    table
}

/// All 32-bit kernels with the label they are reported under, in report order.
pub const KERNELS_32: [(&str, Kernel32); 7] = [
    ("simple", simple),
    ("lookup1", lookup_mask),
    ("lookup2", lookup_bytes),
    ("kernighan", kernighan),
    ("mod", modular),
    ("parallel", parallel),
    ("builtin32", builtin32),
];

/// Shift-and-test: add the lowest bit and shift it out until nothing is left.
#[inline]
pub fn simple(mut x: u32) -> u32 {
    let mut count = 0;
    while x != 0 {
        count += x & 1;
        x >>= 1;
    }
    count
}

/// Byte lookup with the four bytes extracted by shifting and masking.
#[inline]
pub fn lookup_mask(x: u32) -> u32 {
    BYTE_COUNTS[(x & 0xFF) as usize] as u32
        + BYTE_COUNTS[((x >> 8) & 0xFF) as usize] as u32
        + BYTE_COUNTS[((x >> 16) & 0xFF) as usize] as u32
        + BYTE_COUNTS[(x >> 24) as usize] as u32
}

/// Byte lookup visiting each byte position in turn. This is the byte-array formulation of
/// [`lookup_mask`]; iterating the shift amounts instead of reading the integer's storage keeps it
/// independent of the target's endianness.
#[inline]
pub fn lookup_bytes(x: u32) -> u32 {
    [0u32, 8, 16, 24]
        .iter()
        .map(|&shift| BYTE_COUNTS[((x >> shift) & 0xFF) as usize] as u32)
        .sum()
}

/// Kernighan's trick: `x & (x - 1)` clears the lowest set bit, so the loop runs once per set bit.
#[inline]
pub fn kernighan(mut x: u32) -> u32 {
    let mut count = 0;
    while x != 0 {
        x &= x - 1;
        count += 1;
    }
    count
}

// replicate a group of up to 12 bits so that every 5-bit lane holds one bit of the group, then
// fold the lanes with a modulo of 31
const MOD_SPREAD: u64 = 0x1001001001001;
const MOD_LANES: u64 = 0x84210842108421;
const MOD_FOLD: u64 = 0x1F;

/// Modular reduction over three groups of 12, 12 and 8 bits.
#[inline]
pub fn modular(x: u32) -> u32 {
    let x = x as u64;
    let low = ((x & 0xFFF) * MOD_SPREAD & MOD_LANES) % MOD_FOLD;
    let mid = (((x & 0xFF_F000) >> 12) * MOD_SPREAD & MOD_LANES) % MOD_FOLD;
    let high = ((x >> 24) * MOD_SPREAD & MOD_LANES) % MOD_FOLD;
    (low + mid + high) as u32
}

/// SWAR: sum adjacent bits into 2-bit fields, then 4-bit fields, then bytes, and add the four
/// bytes up with a multiplication that accumulates them in the top byte.
#[inline]
pub fn parallel(x: u32) -> u32 {
    let x = x - ((x >> 1) & 0x5555_5555);
    let x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
    (((x + (x >> 4)) & 0x0F0F_0F0F).wrapping_mul(0x0101_0101)) >> 24
}

/// Hardware popcount of a 32-bit value.
#[inline]
pub fn builtin32(x: u32) -> u32 {
    HardwareCount::popcount_u32(x)
}

/// Hardware popcount of a 64-bit value.
#[inline]
pub fn builtin64(x: u64) -> u32 {
    HardwareCount::popcount_u64(x)
}
