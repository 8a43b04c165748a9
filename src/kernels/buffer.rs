//! Kernels counting the set bits of a whole byte buffer. The buffer is read as consecutive
//! native-endian words of four or eight bytes, and the bytes after the last full word are counted
//! with [`BYTE_COUNTS`]. Words are decoded from byte chunks, so the buffer needs no alignment.

use super::{builtin64, lookup_mask, parallel, Kernel32, Kernel64, BYTE_COUNTS};

/// Count the bits of a buffer tail byte by byte.
#[inline]
fn count_tail(tail: &[u8]) -> u64 {
    tail.iter().map(|&b| BYTE_COUNTS[b as usize] as u64).sum()
}

#[inline(always)]
fn read_u32(chunk: &[u8]) -> u32 {
    u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
}

#[inline(always)]
fn read_u64(chunk: &[u8]) -> u64 {
    u64::from_ne_bytes([
        chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
    ])
}

/// Sum a 32-bit kernel over every 4-byte word of `bytes`.
#[inline(always)]
pub fn count_words_u32(bytes: &[u8], kernel: Kernel32) -> u64 {
    let words = bytes.chunks_exact(4);
    let tail = words.remainder();

    let mut bits = 0u64;
    for word in words {
        bits += kernel(read_u32(word)) as u64;
    }
    bits + count_tail(tail)
}

/// Sum a 64-bit kernel over every 8-byte word of `bytes`, two words per iteration.
#[inline(always)]
pub fn count_words_u64(bytes: &[u8], kernel: Kernel64) -> u64 {
    let pairs = bytes.chunks_exact(16);
    let mut rest = pairs.remainder();

    let mut bits = 0u64;
    for pair in pairs {
        bits += kernel(read_u64(&pair[..8])) as u64;
        bits += kernel(read_u64(&pair[8..])) as u64;
    }

    // an odd word count leaves one full word before the tail
    if rest.len() >= 8 {
        bits += kernel(read_u64(rest)) as u64;
        rest = &rest[8..];
    }
    bits + count_tail(rest)
}

/// Hardware popcount over 8-byte words.
pub fn shootout_builtin(bytes: &[u8]) -> u64 {
    count_words_u64(bytes, builtin64)
}

/// SWAR popcount over 4-byte words.
pub fn shootout_parallel(bytes: &[u8]) -> u64 {
    count_words_u32(bytes, parallel)
}

/// Byte table popcount over 4-byte words.
pub fn shootout_lookup(bytes: &[u8]) -> u64 {
    count_words_u32(bytes, lookup_mask)
}

/// The bit counting loop of Redis' `BITCOUNT`: four 32-bit words per iteration, each reduced with
/// SWAR steps interleaved across the words, and the remaining bytes through the byte table.
pub fn shootout_redis(bytes: &[u8]) -> u64 {
    let blocks = bytes.chunks_exact(16);
    let tail = blocks.remainder();

    let mut bits = 0u64;
    for block in blocks {
        let mut aux1 = read_u32(&block[0..4]);
        let mut aux2 = read_u32(&block[4..8]);
        let mut aux3 = read_u32(&block[8..12]);
        let mut aux4 = read_u32(&block[12..16]);

        aux1 -= (aux1 >> 1) & 0x5555_5555;
        aux1 = (aux1 & 0x3333_3333) + ((aux1 >> 2) & 0x3333_3333);
        aux2 -= (aux2 >> 1) & 0x5555_5555;
        aux2 = (aux2 & 0x3333_3333) + ((aux2 >> 2) & 0x3333_3333);
        aux3 -= (aux3 >> 1) & 0x5555_5555;
        aux3 = (aux3 & 0x3333_3333) + ((aux3 >> 2) & 0x3333_3333);
        aux4 -= (aux4 >> 1) & 0x5555_5555;
        aux4 = (aux4 & 0x3333_3333) + ((aux4 >> 2) & 0x3333_3333);

        bits += ((((aux1 + (aux1 >> 4)) & 0x0F0F_0F0F).wrapping_mul(0x0101_0101) >> 24)
            + (((aux2 + (aux2 >> 4)) & 0x0F0F_0F0F).wrapping_mul(0x0101_0101) >> 24)
            + (((aux3 + (aux3 >> 4)) & 0x0F0F_0F0F).wrapping_mul(0x0101_0101) >> 24)
            + (((aux4 + (aux4 >> 4)) & 0x0F0F_0F0F).wrapping_mul(0x0101_0101) >> 24))
            as u64;
    }

    bits + count_tail(tail)
}

/// All buffer kernels with the label they are reported under, in report order.
pub const BUFFER_KERNELS: [(&str, fn(&[u8]) -> u64); 4] = [
    ("builtin", shootout_builtin),
    ("parallel", shootout_parallel),
    ("lookup", shootout_lookup),
    ("redis", shootout_redis),
];
