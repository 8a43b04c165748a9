//! Memory-streaming ("shoot-out") benchmark.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{HarnessError, Result};

use super::seconds;

/// A buffer of random 64-bit words that all shoot-out kernels count. It is filled once and only
/// read afterwards.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    words: Vec<u64>,
}

impl InputBuffer {
    /// Allocate `words` 64-bit words and fill them with random values generated from `seed`.
    ///
    /// # Errors
    /// Returns [`HarnessError::OutOfMemory`] if the allocation fails. Nothing is computed in
    /// that case.
    pub fn allocate(words: usize, seed: u64) -> Result<Self> {
        let bytes = words.saturating_mul(std::mem::size_of::<u64>());

        let mut data = Vec::new();
        data.try_reserve_exact(words)
            .map_err(|_| HarnessError::OutOfMemory { bytes })?;

        let mut rng = StdRng::seed_from_u64(seed);
        let sample = Uniform::new_inclusive(0, u64::MAX);
        for _ in 0..words {
            data.push(sample.sample(&mut rng));
        }

        log::info!("allocated {} bytes of random input", bytes);
        Ok(Self { words: data })
    }

    /// The buffer contents as 64-bit words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// The buffer contents as bytes in native byte order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.words.as_slice())
    }

    /// Size of the buffer in bytes.
    pub fn len_bytes(&self) -> usize {
        self.as_bytes().len()
    }
}

/// Timing and checksum of one kernel in the shoot-out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShootoutResult {
    /// Report label of the kernel
    pub label: String,
    /// Time to count the whole buffer
    pub elapsed: Duration,
    /// Number of set bits in the buffer
    pub total: u64,
}

impl fmt::Display for ShootoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {:6.3}s {}", self.label, seconds(self.elapsed), self.total)
    }
}

/// Time one pass of a buffer kernel over the whole buffer.
pub fn bench_shootout<F>(label: &str, kernel: F, buffer: &InputBuffer) -> ShootoutResult
where
    F: Fn(&[u8]) -> u64,
{
    let bytes = buffer.as_bytes();

    let start = Instant::now();
    let total = black_box(kernel(black_box(bytes)));
    let elapsed = start.elapsed();

    log::debug!("{} counted {} bytes in {:?}", label, bytes.len(), elapsed);

    ShootoutResult {
        label: label.to_string(),
        elapsed,
        total,
    }
}
