//! Configuration of a benchmark run.

use crate::error::{HarnessError, Result};

/// Number of values fed to each kernel in each direction of the register-only test. Both
/// directions together cover 2^27 values, i.e. 512MB or 2^32 bits.
pub const REGISTER_ITERATIONS: u32 = 64 * 1024 * 1024;

/// Number of 64-bit words in the shoot-out input buffer (512MB).
pub const BUFFER_WORDS: usize = 64 * 1024 * 1024;

/// Seed of the generator filling the input buffer.
pub const DEFAULT_SEED: u64 = 0x5EED_B175;

/// Number of kernel calls per iteration of the unrolled register loop.
pub const UNROLL: u32 = 4;

/// Sizes and seed of a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchConfig {
    /// Values per direction in the register-only test. Must be a non-zero multiple of [`UNROLL`].
    /// The 64-bit test uses half as many values per direction.
    pub register_iterations: u32,

    /// Number of random 64-bit words in the shoot-out buffer. Must be non-zero.
    pub buffer_words: usize,

    /// Seed for the shoot-out buffer contents.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            register_iterations: REGISTER_ITERATIONS,
            buffer_words: BUFFER_WORDS,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    /// A small configuration that finishes in milliseconds, for tests.
    pub fn quick() -> Self {
        Self {
            register_iterations: 1 << 12,
            buffer_words: (1 << 10) + 3,
            seed: DEFAULT_SEED,
        }
    }

    /// Check that the unrolled loops cover exactly the same values as the straight loops and that
    /// the shoot-out has something to count.
    pub fn validate(&self) -> Result<()> {
        if self.register_iterations == 0 {
            return Err(HarnessError::InvalidConfig(
                "register_iterations must be non-zero".to_string(),
            ));
        }
        if self.register_iterations % UNROLL != 0 {
            return Err(HarnessError::InvalidConfig(format!(
                "register_iterations ({}) must be a multiple of {}",
                self.register_iterations, UNROLL
            )));
        }
        if self.buffer_words == 0 {
            return Err(HarnessError::InvalidConfig(
                "buffer_words must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Size of the shoot-out buffer in bytes.
    pub fn buffer_bytes(&self) -> usize {
        self.buffer_words.saturating_mul(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.register_iterations, 64 * 1024 * 1024);
        assert_eq!(config.buffer_bytes(), 512 * 1024 * 1024);
    }

    #[test]
    fn quick_config_is_valid() {
        assert!(BenchConfig::quick().validate().is_ok());
    }

    #[test]
    fn test_illegal_configs() {
        let config = BenchConfig {
            register_iterations: 0,
            ..BenchConfig::quick()
        };
        assert!(matches!(config.validate(), Err(HarnessError::InvalidConfig(_))));

        let config = BenchConfig {
            register_iterations: 1022,
            ..BenchConfig::quick()
        };
        assert!(matches!(config.validate(), Err(HarnessError::InvalidConfig(_))));

        let config = BenchConfig {
            buffer_words: 0,
            ..BenchConfig::quick()
        };
        assert!(matches!(config.validate(), Err(HarnessError::InvalidConfig(_))));
    }
}
