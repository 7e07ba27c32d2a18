//! Configuration for input arrays and playback.

use rand::Rng;

/// Largest array the visualizer will generate or accept
pub const MAX_ARRAY_SIZE: usize = 64;

pub const DEFAULT_ARRAY_SIZE: usize = 10;
pub const DEFAULT_MIN_VALUE: i64 = 1;
pub const DEFAULT_MAX_VALUE: i64 = 99;

/// Autoplay period bounds, in milliseconds
pub const MIN_INTERVAL_MS: u64 = 50;
pub const MAX_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_INTERVAL_MS: u64 = 600;

/// How random input arrays are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of elements.
    pub size: usize,
    /// Smallest value that can be drawn (inclusive).
    pub min_value: i64,
    /// Largest value that can be drawn (inclusive).
    pub max_value: i64,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_ARRAY_SIZE,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl ArrayConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyArray);
        }
        if self.size > MAX_ARRAY_SIZE {
            return Err(ConfigError::ArrayTooLarge {
                size: self.size,
                max: MAX_ARRAY_SIZE,
            });
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    /// Draw `size` values uniformly from `[min_value, max_value]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        (0..self.size)
            .map(|_| rng.gen_range(self.min_value..=self.max_value))
            .collect()
    }
}

/// Top-level playback configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub array: ArrayConfig,
    /// Autoplay period.
    pub interval_ms: u64,
    /// Fixed RNG seed for reproducible random arrays.
    pub seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            array: ArrayConfig::default(),
            interval_ms: DEFAULT_INTERVAL_MS,
            seed: None,
        }
    }
}

impl PlaybackConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.array.validate()?;
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.interval_ms) {
            return Err(ConfigError::InvalidInterval {
                interval_ms: self.interval_ms,
                min: MIN_INTERVAL_MS,
                max: MAX_INTERVAL_MS,
            });
        }
        Ok(())
    }
}

/// Clamp an autoplay period into the supported range.
pub fn clamp_interval_ms(interval_ms: u64) -> u64 {
    interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS)
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Array size must be non-zero")]
    EmptyArray,
    #[error("Array size {size} exceeds the maximum of {max}")]
    ArrayTooLarge { size: usize, max: usize },
    #[error("Value range is empty: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Interval {interval_ms}ms is outside {min}..={max}ms")]
    InvalidInterval { interval_ms: u64, min: u64, max: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_is_valid() {
        assert!(PlaybackConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_arrays() {
        let mut config = ArrayConfig::default();
        config.size = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyArray));

        config.size = MAX_ARRAY_SIZE + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArrayTooLarge { .. })
        ));

        let config = ArrayConfig {
            size: 4,
            min_value: 10,
            max_value: 2,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { min: 10, max: 2 })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_interval() {
        let config = PlaybackConfig {
            interval_ms: 1,
            ..PlaybackConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_sample_respects_bounds() {
        let config = ArrayConfig {
            size: 32,
            min_value: -5,
            max_value: 5,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let values = config.sample(&mut rng);

        assert_eq!(values.len(), 32);
        assert!(values.iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn test_sample_is_reproducible_with_seed() {
        let config = ArrayConfig::default();
        let a = config.sample(&mut StdRng::seed_from_u64(42));
        let b = config.sample(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
