//! Validated draw parameters.

use derive_more::{Display, Error};

/// Parameters of one lottery draw: how many numbers to draw and from which
/// inclusive range.
///
/// Construction validates that the range is non-empty and large enough to
/// yield `draw_count` distinct numbers, so every accepted configuration is
/// satisfiable and rejection-sampled generation always terminates.
///
/// # Examples
///
/// ```
/// use lotto_core::DrawConfig;
///
/// let config = DrawConfig::new(6, 1, 49)?;
/// assert_eq!(config, DrawConfig::LOTTO_6_49);
/// assert_eq!(config.range_size(), 49);
/// assert!(config.contains(49));
/// assert!(!config.contains(50));
/// # Ok::<(), lotto_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawConfig {
    draw_count: u8,
    min_value: u8,
    max_value: u8,
}

/// Error returned when draw parameters cannot describe a satisfiable draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// The draw count was zero.
    #[display("draw count must be at least 1")]
    ZeroDrawCount,
    /// The minimum value exceeded the maximum value.
    #[display("empty number range: {min_value} > {max_value}")]
    EmptyRange {
        /// Lower bound of the rejected range.
        min_value: u8,
        /// Upper bound of the rejected range.
        max_value: u8,
    },
    /// More distinct numbers were requested than the range holds.
    #[display("cannot draw {draw_count} distinct numbers from a range of {range_size}")]
    DrawCountExceedsRange {
        /// Requested number of distinct draws.
        draw_count: u8,
        /// Number of distinct values available in the range.
        range_size: usize,
    },
}

impl DrawConfig {
    /// The classic 6-of-49 draw: six distinct numbers from 1 to 49.
    pub const LOTTO_6_49: Self = Self {
        draw_count: 6,
        min_value: 1,
        max_value: 49,
    };

    /// Creates a configuration drawing `draw_count` distinct numbers from
    /// `min_value..=max_value`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDrawCount`] if `draw_count` is zero,
    /// [`ConfigError::EmptyRange`] if `max_value < min_value`, and
    /// [`ConfigError::DrawCountExceedsRange`] if the range holds fewer than
    /// `draw_count` distinct values.
    pub fn new(draw_count: u8, min_value: u8, max_value: u8) -> Result<Self, ConfigError> {
        if draw_count == 0 {
            return Err(ConfigError::ZeroDrawCount);
        }
        if max_value < min_value {
            return Err(ConfigError::EmptyRange {
                min_value,
                max_value,
            });
        }
        let range_size = max_value as usize - min_value as usize + 1;
        if usize::from(draw_count) > range_size {
            return Err(ConfigError::DrawCountExceedsRange {
                draw_count,
                range_size,
            });
        }
        Ok(Self {
            draw_count,
            min_value,
            max_value,
        })
    }

    /// Returns the number of distinct values drawn per set.
    #[must_use]
    pub const fn draw_count(self) -> u8 {
        self.draw_count
    }

    /// Returns the inclusive lower bound of drawable values.
    #[must_use]
    pub const fn min_value(self) -> u8 {
        self.min_value
    }

    /// Returns the inclusive upper bound of drawable values.
    #[must_use]
    pub const fn max_value(self) -> u8 {
        self.max_value
    }

    /// Returns the number of distinct values in the range.
    #[must_use]
    pub const fn range_size(self) -> usize {
        self.max_value as usize - self.min_value as usize + 1
    }

    /// Returns `true` if `number` falls within the drawable range.
    #[must_use]
    pub const fn contains(self, number: u8) -> bool {
        self.min_value <= number && number <= self.max_value
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self::LOTTO_6_49
    }
}
