use crate::active_liquidity::oracle::{PRICE_FIXED_DIGITS, TickPriceOracle};
use crate::error::ConfigError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of tick-spacing steps shown on each side of the current tick
/// when the caller does not pick one.
pub const DEFAULT_NUM_SURROUNDING_TICKS: i32 = 100;

/// Knobs for a reconstruction run.
///
/// Deserializable (with the `serde` feature) so a chart service can keep it
/// next to the rest of its settings:
///
/// ```json
/// { "numSurroundingTicks": 300, "priceFixedDigits": 6 }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ReconstructConfig {
    /// Steps of `tick_spacing` to expand on each side of the active tick.
    pub num_surrounding_ticks: i32,
    /// Fractional digits of the price strings produced by
    /// [`TickPriceOracle`].
    pub price_fixed_digits: u8,
}

impl Default for ReconstructConfig {
    fn default() -> Self {
        Self {
            num_surrounding_ticks: DEFAULT_NUM_SURROUNDING_TICKS,
            price_fixed_digits: PRICE_FIXED_DIGITS,
        }
    }
}

impl ReconstructConfig {
    pub fn with_num_surrounding_ticks(mut self, num_surrounding_ticks: i32) -> Self {
        self.num_surrounding_ticks = num_surrounding_ticks;
        self
    }

    pub fn with_price_fixed_digits(mut self, price_fixed_digits: u8) -> Self {
        self.price_fixed_digits = price_fixed_digits;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        surrounding_steps(self.num_surrounding_ticks).map(|_| ())
    }

    /// The exact tick pricer matching this configuration.
    pub fn price_oracle(&self) -> TickPriceOracle {
        TickPriceOracle::new(self.price_fixed_digits)
    }
}

/// Converts a caller supplied step count, rejecting negative values.
pub(crate) fn surrounding_steps(num_surrounding_ticks: i32) -> Result<usize, ConfigError> {
    usize::try_from(num_surrounding_ticks)
        .map_err(|_| ConfigError::NegativeSurroundingTicks(num_surrounding_ticks))
}
