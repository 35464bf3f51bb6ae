use crate::error::{Error, StateError};
use crate::math::liquidity_math::to_u128;
use crate::math::sqrt_price_math::{get_amount_0_delta, get_amount_1_delta};
use crate::math::tick_math::{MAX_TICK, get_sqrt_ratio_at_tick};
use crate::pool::{PoolSnapshot, ProcessedTick};
use alloy_primitives::U256;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A processed tick narrowed to plain numbers for a charting library.
///
/// Liquidity and prices lose precision here; keep the [`ProcessedTick`]
/// around when exact values matter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BarChartTick {
    pub tick_index: i32,
    pub liquidity_active: f64,
    pub price0: f64,
    pub price1: f64,
    pub is_current: bool,
}

impl TryFrom<&ProcessedTick> for BarChartTick {
    type Error = Error;

    fn try_from(tick: &ProcessedTick) -> Result<Self, Self::Error> {
        Ok(Self {
            tick_index: tick.tick_index,
            liquidity_active: parse_decimal(&tick.liquidity_active.to_string())?,
            price0: parse_decimal(&tick.price0)?,
            price1: parse_decimal(&tick.price1)?,
            is_current: tick.is_current,
        })
    }
}

fn parse_decimal(value: &str) -> Result<f64, StateError> {
    value
        .parse::<f64>()
        .map_err(|_| StateError::InvalidDecimal(value.to_string()))
}

/// Narrows a reconstructed window for charting, keeping its order.
pub fn to_bar_chart(ticks: &[ProcessedTick]) -> Result<Vec<BarChartTick>, Error> {
    ticks.iter().map(BarChartTick::try_from).collect()
}

/// Token amounts backing one bar of the chart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LockedAmounts {
    pub tick_index: i32,
    pub amount0: U256,
    pub amount1: U256,
}

/// Computes how much of each token the active liquidity of every bar
/// holds over `[tick_index, tick_index + tick_spacing]`, at the pool's
/// current price.
///
/// A bar above the current price holds only token0, a bar below it only
/// token1, and the bar containing the price holds both. Amounts are
/// rounded down. Fails on a negative active liquidity.
pub fn locked_amounts(
    pool: &PoolSnapshot,
    ticks: &[ProcessedTick],
) -> Result<Vec<LockedAmounts>, Error> {
    let sqrt_price_x96 = pool.current_sqrt_price_x96()?;

    ticks
        .iter()
        .map(|tick| {
            let (amount0, amount1) = bar_amounts(tick, pool.tick_spacing, sqrt_price_x96)?;
            Ok(LockedAmounts {
                tick_index: tick.tick_index,
                amount0,
                amount1,
            })
        })
        .collect()
}

fn bar_amounts(
    tick: &ProcessedTick,
    tick_spacing: i32,
    sqrt_price_x96: U256,
) -> Result<(U256, U256), Error> {
    let liquidity = to_u128(tick.liquidity_active)?;
    let upper_tick = tick.tick_index.saturating_add(tick_spacing).min(MAX_TICK);

    if liquidity == 0 || upper_tick <= tick.tick_index {
        return Ok((U256::ZERO, U256::ZERO));
    }

    let sqrt_lower = get_sqrt_ratio_at_tick(tick.tick_index)?;
    let sqrt_upper = get_sqrt_ratio_at_tick(upper_tick)?;

    if sqrt_price_x96 <= sqrt_lower {
        Ok((get_amount_0_delta(sqrt_lower, sqrt_upper, liquidity)?, U256::ZERO))
    } else if sqrt_price_x96 >= sqrt_upper {
        Ok((U256::ZERO, get_amount_1_delta(sqrt_lower, sqrt_upper, liquidity)?))
    } else {
        Ok((
            get_amount_0_delta(sqrt_price_x96, sqrt_upper, liquidity)?,
            get_amount_1_delta(sqrt_lower, sqrt_price_x96, liquidity)?,
        ))
    }
}
