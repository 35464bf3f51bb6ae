use crate::FastMap;
use crate::error::Error;
use crate::math::liquidity_math::to_u128;
use alloy_primitives::I256;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A tick that some position uses as a boundary, as reported by the pool
/// (`ticks(int24)`) or a tick lens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InitializedTick {
    pub tick_index: i32,
    // the total position liquidity that references this tick
    pub liquidity_gross: u128,
    // amount of net liquidity added (subtracted) when tick is crossed from left to right (right to left)
    pub liquidity_net: i128,
}

impl InitializedTick {
    #[inline]
    pub fn new(tick_index: i32, liquidity_gross: u128, liquidity_net: i128) -> Self {
        Self {
            tick_index,
            liquidity_gross,
            liquidity_net,
        }
    }
}

/// One entry of the dense window produced by the reconstructor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProcessedTick {
    pub tick_index: i32,
    /// In‑range liquidity at this tick. Signed so that an inconsistent set of
    /// deltas is visible as a negative value rather than silently clamped.
    pub liquidity_active: I256,
    pub liquidity_net: i128,
    /// Price of token0 in token1 at this tick.
    pub price0: String,
    /// Price of token1 in token0 at this tick.
    pub price1: String,
    pub is_current: bool,
}

impl ProcessedTick {
    /// Active liquidity as the on‑chain `uint128`, failing if the
    /// accumulated value is negative or too large.
    pub fn liquidity_active_u128(&self) -> Result<u128, Error> {
        Ok(to_u128(self.liquidity_active)?)
    }
}

/// Sparse lookup of initialized ticks by tick index.
#[derive(Clone, Debug, Default)]
pub struct TickIndexMap {
    ticks: FastMap<i32, InitializedTick>,
}

impl TickIndexMap {
    /// Indexes `ticks` by `tick_index`. Later duplicates replace earlier
    /// ones.
    pub fn from_ticks(ticks: &[InitializedTick]) -> Self {
        ticks.iter().copied().collect()
    }

    #[inline]
    pub fn get(&self, tick_index: i32) -> Option<&InitializedTick> {
        self.ticks.get(&tick_index)
    }

    /// Returns the net liquidity delta at `tick_index`, `0` when the tick is
    /// not initialized.
    #[inline]
    pub fn liquidity_net(&self, tick_index: i32) -> i128 {
        self.get(tick_index)
            .map(|tick| tick.liquidity_net)
            .unwrap_or(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl FromIterator<InitializedTick> for TickIndexMap {
    fn from_iter<I: IntoIterator<Item = InitializedTick>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut ticks = FastMap::default();
        ticks.reserve(iter.size_hint().0);
        for tick in iter {
            ticks.insert(tick.tick_index, tick);
        }
        Self { ticks }
    }
}
