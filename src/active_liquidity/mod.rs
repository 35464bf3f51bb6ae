//! Reconstruction of the active liquidity around a pool's current tick.
//!
//! The pool only stores `liquidity_net` at initialized ticks plus the
//! in‑range liquidity at the current tick. Walking outwards from the current
//! tick and applying the deltas gives the liquidity that would be in range
//! at every tick of a window, which is what a liquidity depth chart plots.

pub mod chart;
pub mod config;
pub mod oracle;

pub use chart::{BarChartTick, LockedAmounts, locked_amounts, to_bar_chart};
pub use config::ReconstructConfig;
pub use oracle::{PriceOracle, TickPriceOracle};

use crate::error::{ConfigError, Error};
use crate::math::liquidity_math::{cross_down, cross_up, liquidity_to_signed};
use crate::math::tick_math::{MAX_TICK, MIN_TICK, align_tick, is_valid_tick};
use crate::pool::{InitializedTick, PoolSnapshot, ProcessedTick, TickIndexMap, Token};
use config::surrounding_steps;
use tracing::{debug, trace, warn};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

/// Reconstructs the active liquidity window for `pool`.
///
/// Convenience wrapper over [`process_ticks`] taking the pool state and the
/// window size from a [`PoolSnapshot`] and a [`ReconstructConfig`].
pub fn reconstruct_active_liquidity<O>(
    pool: &PoolSnapshot,
    config: &ReconstructConfig,
    initialized_ticks: &[InitializedTick],
    oracle: &O,
) -> Result<Vec<ProcessedTick>, Error>
where
    O: PriceOracle + ?Sized,
{
    process_ticks(
        pool.current_tick,
        pool.liquidity,
        pool.tick_spacing,
        &pool.token0,
        &pool.token1,
        config.num_surrounding_ticks,
        initialized_ticks,
        oracle,
    )
}

/// Builds the dense, ascending window of ticks around `current_tick`.
///
/// The window is centred on the current tick aligned down to
/// `tick_spacing` and spans `num_surrounding_ticks` spacing steps on each
/// side, fewer where `MIN_TICK`/`MAX_TICK` cut it off.
///
/// Going up, a tick's active liquidity is the previous one plus its own
/// `liquidity_net`. Going down, it is the previous (higher) tick's active
/// liquidity minus that higher tick's `liquidity_net`. Ticks missing from
/// `initialized_ticks` have a net of zero. Entries of `initialized_ticks`
/// outside the window are ignored.
///
/// Fails only on a `current_tick` outside `[MIN_TICK, MAX_TICK]`, a
/// non-positive `tick_spacing`, a negative `num_surrounding_ticks`, or an
/// error from `oracle`.
#[allow(clippy::too_many_arguments)]
pub fn process_ticks<O>(
    current_tick: i32,
    liquidity: u128,
    tick_spacing: i32,
    token0: &Token,
    token1: &Token,
    num_surrounding_ticks: i32,
    initialized_ticks: &[InitializedTick],
    oracle: &O,
) -> Result<Vec<ProcessedTick>, Error>
where
    O: PriceOracle + ?Sized,
{
    let active_tick_idx = active_tick_index(current_tick, tick_spacing)?;
    let steps = surrounding_steps(num_surrounding_ticks)?;
    let ticks = TickIndexMap::from_ticks(initialized_ticks);

    let active_tick = ProcessedTick {
        tick_index: active_tick_idx,
        liquidity_active: liquidity_to_signed(liquidity),
        liquidity_net: ticks.liquidity_net(active_tick_idx),
        price0: oracle.price(token0, token1, active_tick_idx)?,
        price1: oracle.price(token1, token0, active_tick_idx)?,
        is_current: true,
    };

    let walker = TickWalker {
        ticks: &ticks,
        tick_spacing,
        token0,
        token1,
        oracle,
    };

    let subsequent = walker.walk(&active_tick, steps, Direction::Ascending)?;
    let mut previous = walker.walk(&active_tick, steps, Direction::Descending)?;
    previous.reverse();

    let mut processed = Vec::with_capacity(previous.len() + 1 + subsequent.len());
    processed.extend(previous);
    processed.push(active_tick);
    processed.extend(subsequent);

    debug!(
        current_tick,
        active_tick = active_tick_idx,
        tick_spacing,
        initialized = ticks.len(),
        window = processed.len(),
        "reconstructed active liquidity"
    );

    if let Some(tick) = processed.iter().find(|t| t.liquidity_active.is_negative()) {
        warn!(
            tick = tick.tick_index,
            liquidity_active = %tick.liquidity_active,
            "negative active liquidity, initialized ticks are inconsistent with pool liquidity"
        );
    }

    Ok(processed)
}

/// Aligns `current_tick` down to `tick_spacing`.
///
/// An aligned tick at or below `MIN_TICK` is moved to `MAX_TICK`; this only
/// happens for a degenerate or uninitialized pool. A `current_tick` outside
/// `[MIN_TICK, MAX_TICK]` is rejected.
pub fn active_tick_index(current_tick: i32, tick_spacing: i32) -> Result<i32, ConfigError> {
    if !is_valid_tick(current_tick) {
        return Err(ConfigError::CurrentTickOutOfBounds(current_tick));
    }
    let aligned = align_tick(current_tick, tick_spacing)?;

    if aligned <= MIN_TICK {
        warn!(
            current_tick,
            aligned,
            "active tick at or below MIN_TICK, using MAX_TICK"
        );
        return Ok(MAX_TICK);
    }
    Ok(aligned)
}

struct TickWalker<'a, O: ?Sized> {
    ticks: &'a TickIndexMap,
    tick_spacing: i32,
    token0: &'a Token,
    token1: &'a Token,
    oracle: &'a O,
}

impl<O> TickWalker<'_, O>
where
    O: PriceOracle + ?Sized,
{
    /// Walks up to `steps` spacings away from `start`, stopping at the tick
    /// bounds. Results are ordered by distance from `start`.
    fn walk(
        &self,
        start: &ProcessedTick,
        steps: usize,
        direction: Direction,
    ) -> Result<Vec<ProcessedTick>, Error> {
        let steps = steps.min(self.steps_to_bound(start.tick_index, direction));
        let mut out = Vec::with_capacity(steps);

        let mut prev_index = start.tick_index;
        let mut prev_active = start.liquidity_active;
        let mut prev_net = start.liquidity_net;

        for _ in 0..steps {
            let tick_index = match direction {
                Direction::Ascending => prev_index + self.tick_spacing,
                Direction::Descending => prev_index - self.tick_spacing,
            };
            let initialized = self.ticks.get(tick_index);
            let liquidity_net = initialized.map(|t| t.liquidity_net).unwrap_or(0);

            let liquidity_active = match direction {
                Direction::Ascending => match initialized {
                    Some(tick) => cross_up(prev_active, tick.liquidity_net),
                    None => prev_active,
                },
                // the delta of the tick we are leaving applies below it
                Direction::Descending if prev_net != 0 => cross_down(prev_active, prev_net),
                Direction::Descending => prev_active,
            };

            trace!(
                tick = tick_index,
                ?direction,
                liquidity_net = %liquidity_net,
                liquidity_active = %liquidity_active,
                "processed tick"
            );

            out.push(ProcessedTick {
                tick_index,
                liquidity_active,
                liquidity_net,
                price0: self.oracle.price(self.token0, self.token1, tick_index)?,
                price1: self.oracle.price(self.token1, self.token0, tick_index)?,
                is_current: false,
            });

            prev_index = tick_index;
            prev_active = liquidity_active;
            prev_net = liquidity_net;
        }

        Ok(out)
    }

    /// Number of whole spacings between `from` and the bound in `direction`.
    fn steps_to_bound(&self, from: i32, direction: Direction) -> usize {
        let distance = match direction {
            Direction::Ascending => i64::from(MAX_TICK) - i64::from(from),
            Direction::Descending => i64::from(from) - i64::from(MIN_TICK),
        };
        usize::try_from(distance / i64::from(self.tick_spacing)).unwrap_or(0)
    }
}
