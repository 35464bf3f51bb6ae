use crate::error::Error;
use crate::math::tick_math::get_sqrt_ratio_at_tick;
use crate::pool::token::{Token, sort_tokens};
use alloy_primitives::U256;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The pool state the reconstructor needs, already read from a node or an
/// index by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PoolSnapshot {
    pub token0: Token,
    pub token1: Token,
    pub tick_spacing: i32,
    // the current tick (slot0.tick)
    pub current_tick: i32,
    // the in-range liquidity at the current tick
    pub liquidity: u128,
    // slot0.sqrtPriceX96, when the caller has it
    pub sqrt_price_x96: Option<U256>,
}

impl PoolSnapshot {
    /// Builds an empty snapshot for a pair. The tokens are reordered so that
    /// `token0` is the one with the lower address.
    ///
    /// You are expected to fill `current_tick`, `liquidity` and optionally
    /// `sqrt_price_x96` with the `with_*` setters.
    pub fn new(token_a: Token, token_b: Token, tick_spacing: i32) -> Self {
        let (token0, token1) = sort_tokens(token_a, token_b);

        Self {
            token0,
            token1,
            tick_spacing,
            current_tick: 0,
            liquidity: 0,
            sqrt_price_x96: None,
        }
    }

    pub fn with_current_tick(mut self, current_tick: i32) -> Self {
        self.current_tick = current_tick;
        self
    }

    pub fn with_liquidity(mut self, liquidity: u128) -> Self {
        self.liquidity = liquidity;
        self
    }

    pub fn with_sqrt_price_x96(mut self, sqrt_price_x96: U256) -> Self {
        self.sqrt_price_x96 = Some(sqrt_price_x96);
        self
    }

    /// Current sqrt price: `slot0.sqrtPriceX96` if known, otherwise the
    /// sqrt ratio at the current tick.
    pub fn current_sqrt_price_x96(&self) -> Result<U256, Error> {
        match self.sqrt_price_x96 {
            Some(sqrt_price_x96) => Ok(sqrt_price_x96),
            None => Ok(get_sqrt_ratio_at_tick(self.current_tick)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;
    use crate::math::tick_math::MAX_TICK;
    use alloy_primitives::address;
    use std::str::FromStr;

    fn tokens() -> (Token, Token) {
        (
            Token::new(address!("0x0000000000000000000000000000000000000002"), 18),
            Token::new(address!("0x0000000000000000000000000000000000000001"), 6),
        )
    }

    #[test]
    fn new_sorts_tokens_and_initializes_state() {
        let (hi, lo) = tokens();
        let pool = PoolSnapshot::new(hi.clone(), lo.clone(), 60);

        assert_eq!(pool.token0, lo);
        assert_eq!(pool.token1, hi);
        assert_eq!(pool.tick_spacing, 60);
        assert_eq!(pool.current_tick, 0);
        assert_eq!(pool.liquidity, 0);
        assert_eq!(pool.sqrt_price_x96, None);
    }

    #[test]
    fn current_sqrt_price_prefers_slot0_value() {
        let (a, b) = tokens();
        let pool = PoolSnapshot::new(a, b, 1)
            .with_current_tick(100)
            .with_sqrt_price_x96(U256::from(12345u64));

        assert_eq!(pool.current_sqrt_price_x96().unwrap(), U256::from(12345u64));
    }

    #[test]
    fn current_sqrt_price_falls_back_to_tick() {
        let (a, b) = tokens();
        let pool = PoolSnapshot::new(a, b, 1).with_current_tick(0);

        assert_eq!(
            pool.current_sqrt_price_x96().unwrap(),
            U256::from_str("79228162514264337593543950336").unwrap()
        );
    }

    #[test]
    fn current_sqrt_price_rejects_out_of_range_tick() {
        let (a, b) = tokens();
        let pool = PoolSnapshot::new(a, b, 1).with_current_tick(MAX_TICK + 1);

        assert_eq!(
            pool.current_sqrt_price_x96(),
            Err(Error::StateError(StateError::TickOutOfBounds(MAX_TICK + 1)))
        );
    }
}
