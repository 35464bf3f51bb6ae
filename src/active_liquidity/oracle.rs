use crate::error::Error;
use crate::math::price_math::tick_to_price_fixed;
use crate::pool::Token;

/// Number of fractional digits prices are rendered with by default.
pub const PRICE_FIXED_DIGITS: u8 = 6;

/// Prices a tick for a base/quote ordering of a pool's tokens.
///
/// Implementations must be pure: the same arguments always give the same
/// string. The reconstructor calls it twice per tick, once as
/// `(token0, token1)` and once as `(token1, token0)`.
pub trait PriceOracle {
    fn price(&self, base: &Token, quote: &Token, tick_index: i32) -> Result<String, Error>;
}

impl<F> PriceOracle for F
where
    F: Fn(&Token, &Token, i32) -> Result<String, Error>,
{
    #[inline]
    fn price(&self, base: &Token, quote: &Token, tick_index: i32) -> Result<String, Error> {
        self(base, quote, tick_index)
    }
}

/// Exact `1.0001^tick` pricing, adjusted for token decimals and rendered
/// with a fixed number of fractional digits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickPriceOracle {
    fixed_digits: u8,
}

impl TickPriceOracle {
    pub fn new(fixed_digits: u8) -> Self {
        Self { fixed_digits }
    }

    pub fn fixed_digits(&self) -> u8 {
        self.fixed_digits
    }
}

impl Default for TickPriceOracle {
    fn default() -> Self {
        Self::new(PRICE_FIXED_DIGITS)
    }
}

impl PriceOracle for TickPriceOracle {
    fn price(&self, base: &Token, quote: &Token, tick_index: i32) -> Result<String, Error> {
        tick_to_price_fixed(
            tick_index,
            base.sorts_before(quote),
            base.decimals,
            quote.decimals,
            self.fixed_digits,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn usdc() -> Token {
        Token::new(address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"), 6)
    }

    fn weth() -> Token {
        Token::new(address!("0xc02aaa39b223fe8d0a0e5c3756cc2f38c2a5c59b"), 18)
    }

    #[test]
    fn both_orderings_at_tick_zero_reflect_decimals() {
        let oracle = TickPriceOracle::default();

        // raw price 1 means 1 wei of WETH per 1e-6 USDC
        assert_eq!(
            oracle.price(&usdc(), &weth(), 0).unwrap(),
            "0.000000"
        );
        assert_eq!(
            oracle.price(&weth(), &usdc(), 0).unwrap(),
            "1000000000000.000000"
        );
    }

    #[test]
    fn usdc_weth_pool_price_is_readable() {
        // tick 201_000 in the USDC/WETH pool is roughly 1867 USDC per WETH
        let oracle = TickPriceOracle::default();
        let usdc_per_weth: f64 = oracle.price(&weth(), &usdc(), 201_000).unwrap().parse().unwrap();
        assert!((1800.0..1900.0).contains(&usdc_per_weth), "{usdc_per_weth}");
    }

    #[test]
    fn fixed_digits_are_configurable() {
        let oracle = TickPriceOracle::new(2);
        assert_eq!(oracle.fixed_digits(), 2);

        let same = Token::new(address!("0x0000000000000000000000000000000000000001"), 0);
        let other = Token::new(address!("0x0000000000000000000000000000000000000002"), 0);
        assert_eq!(oracle.price(&same, &other, 100).unwrap(), "1.01");
    }

    #[test]
    fn closures_are_oracles() {
        let stub = |_: &Token, _: &Token, tick: i32| -> Result<String, Error> { Ok(tick.to_string()) };
        assert_eq!(stub.price(&usdc(), &weth(), -60).unwrap(), "-60");
    }
}
