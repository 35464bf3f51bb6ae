use alloy_primitives::{Address, U160};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ERC‑20 token as far as price math is concerned: where it lives and
/// how many decimals one whole unit has.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
}

impl Token {
    pub fn new(address: Address, decimals: u8) -> Self {
        Self {
            address,
            decimals,
            symbol: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Returns `true` if this token is `token0` of a pool paired with `other`.
    ///
    /// Uniswap V3 orders a pair by the numeric value of the addresses.
    #[inline(always)]
    pub fn sorts_before(&self, other: &Token) -> bool {
        address_to_u160(self.address) < address_to_u160(other.address)
    }
}

/// Converts an `Address` into its `U160` numeric representation.
#[inline(always)]
pub fn address_to_u160(address: Address) -> U160 {
    address.into()
}

/// Returns the token pair sorted by numeric address, as used by Uniswap V3.
pub fn sort_tokens(token_a: Token, token_b: Token) -> (Token, Token) {
    if token_a.sorts_before(&token_b) {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}
