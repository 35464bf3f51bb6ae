use crate::error::StateError;
use alloy_primitives::{I256, U256};

/// Widens an unsigned pool liquidity into the signed accumulator type.
#[inline(always)]
pub fn liquidity_to_signed(liquidity: u128) -> I256 {
    I256::from_raw(U256::from(liquidity))
}

/// Widens a signed `liquidity_net` into the signed accumulator type.
#[inline(always)]
pub fn net_to_signed(liquidity_net: i128) -> I256 {
    let magnitude = I256::from_raw(U256::from(liquidity_net.unsigned_abs()));
    if liquidity_net < 0 { -magnitude } else { magnitude }
}

/// Active liquidity after crossing a tick upwards: `active + net`.
///
/// The accumulator is 256 bits wide, so a window of `u128`/`i128` deltas
/// cannot overflow it and an inconsistent delta set shows up as a negative
/// value instead of an error.
#[inline(always)]
pub fn cross_up(active: I256, liquidity_net: i128) -> I256 {
    active + net_to_signed(liquidity_net)
}

/// Active liquidity after crossing a tick downwards: `active - net`.
#[inline(always)]
pub fn cross_down(active: I256, liquidity_net: i128) -> I256 {
    active - net_to_signed(liquidity_net)
}

/// Narrows an accumulated active liquidity back to the on‑chain `uint128`.
pub fn to_u128(active: I256) -> Result<u128, StateError> {
    if active.is_negative() {
        return Err(StateError::NegativeLiquidity(active.to_string()));
    }
    u128::try_from(active.into_raw())
        .map_err(|_| StateError::LiquidityTooLarge(active.to_string()))
}
