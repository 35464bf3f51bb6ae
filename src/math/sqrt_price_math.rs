use crate::math::math_helpers::mul_div;
use crate::{
    Q96, RESOLUTION,
    error::{Error, MathError, StateError},
};
use alloy_primitives::U256;

#[inline(always)]
fn sorted(a: U256, b: U256) -> (U256, U256) {
    if a > b { (b, a) } else { (a, b) }
}

/// Amount of token0 held by `liquidity` between two sqrt prices,
/// rounded down.
///
/// `L * (sqrt_b - sqrt_a) / (sqrt_a * sqrt_b)`, with the prices in either
/// order.
pub fn get_amount_0_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<U256, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sorted(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_ratio_a_x96.is_zero() {
        return Err(StateError::SqrtRatioIsZero.into());
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x96)? / sqrt_ratio_a_x96)
}

/// Amount of token1 held by `liquidity` between two sqrt prices,
/// rounded down.
///
/// `L * (sqrt_b - sqrt_a)`, with the prices in either order.
pub fn get_amount_1_delta(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<U256, MathError> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sorted(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    mul_div(
        U256::from(liquidity),
        sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
        Q96,
    )
}
