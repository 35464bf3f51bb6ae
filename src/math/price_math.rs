use crate::error::{Error, MathError};
use crate::math::math_helpers::{div_round_half_up, pow10};
use crate::math::tick_math::get_sqrt_ratio_at_tick;
use alloy_primitives::aliases::U512;

/// 2^192, the denominator of `sqrtRatioX96^2`.
const Q192: U512 = U512::from_limbs([0, 0, 0, 1, 0, 0, 0, 0]);

/// Price of the base token in units of the quote token at `tick`, as a
/// decimal string with exactly `fixed_digits` fractional digits.
///
/// `base_is_token0` tells which side of the pool the base token sits on:
/// the raw tick price is token1 per token0, so it is inverted when the base
/// is token1. The result is scaled by `10^base_decimals / 10^quote_decimals`
/// and rounded half up. Everything is integer math, so the output is exact.
pub fn tick_to_price_fixed(
    tick: i32,
    base_is_token0: bool,
    base_decimals: u8,
    quote_decimals: u8,
    fixed_digits: u8,
) -> Result<String, Error> {
    let sqrt_ratio_x96 = U512::from(get_sqrt_ratio_at_tick(tick)?);
    let ratio_x192 = sqrt_ratio_x96 * sqrt_ratio_x96;

    let (raw_numerator, raw_denominator) = if base_is_token0 {
        (ratio_x192, Q192)
    } else {
        (Q192, ratio_x192)
    };

    let numerator_scale = pow10(u32::from(base_decimals) + u32::from(fixed_digits))?;
    let denominator_scale = pow10(u32::from(quote_decimals))?;

    let numerator = raw_numerator
        .checked_mul(numerator_scale)
        .ok_or(MathError::Overflow)?;
    let denominator = raw_denominator
        .checked_mul(denominator_scale)
        .ok_or(MathError::Overflow)?;

    let scaled = div_round_half_up(numerator, denominator)?;
    format_fixed(scaled, fixed_digits)
}

/// Renders `scaled / 10^digits` with exactly `digits` fractional digits.
fn format_fixed(scaled: U512, digits: u8) -> Result<String, Error> {
    if digits == 0 {
        return Ok(scaled.to_string());
    }

    let (integer, fraction) = scaled.div_rem(pow10(u32::from(digits))?);
    let fraction = fraction.to_string();
    Ok(format!("{integer}.{fraction:0>width$}", width = usize::from(digits)))
}
