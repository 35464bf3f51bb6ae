use crate::error::MathError;
use alloy_primitives::U256;
use alloy_primitives::aliases::U512;

const U512_TEN: U512 = U512::from_limbs([10, 0, 0, 0, 0, 0, 0, 0]);

/// Computes `a * b / denominator` with the full 512‑bit intermediate
/// product, returning a `MathError` on overflow or division by zero.
///
/// Same contract as the Solidity `FullMath.mulDiv`: the result is floored
/// and must fit in 256 bits.
#[inline(always)]
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let product = U512::from(a) * U512::from(b);
    let quotient = product / U512::from(denominator);

    if quotient > U512::from(U256::MAX) {
        return Err(MathError::Overflow);
    }
    let limbs = quotient.as_limbs();
    Ok(U256::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3]]))
}

/// Divides `numerator` by `denominator`, rounding half up.
///
/// This is the rounding used when a fraction is rendered with a fixed
/// number of decimals (`ROUND_HALF_UP`).
pub fn div_round_half_up(numerator: U512, denominator: U512) -> Result<U512, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let (quotient, remainder) = numerator.div_rem(denominator);
    // remainder >= denominator / 2, written without losing the odd bit
    if remainder >= denominator - remainder {
        quotient.checked_add(U512::ONE).ok_or(MathError::Overflow)
    } else {
        Ok(quotient)
    }
}

/// Returns `10^exponent` as a 512‑bit integer.
pub fn pow10(exponent: u32) -> Result<U512, MathError> {
    U512_TEN
        .checked_pow(U512::from(exponent))
        .ok_or(MathError::Overflow)
}
