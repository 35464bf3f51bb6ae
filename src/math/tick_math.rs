use crate::error::{ConfigError, StateError};
use alloy_primitives::U256;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295128739, 0, 0, 0]);
pub const MAX_SQRT_RATIO: U256 =
    U256::from_limbs([6743328256752651558, 17280870778742802505, 4294805859, 0]);

/// Returns the sqrt price (Q64.96 fixed‑point) at a given Uniswap V3
/// tick index, or `StateError::TickOutOfBounds` if the tick is invalid.
///
/// Use this to convert from discrete ticks to the continuous price
/// representation used by the rest of the math.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256, StateError> {
    let abs_tick = tick.unsigned_abs();

    if abs_tick > MAX_TICK as u32 {
        return Err(StateError::TickOutOfBounds(tick));
    }

    let mut ratio = if abs_tick & 1 != 0 {
        U256::from_limbs([12262481743371124737, 18445821805675392311, 0, 0])
    } else {
        U256::from_limbs([0, 0, 1, 0])
    };

    macro_rules! apply_multiplier {
        ($bit:expr, $l0:expr, $l1:expr) => {
            if abs_tick & $bit != 0 {
                ratio = ratio.wrapping_mul(U256::from_limbs([$l0, $l1, 0, 0])) >> 128;
            }
        };
    }

    apply_multiplier!(2, 6459403834229662010, 18444899583751176498);
    apply_multiplier!(4, 17226890335427755468, 18443055278223354162);
    apply_multiplier!(8, 2032852871939366096, 18439367220385604838);
    apply_multiplier!(16, 14545316742740207172, 18431993317065449817);
    apply_multiplier!(32, 5129152022828963008, 18417254355718160513);
    apply_multiplier!(64, 4894419605888772193, 18387811781193591352);
    apply_multiplier!(128, 1280255884321894483, 18329067761203520168);
    apply_multiplier!(256, 15924666964335305636, 18212142134806087854);
    apply_multiplier!(512, 8010504389359918676, 17980523815641551639);
    apply_multiplier!(1024, 10668036004952895731, 17526086738831147013);
    apply_multiplier!(2048, 4878133418470705625, 16651378430235024244);
    apply_multiplier!(4096, 9537173718739605541, 15030750278693429944);
    apply_multiplier!(8192, 9972618978014552549, 12247334978882834399);
    apply_multiplier!(16384, 10428997489610666743, 8131365268884726200);
    apply_multiplier!(32768, 9305304367709015974, 3584323654723342297);
    apply_multiplier!(65536, 14301143598189091785, 696457651847595233);
    apply_multiplier!(131072, 7393154844743099908, 26294789957452057);
    apply_multiplier!(262144, 2209338891292245656, 37481735321082);
    apply_multiplier!(524288, 10518117631919034274, 76158723);

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    let lower_32_bits = (ratio.as_limbs()[0] & 0xFFFF_FFFF) as u32;
    Ok((ratio >> 32) + U256::from((lower_32_bits != 0) as u64))
}

/// Rounds `tick` down (towards negative infinity) to the closest multiple
/// of `tick_spacing`.
///
/// Negative ticks round away from zero: `-5` with spacing `10` aligns to
/// `-10`, not `0`.
pub fn align_tick(tick: i32, tick_spacing: i32) -> Result<i32, ConfigError> {
    if tick_spacing <= 0 {
        return Err(ConfigError::InvalidTickSpacing(tick_spacing));
    }
    Ok(tick.div_euclid(tick_spacing) * tick_spacing)
}

/// Returns `true` when `tick` lies inside `[MIN_TICK, MAX_TICK]`.
#[inline(always)]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

#[cfg(test)]
mod test {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn test_get_sqrt_ratio_at_tick_bounds() {
        // the function should return an error if the tick is out of bounds
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK - 1),
            Err(StateError::TickOutOfBounds(MIN_TICK - 1))
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK + 1),
            Err(StateError::TickOutOfBounds(MAX_TICK + 1))
        );
    }

    #[test]
    fn test_get_sqrt_ratio_at_tick_values() {
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK).unwrap(),
            U256::from_str("1461446703485210103287273052203988822378723970342").unwrap(),
            "sqrt ratio at max incorrect"
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(0).unwrap(),
            U256::from_str("79228162514264337593543950336").unwrap(),
            "sqrt ratio at 0 should be 2^96"
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK + 1).unwrap(),
            U256::from(4295343490u64),
            "sqrt ratio at min + 1 incorrect"
        );
        // checking hard coded values against solidity results
        assert_eq!(
            get_sqrt_ratio_at_tick(50).unwrap(),
            U256::from(79426470787362580746886972461u128),
            "sqrt ratio at 50 incorrect"
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(100).unwrap(),
            U256::from(79625275426524748796330556128u128),
            "sqrt ratio at 100 incorrect"
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(50000).unwrap(),
            U256::from(965075977353221155028623082916u128),
            "sqrt ratio at 50000 incorrect"
        );
    }

    #[test]
    fn align_tick_floors_towards_negative_infinity() {
        assert_eq!(align_tick(100, 10).unwrap(), 100);
        assert_eq!(align_tick(105, 10).unwrap(), 100);
        assert_eq!(align_tick(-5, 10).unwrap(), -10);
        assert_eq!(align_tick(-10, 10).unwrap(), -10);
        assert_eq!(align_tick(-201_013, 60).unwrap(), -201_060);
        assert_eq!(align_tick(7, 1).unwrap(), 7);
    }

    #[test]
    fn align_tick_rejects_non_positive_spacing() {
        assert_eq!(align_tick(5, 0), Err(ConfigError::InvalidTickSpacing(0)));
        assert_eq!(align_tick(5, -10), Err(ConfigError::InvalidTickSpacing(-10)));
    }

    #[test]
    fn valid_tick_range_is_inclusive() {
        assert!(is_valid_tick(MIN_TICK));
        assert!(is_valid_tick(MAX_TICK));
        assert!(!is_valid_tick(MIN_TICK - 1));
        assert!(!is_valid_tick(MAX_TICK + 1));
    }
}
