use clmm_active_liquidity::active_liquidity::{TickPriceOracle, process_ticks};
use clmm_active_liquidity::math::price_math::tick_to_price_fixed;
use clmm_active_liquidity::math::sqrt_price_math::{get_amount_0_delta, get_amount_1_delta};
use clmm_active_liquidity::math::tick_math::get_sqrt_ratio_at_tick;
use clmm_active_liquidity::{Address, InitializedTick, Token};
use criterion::Criterion;
use std::hint::black_box;

#[allow(dead_code)]
fn tokens() -> (Token, Token) {
    (
        Token::new(Address::with_last_byte(1), 6),
        Token::new(Address::with_last_byte(2), 18),
    )
}

#[allow(dead_code)]
// one position boundary every 4 spacings, alternating sign
fn sparse_ticks(center: i32, tick_spacing: i32, count: i32) -> Vec<InitializedTick> {
    (-count..count)
        .map(|i| {
            let net = if i % 2 == 0 { 1_000_000 } else { -1_000_000 };
            InitializedTick::new(center + i * 4 * tick_spacing, 1_000_000, net)
        })
        .collect()
}

#[allow(dead_code)]
pub fn bench_tick_math(c: &mut Criterion) {
    c.bench_function("get_sqrt_ratio_at_tick", |b| {
        b.iter(|| get_sqrt_ratio_at_tick(black_box(201_000)))
    });
}

#[allow(dead_code)]
pub fn bench_price_math(c: &mut Criterion) {
    c.bench_function("tick_to_price_fixed", |b| {
        b.iter(|| tick_to_price_fixed(black_box(201_000), false, 18, 6, 6))
    });
}

#[allow(dead_code)]
pub fn bench_sqrt_price_math(c: &mut Criterion) {
    let lower = get_sqrt_ratio_at_tick(200_940).unwrap();
    let upper = get_sqrt_ratio_at_tick(201_000).unwrap();

    c.bench_function("get_amount_0_delta", |b| {
        b.iter(|| get_amount_0_delta(black_box(lower), black_box(upper), 1_000_000_000_000))
    });
    c.bench_function("get_amount_1_delta", |b| {
        b.iter(|| get_amount_1_delta(black_box(lower), black_box(upper), 1_000_000_000_000))
    });
}

#[allow(dead_code)]
pub fn bench_process_ticks(c: &mut Criterion) {
    let (token0, token1) = tokens();
    let ticks = sparse_ticks(201_000, 60, 100);
    let oracle = TickPriceOracle::default();

    for surrounding in [50, 300] {
        c.bench_function(&format!("process_ticks_{surrounding}"), |b| {
            b.iter(|| {
                process_ticks(
                    black_box(201_013),
                    1_000_000_000_000,
                    60,
                    &token0,
                    &token1,
                    surrounding,
                    &ticks,
                    &oracle,
                )
            })
        });
    }
}
