//! Active liquidity reconstruction for Uniswap V3–style pools in pure Rust.
//!
//! This crate exposes:
//! - Low‑level math primitives (`math::*`) for ticks, sqrt prices and
//!   tick prices.
//! - Plain pool/tick records (`pool::*`) that a caller fills from whatever
//!   data source it uses (node, indexer, fixtures).
//! - The reconstructor (`active_liquidity::*`) that turns a sparse set of
//!   initialized ticks into a dense, ordered window of ticks annotated with
//!   the in‑range liquidity at each one, ready for charting.
//!
//! # Examples
//!
//! ## Reconstructing the liquidity around the current tick
//! ```no_run
//! use clmm_active_liquidity::{
//!     active_liquidity::{reconstruct_active_liquidity, ReconstructConfig, TickPriceOracle},
//!     pool::{InitializedTick, PoolSnapshot, Token},
//!     Address,
//! };
//!
//! let token0 = Token::new(Address::with_last_byte(1), 6);
//! let token1 = Token::new(Address::with_last_byte(2), 18);
//! let pool = PoolSnapshot::new(token0, token1, 60)
//!     .with_current_tick(201_000)
//!     .with_liquidity(12_000_000_000_000_000u128);
//!
//! let ticks = vec![InitializedTick::new(201_060, 5_000, -5_000)];
//! let config = ReconstructConfig::default().with_num_surrounding_ticks(10);
//!
//! let processed =
//!     reconstruct_active_liquidity(&pool, &config, &ticks, &TickPriceOracle::default()).unwrap();
//! assert_eq!(processed.len(), 21);
//! ```

pub use alloy_primitives::{Address, I256, U256};

pub mod active_liquidity;
pub mod error;
mod hash;
pub mod math;
pub mod pool;

pub use hash::FastMap;

pub use active_liquidity::{process_ticks, reconstruct_active_liquidity};
pub use pool::{InitializedTick, PoolSnapshot, ProcessedTick, Token};

pub const RESOLUTION: u8 = 96;
pub const Q96: U256 = U256::from_limbs([0, 4294967296, 0, 0]);
