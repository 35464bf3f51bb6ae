use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("State error - sqrtRatio is 0")]
    SqrtRatioIsZero,

    #[error("State error - tick {0} out of bounds")]
    TickOutOfBounds(i32),

    #[error("State error - active liquidity {0} is negative")]
    NegativeLiquidity(String),

    #[error("State error - active liquidity {0} does not fit in 128 bits")]
    LiquidityTooLarge(String),

    #[error("State error - {0:?} is not a decimal number")]
    InvalidDecimal(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config error - tick spacing must be positive, got {0}")]
    InvalidTickSpacing(i32),

    #[error("Config error - number of surrounding ticks must not be negative, got {0}")]
    NegativeSurroundingTicks(i32),

    #[error("Config error - current tick {0} is outside [MIN_TICK, MAX_TICK]")]
    CurrentTickOutOfBounds(i32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    StateError(#[from] crate::error::StateError),

    #[error(transparent)]
    ConfigError(#[from] crate::error::ConfigError),
}
