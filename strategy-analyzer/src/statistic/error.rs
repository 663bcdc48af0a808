use chrono::TimeDelta;
use thiserror::Error;

/// All errors generated in the `strategy_analyzer::statistic` module.
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum StatisticError {
    #[error(
        "ambiguous frequency: modal gap of {mode_days} days covers {fraction:.3} of gaps, \
         below the minimum mode fraction {minimum:.3}"
    )]
    AmbiguousFrequency {
        mode_days: i64,
        fraction: f64,
        minimum: f64,
    },

    #[error("unsupported frequency: {0} is not one of (1 day, 1 week, 1 month, 1 year)")]
    UnsupportedFrequency(TimeDelta),

    #[error("insufficient data: {0} points available, at least 2 required")]
    InsufficientData(usize),

    #[error(
        "invalid resampling window: target frequency ({target} periods/year) is finer than the \
         series frequency ({series} periods/year)"
    )]
    InvalidWindow { series: f64, target: f64 },

    #[error("timestamp out of range while building resample buckets")]
    TimestampOutOfRange,
}
