use crate::{
    series::SeriesTable,
    statistic::{
        error::StatisticError, frequency::DEFAULT_MINIMUM_MODE_FRACTION, time::Frequency,
    },
};

/// Calmar Ratio.
pub mod calmar;

/// Compounded return curves and elapsed time.
pub mod cumulative;

/// Underwater curve and maximum drawdown.
pub mod drawdown;

/// Annualised rate of return.
pub mod rate_of_return;

/// Sharpe Ratio.
pub mod sharpe;

/// Sortino Ratio.
pub mod sortino;

/// Fraction of periods with a position held.
pub mod time_in_market;

/// Annualised volatility measured at a target frequency.
pub mod volatility;

/// Use the provided [`Frequency`], or infer it from the table index.
pub(crate) fn resolve_frequency(
    returns: &SeriesTable,
    frequency: Option<Frequency>,
) -> Result<Frequency, StatisticError> {
    match frequency {
        Some(frequency) => Ok(frequency),
        None => Frequency::infer(returns.index(), DEFAULT_MINIMUM_MODE_FRACTION),
    }
}
