use crate::{
    series::{ColumnMap, SeriesTable},
    statistic::{
        algorithm::Moments,
        error::StatisticError,
        frequency::DEFAULT_MINIMUM_MODE_FRACTION,
        metric::cumulative::compound,
        time::{CalendarConvention, Frequency},
    },
};
use tracing::debug;

/// Annualised volatility of each column, measured at the `target` [`Frequency`].
///
/// The native frequency of the table is inferred from its index. See
/// [`annualized_volatility_with`] for the calculation.
pub fn annualized_volatility(
    returns: &SeriesTable,
    target: Option<Frequency>,
    convention: CalendarConvention,
) -> Result<ColumnMap<f64>, StatisticError> {
    let series_frequency = Frequency::infer(returns.index(), DEFAULT_MINIMUM_MODE_FRACTION)?;
    annualized_volatility_with(returns, series_frequency, target, convention)
}

/// Annualised volatility of each column sampled at `series_frequency`, measured at the `target`
/// [`Frequency`] (defaults to `series_frequency`).
///
/// Each column is compounded into a growth-of-one curve, and the percentage change taken over a
/// rolling window of `trunc(series periods per year / target periods per year)` rows. The sample
/// standard deviation of those windowed returns is scaled by the square root of the target
/// periods per year.
///
/// A `target` finer than `series_frequency` fails with [`StatisticError::InvalidWindow`]. Fewer
/// than two windowed returns yields NaN.
pub fn annualized_volatility_with(
    returns: &SeriesTable,
    series_frequency: Frequency,
    target: Option<Frequency>,
    convention: CalendarConvention,
) -> Result<ColumnMap<f64>, StatisticError> {
    let target = target.unwrap_or(series_frequency);
    let series_periods = series_frequency.periods_per_year(convention);
    let target_periods = target.periods_per_year(convention);

    let window = volatility_window(series_periods, target_periods)?;

    debug!(
        ?series_frequency,
        ?target,
        window,
        "calculating annualised volatility"
    );

    Ok(returns.reduce_columns(|values| {
        windowed_returns(values, window).sample_std_dev() * target_periods.sqrt()
    }))
}

/// Number of native periods that make up one target period.
fn volatility_window(series_periods: f64, target_periods: f64) -> Result<usize, StatisticError> {
    let window = (series_periods / target_periods).trunc();
    if window < 1.0 {
        return Err(StatisticError::InvalidWindow {
            series: series_periods,
            target: target_periods,
        });
    }

    Ok(window as usize)
}

/// [`Moments`] of the percentage changes of the growth-of-one curve over `window` rows.
fn windowed_returns(returns: &[f64], window: usize) -> Moments {
    let curve = compound(returns, 1.0);
    curve
        .iter()
        .zip(curve.iter().skip(window))
        .map(|(prev, next)| next / prev - 1.0)
        .collect()
}
