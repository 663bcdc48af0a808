use crate::{
    series::{ColumnMap, SeriesTable},
    statistic::{
        algorithm::Moments,
        error::StatisticError,
        metric::resolve_frequency,
        time::{CalendarConvention, Frequency, TimeInterval},
    },
};
use serde::{Deserialize, Serialize};

/// Represents a Sharpe Ratio value over a specific [`TimeInterval`].
///
/// Sharpe Ratio measures the risk-adjusted return of an investment by comparing its mean return
/// to the standard deviation of its returns.
///
/// See docs: <https://www.investopedia.com/articles/07/sharpe_ratio.asp>
#[derive(Debug, Clone, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct SharpeRatio<Interval> {
    pub value: f64,
    pub interval: Interval,
}

impl<Interval> SharpeRatio<Interval>
where
    Interval: TimeInterval,
{
    /// Calculate the [`SharpeRatio`] over the provided [`TimeInterval`].
    ///
    /// A zero `std_dev_returns` yields a non-finite value (`±inf`, or NaN for a zero mean).
    pub fn calculate(mean_return: f64, std_dev_returns: f64, returns_period: Interval) -> Self {
        Self {
            value: mean_return / std_dev_returns,
            interval: returns_period,
        }
    }
}

impl SharpeRatio<Frequency> {
    /// Annualise the per-period [`SharpeRatio`] by the square root of the number of periods per
    /// year under the provided [`CalendarConvention`].
    ///
    /// This scaling assumes the returns are independently and identically distributed (IID).
    pub fn annualise(self, convention: CalendarConvention) -> SharpeRatio<CalendarConvention> {
        SharpeRatio {
            value: self.value * self.interval.periods_per_year(convention).sqrt(),
            interval: convention,
        }
    }
}

/// Annualised Sharpe Ratio of each column: `mean(r) / std(r) * sqrt(periods per year)`.
///
/// Uses the raw per-row returns and their sample standard deviation. If `frequency` is `None` it
/// is inferred from the table index.
pub fn sharpe_ratio(
    returns: &SeriesTable,
    frequency: Option<Frequency>,
    convention: CalendarConvention,
) -> Result<ColumnMap<f64>, StatisticError> {
    let frequency = resolve_frequency(returns, frequency)?;

    Ok(returns.reduce_columns(|values| {
        let moments = values.iter().copied().collect::<Moments>();
        SharpeRatio::calculate(moments.mean(), moments.sample_std_dev(), frequency)
            .annualise(convention)
            .value
    }))
}
