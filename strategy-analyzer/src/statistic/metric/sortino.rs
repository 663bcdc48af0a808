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

/// Represents a Sortino Ratio value over a specific [`TimeInterval`].
///
/// Note the conventional Sortino Ratio divides the mean return by the downside deviation, whereas
/// this [`SortinoRatio`] divides by the sample standard deviation of the strictly positive returns.
///
/// See docs: <https://www.investopedia.com/terms/s/sortinoratio.asp>
#[derive(Debug, Clone, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct SortinoRatio<Interval> {
    pub value: f64,
    pub interval: Interval,
}

impl<Interval> SortinoRatio<Interval>
where
    Interval: TimeInterval,
{
    /// Calculate the [`SortinoRatio`] over the provided [`TimeInterval`].
    pub fn calculate(
        mean_return: f64,
        std_dev_positive_returns: f64,
        returns_period: Interval,
    ) -> Self {
        Self {
            value: mean_return / std_dev_positive_returns,
            interval: returns_period,
        }
    }
}

impl SortinoRatio<Frequency> {
    /// Annualise the per-period [`SortinoRatio`] by the square root of the number of periods per
    /// year under the provided [`CalendarConvention`].
    pub fn annualise(self, convention: CalendarConvention) -> SortinoRatio<CalendarConvention> {
        SortinoRatio {
            value: self.value * self.interval.periods_per_year(convention).sqrt(),
            interval: convention,
        }
    }
}

/// Annualised Sortino Ratio of each column:
/// `mean(r) / std(r where r > 0) * sqrt(periods per year)`.
///
/// The mean is taken over every return. Fewer than two strictly positive returns leaves the
/// denominator undefined, and the result NaN. If `frequency` is `None` it is inferred from the
/// table index.
pub fn sortino_ratio(
    returns: &SeriesTable,
    frequency: Option<Frequency>,
    convention: CalendarConvention,
) -> Result<ColumnMap<f64>, StatisticError> {
    let frequency = resolve_frequency(returns, frequency)?;

    Ok(returns.reduce_columns(|values| {
        let all = values.iter().copied().collect::<Moments>();
        let positive = values
            .iter()
            .copied()
            .filter(|value| *value > 0.0)
            .collect::<Moments>();

        SortinoRatio::calculate(all.mean(), positive.sample_std_dev(), frequency)
            .annualise(convention)
            .value
    }))
}
