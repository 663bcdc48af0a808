use crate::{
    series::{ColumnMap, SeriesTable},
    statistic::{
        metric::{
            cumulative::years_elapsed,
            drawdown::max::MaxDrawdown,
            rate_of_return::{annualize, final_growth},
        },
        time::{Frequency, TimeInterval},
    },
};
use serde::{Deserialize, Serialize};

/// Represents a Calmar Ratio value over a specific [`TimeInterval`].
///
/// The Calmar Ratio is a risk-adjusted return measure that divides the annualised return by the
/// Maximum Drawdown risk. It's similar to the Sharpe and Sortino ratios, but uses Maximum Drawdown
/// as the risk measure instead of standard deviation.
///
/// See docs: <https://corporatefinanceinstitute.com/resources/career-map/sell-side/capital-markets/calmar-ratio/>
#[derive(Debug, Clone, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct CalmarRatio<Interval> {
    pub value: f64,
    pub interval: Interval,
}

impl<Interval> CalmarRatio<Interval>
where
    Interval: TimeInterval,
{
    /// Calculate the [`CalmarRatio`] over the provided [`TimeInterval`].
    ///
    /// A zero `max_drawdown` yields a non-finite value (`±inf`, or NaN for a zero return).
    pub fn calculate(mean_return: f64, max_drawdown: f64, returns_period: Interval) -> Self {
        Self {
            value: mean_return / max_drawdown.abs(),
            interval: returns_period,
        }
    }
}

/// Calmar Ratio of each column: `annualized_return / abs(max_drawdown)`.
///
/// A column that never declines has a zero drawdown, and a non-finite ratio.
pub fn calmar_ratio(returns: &SeriesTable) -> ColumnMap<f64> {
    let years = years_elapsed(returns);

    returns.reduce_columns(|values| {
        let max_drawdown = MaxDrawdown::from_column(returns.index(), values);

        CalmarRatio::calculate(
            annualize(final_growth(values), years),
            max_drawdown.value,
            Frequency::Year,
        )
        .value
    })
}
