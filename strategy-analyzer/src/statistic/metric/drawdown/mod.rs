use crate::{series::SeriesTable, statistic::metric::cumulative::compound};

pub mod max;

/// Underwater (drawdown) curve of each column: the fractional decline of the growth-of-one curve
/// from its running peak, `cumulative / running_max(cumulative) - 1`.
///
/// Every value is at most zero, and zero at each new peak.
///
/// See documentation: <https://www.investopedia.com/terms/d/drawdown.asp>
pub fn underwater(returns: &SeriesTable) -> SeriesTable {
    returns.map_columns(underwater_curve)
}

pub(crate) fn underwater_curve(returns: &[f64]) -> Vec<f64> {
    compound(returns, 1.0)
        .into_iter()
        .scan(f64::NEG_INFINITY, |peak, value| {
            *peak = peak.max(value);
            Some(value / *peak - 1.0)
        })
        .collect()
}
