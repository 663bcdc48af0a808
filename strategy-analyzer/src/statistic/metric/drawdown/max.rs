use crate::{
    series::{ColumnMap, SeriesTable},
    statistic::metric::{cumulative::compound, drawdown::underwater_curve},
};
use chrono::{DateTime, TimeDelta, Utc};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// [`MaxDrawdown`] is the largest peak-to-trough decline of a growth-of-one return curve.
///
/// Max Drawdown is a measure of downside risk, with larger values indicating downside movements
/// could be volatile. The `value` is a non-positive fraction (eg/ -0.25 for a 25% decline), and 0.0
/// if the curve never declines.
///
/// See documentation: <https://www.investopedia.com/terms/m/maximum-drawdown-mdd.asp>
#[derive(Debug, Clone, PartialEq, PartialOrd, Deserialize, Serialize, Constructor)]
pub struct MaxDrawdown {
    pub value: f64,
    pub time_peak: DateTime<Utc>,
    pub time_trough: DateTime<Utc>,
}

impl MaxDrawdown {
    /// Calculate the [`MaxDrawdown`] of one column of period returns, timestamped by `index`.
    ///
    /// The trough is the first occurrence of the underwater curve minimum, and the peak is the
    /// first occurrence of the running maximum preceding it.
    ///
    /// Returns `None` if `returns` is empty, or `index` does not hold one timestamp per return.
    pub fn calculate(index: &[DateTime<Utc>], returns: &[f64]) -> Option<Self> {
        if returns.is_empty() || index.len() != returns.len() {
            return None;
        }

        Some(Self::from_column(index, returns))
    }

    /// Calculate the [`MaxDrawdown`] of a non-empty column with one timestamp per return, as
    /// guaranteed by a [`SeriesTable`].
    pub(crate) fn from_column(index: &[DateTime<Utc>], returns: &[f64]) -> Self {
        let underwater = underwater_curve(returns);

        let trough = underwater
            .iter()
            .enumerate()
            .fold(None, |lowest: Option<(usize, f64)>, (position, value)| {
                match lowest {
                    _ if value.is_nan() => lowest,
                    Some((_, lowest_value)) if *value >= lowest_value => lowest,
                    _ => Some((position, *value)),
                }
            });

        let (trough, value) = trough.unwrap_or((0, f64::NAN));

        let cumulative = compound(&returns[..=trough], 1.0);
        let peak = cumulative
            .iter()
            .enumerate()
            .fold(0, |peak, (position, value)| {
                if *value > cumulative[peak] {
                    position
                } else {
                    peak
                }
            });

        Self {
            value,
            time_peak: index[peak],
            time_trough: index[trough],
        }
    }

    /// Time period from peak to trough of the [`MaxDrawdown`].
    pub fn duration(&self) -> TimeDelta {
        self.time_trough.signed_duration_since(self.time_peak)
    }
}

/// [`MaxDrawdown`] of each column.
pub fn max_drawdown_detail(returns: &SeriesTable) -> ColumnMap<MaxDrawdown> {
    returns.reduce_columns(|values| MaxDrawdown::from_column(returns.index(), values))
}

/// Minimum of each column's underwater curve: the most negative drawdown, or 0.0 if the column
/// never declines.
pub fn max_drawdown(returns: &SeriesTable) -> ColumnMap<f64> {
    returns.reduce_columns(|values| MaxDrawdown::from_column(returns.index(), values).value)
}

/// Timestamp at which each column's underwater curve reaches its minimum. Ties resolve to the
/// first occurrence.
pub fn max_drawdown_date(returns: &SeriesTable) -> ColumnMap<DateTime<Utc>> {
    returns.reduce_columns(|values| MaxDrawdown::from_column(returns.index(), values).time_trough)
}
