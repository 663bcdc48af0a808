use crate::series::SeriesTable;

/// Average number of days in a year, including leap years.
pub const DAYS_PER_YEAR_AVERAGE: f64 = 365.25;

/// Compound each column of period returns into a cumulative return curve.
///
/// Each value is the running product of `(1 + r)` minus one, shifted by `start_point`. A
/// `start_point` of 1.0 yields a growth-of-one curve, and 0.0 yields cumulative fractional
/// returns, so the two always differ by exactly 1.
pub fn cumulative_returns(returns: &SeriesTable, start_point: f64) -> SeriesTable {
    returns.map_columns(|values| compound(values, start_point))
}

/// Running product of `(1 + r)`, minus one, plus `start_point`.
pub(crate) fn compound(returns: &[f64], start_point: f64) -> Vec<f64> {
    returns
        .iter()
        .scan(1.0, |growth, period_return| {
            *growth *= 1.0 + period_return;
            Some(*growth - 1.0 + start_point)
        })
        .collect()
}

/// Length of the table index in years: whole elapsed days divided by 365.25.
pub fn years_elapsed(returns: &SeriesTable) -> f64 {
    let days = returns
        .time_end()
        .signed_duration_since(returns.time_start())
        .num_days();

    days as f64 / DAYS_PER_YEAR_AVERAGE
}
