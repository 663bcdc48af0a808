use crate::{
    series::SeriesTable,
    statistic::{error::StatisticError, metric::cumulative::compound, time::Frequency},
};
use chrono::{DateTime, Datelike, DurationRound, Months, NaiveDate, NaiveTime, TimeDelta, Utc};
use itertools::Itertools;
use tracing::debug;

/// Resample each column of period returns to a coarser `target` [`Frequency`].
///
/// Each column is compounded into a growth-of-one curve, the last value in every `target` bucket is
/// taken, and the bucket values are converted back into simple per-bucket returns. The leading
/// bucket has no predecessor, so its (undefined) return is dropped.
///
/// Buckets are labelled by their start:
/// * [`Frequency::Day`]: calendar days.
/// * [`Frequency::Week`]: consecutive 7 day bins anchored at midnight of the first timestamp.
/// * [`Frequency::Month`]: calendar months.
/// * [`Frequency::Year`]: calendar years.
///
/// Empty buckets between the first and last timestamp carry the previous bucket value forward,
/// ie/ they have a zero return.
///
/// Fails with [`StatisticError::InsufficientData`] if fewer than two rows remain.
pub fn resample_returns(
    returns: &SeriesTable,
    target: Frequency,
) -> Result<SeriesTable, StatisticError> {
    let buckets = Buckets::assign(returns.index(), target)?;

    let rows = buckets.labels.len() - 1;
    if rows < 2 {
        return Err(StatisticError::InsufficientData(rows));
    }

    debug!(
        ?target,
        rows_in = returns.len(),
        rows_out = rows,
        "resampled return series"
    );

    let columns = returns
        .columns()
        .iter()
        .map(|(name, values)| {
            let curve = compound(values, 1.0);
            let resampled = buckets
                .last_position
                .iter()
                .map(|position| curve[*position])
                .tuple_windows()
                .map(|(prev, next)| next / prev - 1.0)
                .collect();

            (name.clone(), resampled)
        })
        .collect();

    Ok(SeriesTable::from_parts(
        buckets.labels[1..].to_vec(),
        columns,
    ))
}

/// Contiguous run of target buckets spanning a timestamp index.
#[derive(Debug)]
struct Buckets {
    /// Start of each bucket.
    labels: Vec<DateTime<Utc>>,
    /// Position of the last index row at or before the end of each bucket.
    last_position: Vec<usize>,
}

impl Buckets {
    /// Assign every timestamp of a strictly increasing, non-empty index to a bucket.
    fn assign(index: &[DateTime<Utc>], target: Frequency) -> Result<Self, StatisticError> {
        let first = index.first().ok_or(StatisticError::InsufficientData(0))?;
        let anchor = midnight(*first)?;

        let mut current = bucket_start(target, anchor, *first)?;
        let mut buckets = Self {
            labels: vec![current],
            last_position: vec![0],
        };

        for (position, timestamp) in index.iter().enumerate().skip(1) {
            let start = bucket_start(target, anchor, *timestamp)?;

            while current < start {
                current = next_bucket(target, current)?;
                let carried = buckets.last_position.last().copied().unwrap_or_default();
                buckets.labels.push(current);
                buckets.last_position.push(carried);
            }

            if let Some(last) = buckets.last_position.last_mut() {
                *last = position;
            }
        }

        Ok(buckets)
    }
}

fn midnight(timestamp: DateTime<Utc>) -> Result<DateTime<Utc>, StatisticError> {
    timestamp
        .duration_trunc(TimeDelta::days(1))
        .map_err(|_| StatisticError::TimestampOutOfRange)
}

fn first_of_month(year: i32, month: u32) -> Result<DateTime<Utc>, StatisticError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .ok_or(StatisticError::TimestampOutOfRange)
}

/// Start of the `target` bucket containing `timestamp`.
fn bucket_start(
    target: Frequency,
    anchor: DateTime<Utc>,
    timestamp: DateTime<Utc>,
) -> Result<DateTime<Utc>, StatisticError> {
    match target {
        Frequency::Day => midnight(timestamp),
        Frequency::Week => {
            let weeks = timestamp.signed_duration_since(anchor).num_days() / 7;
            anchor
                .checked_add_signed(TimeDelta::weeks(weeks))
                .ok_or(StatisticError::TimestampOutOfRange)
        }
        Frequency::Month => first_of_month(timestamp.year(), timestamp.month()),
        Frequency::Year => first_of_month(timestamp.year(), 1),
    }
}

/// Start of the `target` bucket following the one starting at `start`.
fn next_bucket(target: Frequency, start: DateTime<Utc>) -> Result<DateTime<Utc>, StatisticError> {
    match target {
        Frequency::Day => start.checked_add_signed(TimeDelta::days(1)),
        Frequency::Week => start.checked_add_signed(TimeDelta::weeks(1)),
        Frequency::Month => start.checked_add_months(Months::new(1)),
        Frequency::Year => start.checked_add_months(Months::new(12)),
    }
    .ok_or(StatisticError::TimestampOutOfRange)
}
