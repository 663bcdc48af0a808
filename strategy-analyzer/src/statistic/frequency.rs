use crate::{
    FnvIndexMap,
    statistic::{error::StatisticError, time::Frequency},
};
use chrono::{DateTime, TimeDelta, Utc};
use itertools::Itertools;
use std::hash::Hash;
use tracing::{debug, warn};

/// Default minimum fraction of gaps the modal gap must account for.
pub const DEFAULT_MINIMUM_MODE_FRACTION: f64 = 0.6;

/// Infer the dominant sampling interval of a timestamp index.
///
/// Market return series are mostly spaced one day apart, with occasional 2-4 day gaps for
/// weekends and holidays. The modal gap (in whole days) between consecutive sorted timestamps is
/// returned, provided it accounts for at least `minimum_mode_fraction` of all gaps. Ties resolve to
/// the gap seen first.
///
/// Fails with [`StatisticError::AmbiguousFrequency`] when no gap is dominant, and
/// [`StatisticError::InsufficientData`] for fewer than two timestamps.
pub fn infer_frequency(
    timestamps: &[DateTime<Utc>],
    minimum_mode_fraction: f64,
) -> Result<TimeDelta, StatisticError> {
    let gaps = gap_days(timestamps)?;
    let mode_days = dominant(gaps, minimum_mode_fraction, |days| *days)?;
    Ok(TimeDelta::days(mode_days))
}

impl Frequency {
    /// Infer the [`Frequency`] of a timestamp index.
    ///
    /// Unlike [`infer_frequency`], each gap is first classified via [`Frequency::from_gap_days`],
    /// so calendar month (28-31 day) and calendar year (365-366 day) gaps count towards the same
    /// mode. Gaps that match no [`Frequency`] are counted by their length in days, and fail with
    /// [`StatisticError::UnsupportedFrequency`] if they turn out to be the dominant gap.
    pub fn infer(
        timestamps: &[DateTime<Utc>],
        minimum_mode_fraction: f64,
    ) -> Result<Frequency, StatisticError> {
        let gaps = gap_days(timestamps)?;

        let classified = gaps
            .iter()
            .map(|days| Frequency::from_gap_days(*days).ok_or(*days));

        match dominant(classified, minimum_mode_fraction, |class| match class {
            Ok(frequency) => frequency.interval_days(),
            Err(days) => *days,
        })? {
            Ok(frequency) => Ok(frequency),
            Err(days) => Err(StatisticError::UnsupportedFrequency(TimeDelta::days(days))),
        }
    }

    /// Representative gap in days, used when reporting an ambiguous mode.
    fn interval_days(&self) -> i64 {
        match self {
            Frequency::Day => 1,
            Frequency::Week => 7,
            Frequency::Month => 30,
            Frequency::Year => 365,
        }
    }
}

/// Whole day gaps between consecutive sorted timestamps.
fn gap_days(timestamps: &[DateTime<Utc>]) -> Result<Vec<i64>, StatisticError> {
    if timestamps.len() < 2 {
        return Err(StatisticError::InsufficientData(timestamps.len()));
    }

    let mut sorted = timestamps.to_vec();
    sorted.sort_unstable();

    Ok(sorted
        .iter()
        .tuple_windows()
        .map(|(prev, next)| next.signed_duration_since(*prev).num_days())
        .collect())
}

/// Determine the most common value, failing if it accounts for less than `minimum_mode_fraction`
/// of all values.
fn dominant<T, Iter, F>(
    values: Iter,
    minimum_mode_fraction: f64,
    as_days: F,
) -> Result<T, StatisticError>
where
    T: Copy + Eq + Hash + std::fmt::Debug,
    Iter: IntoIterator<Item = T>,
    F: Fn(&T) -> i64,
{
    let mut counts = FnvIndexMap::<T, usize>::default();
    let mut total = 0_usize;
    for value in values {
        *counts.entry(value).or_default() += 1;
        total += 1;
    }

    // Only a strictly greater count displaces the current mode, so ties keep the first seen value
    let (mode, count) = counts
        .iter()
        .fold(None, |best: Option<(T, usize)>, (value, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((*value, *count)),
        })
        .ok_or(StatisticError::InsufficientData(1))?;

    let fraction = count as f64 / total as f64;

    debug!(
        gaps = total,
        distinct = counts.len(),
        ?mode,
        fraction,
        "determined modal timestamp gap"
    );

    if fraction < minimum_mode_fraction {
        let mode_days = as_days(&mode);
        warn!(
            mode_days,
            fraction, minimum_mode_fraction, "no dominant timestamp gap"
        );
        return Err(StatisticError::AmbiguousFrequency {
            mode_days,
            fraction,
            minimum: minimum_mode_fraction,
        });
    }

    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{time_base, time_plus_days};

    fn index_from_offsets(offsets: &[u64]) -> Vec<DateTime<Utc>> {
        offsets
            .iter()
            .map(|offset| time_plus_days(time_base(), *offset))
            .collect()
    }

    #[test]
    fn test_infer_frequency() {
        struct TestCase {
            input: Vec<DateTime<Utc>>,
            expected: Result<TimeDelta, StatisticError>,
        }

        let cases = vec![
            // TC0: consecutive days
            TestCase {
                input: index_from_offsets(&[0, 1, 2, 3, 4, 5]),
                expected: Ok(TimeDelta::days(1)),
            },
            // TC1: 10 daily timestamps with one 3 day weekend gap
            TestCase {
                input: index_from_offsets(&[0, 1, 2, 3, 4, 7, 8, 9, 10, 11]),
                expected: Ok(TimeDelta::days(1)),
            },
            // TC2: weekly
            TestCase {
                input: index_from_offsets(&[0, 7, 14, 21, 28]),
                expected: Ok(TimeDelta::days(7)),
            },
            // TC3: trading days over two weeks, 8/10 gaps are 1 day
            TestCase {
                input: index_from_offsets(&[0, 1, 2, 3, 4, 7, 8, 9, 10, 11, 14]),
                expected: Ok(TimeDelta::days(1)),
            },
            // TC4: unsorted input is sorted before inference
            TestCase {
                input: index_from_offsets(&[3, 0, 2, 1, 4]),
                expected: Ok(TimeDelta::days(1)),
            },
            // TC5: no majority gap, gaps = [1, 2, 3, 1, 2, 3]
            TestCase {
                input: index_from_offsets(&[0, 1, 3, 6, 7, 9, 12]),
                expected: Err(StatisticError::AmbiguousFrequency {
                    mode_days: 1,
                    fraction: 2.0 / 6.0,
                    minimum: DEFAULT_MINIMUM_MODE_FRACTION,
                }),
            },
            // TC6: non-standard gap is still returned if dominant
            TestCase {
                input: index_from_offsets(&[0, 3, 6, 9]),
                expected: Ok(TimeDelta::days(3)),
            },
            // TC7: single timestamp
            TestCase {
                input: index_from_offsets(&[0]),
                expected: Err(StatisticError::InsufficientData(1)),
            },
            // TC8: empty
            TestCase {
                input: vec![],
                expected: Err(StatisticError::InsufficientData(0)),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = infer_frequency(&test.input, DEFAULT_MINIMUM_MODE_FRACTION);
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_infer_frequency_exact_minimum_fraction_is_accepted() {
        // gaps = [1, 1, 1, 2, 2], mode fraction = 0.6
        let input = index_from_offsets(&[0, 1, 2, 3, 5, 7]);
        assert_eq!(infer_frequency(&input, 0.6), Ok(TimeDelta::days(1)));
        assert!(matches!(
            infer_frequency(&input, 0.61),
            Err(StatisticError::AmbiguousFrequency { mode_days: 1, .. })
        ));
    }

    #[test]
    fn test_infer_frequency_truncates_partial_days() {
        let base = time_base();
        let input = vec![
            base,
            base + TimeDelta::hours(25),
            base + TimeDelta::hours(49),
            base + TimeDelta::hours(73),
        ];

        assert_eq!(
            infer_frequency(&input, DEFAULT_MINIMUM_MODE_FRACTION),
            Ok(TimeDelta::days(1))
        );
    }

    #[test]
    fn test_frequency_infer() {
        struct TestCase {
            input: Vec<DateTime<Utc>>,
            expected: Result<Frequency, StatisticError>,
        }

        // Month starts through 2024: gaps of 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31
        let month_starts = [
            0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366,
        ];

        let cases = vec![
            // TC0: trading days
            TestCase {
                input: index_from_offsets(&[0, 1, 2, 3, 4, 7, 8, 9, 10, 11]),
                expected: Ok(Frequency::Day),
            },
            // TC1: weekly
            TestCase {
                input: index_from_offsets(&[0, 7, 14, 21]),
                expected: Ok(Frequency::Week),
            },
            // TC2: calendar months of varying length
            TestCase {
                input: index_from_offsets(&month_starts),
                expected: Ok(Frequency::Month),
            },
            // TC3: calendar years, including leap year
            TestCase {
                input: index_from_offsets(&[0, 366, 731, 1096]),
                expected: Ok(Frequency::Year),
            },
            // TC4: dominant but unsupported gap
            TestCase {
                input: index_from_offsets(&[0, 3, 6, 9]),
                expected: Err(StatisticError::UnsupportedFrequency(TimeDelta::days(3))),
            },
            // TC5: ambiguous mixture of daily and weekly gaps
            TestCase {
                input: index_from_offsets(&[0, 1, 8, 9, 16]),
                expected: Err(StatisticError::AmbiguousFrequency {
                    mode_days: 1,
                    fraction: 0.5,
                    minimum: DEFAULT_MINIMUM_MODE_FRACTION,
                }),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = Frequency::infer(&test.input, DEFAULT_MINIMUM_MODE_FRACTION);
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_raw_monthly_gaps_are_ambiguous() {
        // 31 day gaps only account for 7/12 of calendar month gaps
        let month_starts = [
            0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366,
        ];
        let input = index_from_offsets(&month_starts);

        assert!(matches!(
            infer_frequency(&input, DEFAULT_MINIMUM_MODE_FRACTION),
            Err(StatisticError::AmbiguousFrequency { mode_days: 31, .. })
        ));
    }
}
