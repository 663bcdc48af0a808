/// Statistical algorithms for analysing datasets.
pub mod algorithm;

/// All errors generated in the `statistic` module.
pub mod error;

/// Sampling frequency inference from an irregular timestamp index.
pub mod frequency;

/// Financial metrics and the means to annualise them under a
/// [`CalendarConvention`](time::CalendarConvention).
pub mod metric;

/// Re-bucketing of return series to a coarser [`Frequency`](time::Frequency).
pub mod resample;

/// Statistical summaries of return tables.
///
/// For example, `SummaryStatistics` and its terminal display.
pub mod summary;

/// TimeInterval definitions used for financial calculations.
///
/// For example, `CalendarConvention::TradingDays`, `Frequency::Week`, etc.
pub mod time;
