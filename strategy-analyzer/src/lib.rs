#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]
#![allow(clippy::type_complexity, type_alias_bounds)]

//! # Strategy Analyzer
//! Performance statistics for periodic strategy return series.
//!
//! Given a table of fractional period returns (one column per strategy, sharing a timestamp
//! index), it:
//! * **Infers the sampling frequency** of an irregular index (eg/ trading days with weekend and
//!   holiday gaps) using the modal gap between timestamps.
//! * **Annualises** per-period statistics using a [`CalendarConvention`] (252 trading days or
//!   365 calendar days per year).
//! * **Measures** cumulative growth, annualised return & volatility, drawdown, Sharpe, Sortino &
//!   Calmar ratios, and time in market.
//!
//! Numerically undefined results (zero standard deviation, zero drawdown, non-positive cumulative
//! value fed into a logarithm) are not errors: they surface as `f64` infinity or NaN.
//!
//! ## Getting Started
//! ```
//! use chrono::{DateTime, Days, Utc};
//! use strategy_analyzer::{
//!     analyzer::StrategyAnalyzer,
//!     config::AnalyzerConfig,
//!     statistic::{summary::Metric, time::Frequency},
//! };
//!
//! let start = DateTime::<Utc>::from_timestamp(1_704_067_200, 0).unwrap();
//! let index = (0..30)
//!     .map(|day| start.checked_add_days(Days::new(day)).unwrap())
//!     .collect::<Vec<_>>();
//! let returns = (0..30)
//!     .map(|day| if day % 3 == 0 { -0.01 } else { 0.008 })
//!     .collect::<Vec<_>>();
//!
//! let analyzer = StrategyAnalyzer::from_series(AnalyzerConfig::default(), index, returns).unwrap();
//! assert_eq!(analyzer.frequency(), Frequency::Day);
//!
//! let summary = analyzer.summary().unwrap();
//! let max_drawdown = summary.get(Metric::MaxDrawdown, "Strategy").unwrap();
//! assert!(max_drawdown < 0.0);
//! ```
//!
//! [`CalendarConvention`]: statistic::time::CalendarConvention

use fnv::FnvBuildHasher;
use indexmap::IndexMap;

/// [`StrategyAnalyzer`](analyzer::StrategyAnalyzer) façade that resolves a frequency once and
/// produces [`SummaryStatistics`](statistic::summary::SummaryStatistics).
pub mod analyzer;

/// Serde-backed [`AnalyzerConfig`](config::AnalyzerConfig).
pub mod config;

/// Top-level errors.
pub mod error;

/// Default `tracing` subscriber initialisers.
pub mod logging;

/// [`SeriesTable`](series::SeriesTable) container of named return columns sharing one index.
pub mod series;

/// Frequency inference, annualisation, and performance metrics.
pub mod statistic;

/// Insertion ordered map using the `fnv` hasher.
pub type FnvIndexMap<K, V> = IndexMap<K, V, FnvBuildHasher>;
