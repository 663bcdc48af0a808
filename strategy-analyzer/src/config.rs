//! Configuration module for the [`StrategyAnalyzer`](crate::analyzer::StrategyAnalyzer).
//!
//! Every field has a default, so partial configurations (eg/ `{"calendar_convention":
//! "calendar_days"}`) deserialise into a complete [`AnalyzerConfig`].

use crate::{
    error::AnalyzerError,
    statistic::{
        frequency::DEFAULT_MINIMUM_MODE_FRACTION,
        time::{CalendarConvention, Frequency},
    },
};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Default column name used for single series analysis.
pub const DEFAULT_STRATEGY_NAME: &str = "Strategy";

/// Top-level configuration for a [`StrategyAnalyzer`](crate::analyzer::StrategyAnalyzer).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Column name given to a single return series.
    pub strategy_name: SmolStr,

    /// Number of days per year used to annualise daily statistics.
    pub calendar_convention: CalendarConvention,

    /// Minimum fraction of timestamp gaps the modal gap must account for, in (0, 1].
    pub minimum_mode_fraction: f64,

    /// Forced sampling [`Frequency`], skipping inference from the index.
    pub frequency: Option<Frequency>,

    /// [`Frequency`] at which volatility is measured. Defaults to the sampling frequency.
    pub sharpe_frequency: Option<Frequency>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            strategy_name: SmolStr::new_static(DEFAULT_STRATEGY_NAME),
            calendar_convention: CalendarConvention::default(),
            minimum_mode_fraction: DEFAULT_MINIMUM_MODE_FRACTION,
            frequency: None,
            sharpe_frequency: None,
        }
    }
}

impl AnalyzerConfig {
    /// Deserialise and validate an [`AnalyzerConfig`] from JSON.
    pub fn from_json(json: &str) -> Result<Self, AnalyzerError> {
        let config = serde_json::from_str::<Self>(json)
            .map_err(|error| AnalyzerError::Config(error.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the [`AnalyzerConfig`] field values.
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if !(self.minimum_mode_fraction > 0.0 && self.minimum_mode_fraction <= 1.0) {
            return Err(AnalyzerError::Config(format!(
                "minimum_mode_fraction must be in (0, 1], found {}",
                self.minimum_mode_fraction
            )));
        }

        if self.strategy_name.is_empty() {
            return Err(AnalyzerError::Config(
                "strategy_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_config_from_json() {
        struct TestCase {
            input: &'static str,
            expected: Result<AnalyzerConfig, ()>,
        }

        let cases = vec![
            // TC0: empty object uses defaults
            TestCase {
                input: "{}",
                expected: Ok(AnalyzerConfig::default()),
            },
            // TC1: partial config
            TestCase {
                input: r#"{"calendar_convention": "calendar_days", "sharpe_frequency": "week"}"#,
                expected: Ok(AnalyzerConfig {
                    calendar_convention: CalendarConvention::CalendarDays,
                    sharpe_frequency: Some(Frequency::Week),
                    ..AnalyzerConfig::default()
                }),
            },
            // TC2: full config
            TestCase {
                input: r#"{
                    "strategy_name": "Momentum",
                    "calendar_convention": "trading_days",
                    "minimum_mode_fraction": 0.75,
                    "frequency": "month",
                    "sharpe_frequency": null
                }"#,
                expected: Ok(AnalyzerConfig {
                    strategy_name: SmolStr::new("Momentum"),
                    calendar_convention: CalendarConvention::TradingDays,
                    minimum_mode_fraction: 0.75,
                    frequency: Some(Frequency::Month),
                    sharpe_frequency: None,
                }),
            },
            // TC3: fraction out of range
            TestCase {
                input: r#"{"minimum_mode_fraction": 1.5}"#,
                expected: Err(()),
            },
            // TC4: zero fraction
            TestCase {
                input: r#"{"minimum_mode_fraction": 0.0}"#,
                expected: Err(()),
            },
            // TC5: unknown frequency
            TestCase {
                input: r#"{"frequency": "fortnight"}"#,
                expected: Err(()),
            },
            // TC6: malformed json
            TestCase {
                input: r#"{"strategy_name": "#,
                expected: Err(()),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = AnalyzerConfig::from_json(test.input);
            match (actual, test.expected) {
                (Ok(actual), Ok(expected)) => assert_eq!(actual, expected, "TC{index} failed"),
                (Err(AnalyzerError::Config(_)), Err(())) => {}
                (actual, expected) => {
                    panic!("TC{index} failed: {actual:?} != {expected:?}")
                }
            }
        }
    }

    #[test]
    fn test_analyzer_config_json_round_trip() {
        let config = AnalyzerConfig {
            strategy_name: SmolStr::new("Carry"),
            calendar_convention: CalendarConvention::CalendarDays,
            minimum_mode_fraction: 0.8,
            frequency: Some(Frequency::Day),
            sharpe_frequency: Some(Frequency::Month),
        };

        let json = serde_json::to_string(&config).unwrap();
        let actual = AnalyzerConfig::from_json(&json).unwrap();

        assert_eq!(actual, config);
    }

    #[test]
    fn test_analyzer_config_validate_empty_name() {
        let config = AnalyzerConfig {
            strategy_name: SmolStr::default(),
            ..AnalyzerConfig::default()
        };

        assert!(matches!(config.validate(), Err(AnalyzerError::Config(_))));
    }
}
