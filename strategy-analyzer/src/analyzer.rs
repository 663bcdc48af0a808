use crate::{
    config::AnalyzerConfig,
    error::AnalyzerError,
    series::SeriesTable,
    statistic::{summary::SummaryStatistics, time::Frequency},
};
use chrono::{DateTime, Utc};
use tracing::info;

/// Analyses one table of strategy returns under one [`AnalyzerConfig`].
///
/// The sampling [`Frequency`] is resolved once on construction, either forced via
/// [`AnalyzerConfig::frequency`] or inferred from the table index, and used by every
/// annualised statistic thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyAnalyzer {
    config: AnalyzerConfig,
    returns: SeriesTable,
    frequency: Frequency,
}

impl StrategyAnalyzer {
    /// Construct a [`StrategyAnalyzer`] for a validated return table.
    pub fn new(config: AnalyzerConfig, returns: SeriesTable) -> Result<Self, AnalyzerError> {
        config.validate()?;

        let frequency = match config.frequency {
            Some(frequency) => frequency,
            None => Frequency::infer(returns.index(), config.minimum_mode_fraction)?,
        };

        info!(
            ?frequency,
            forced = config.frequency.is_some(),
            convention = ?config.calendar_convention,
            rows = returns.len(),
            columns = returns.columns().len(),
            "StrategyAnalyzer resolved return series frequency"
        );

        Ok(Self {
            config,
            returns,
            frequency,
        })
    }

    /// Construct a [`StrategyAnalyzer`] for a single return series, named
    /// [`AnalyzerConfig::strategy_name`].
    pub fn from_series(
        config: AnalyzerConfig,
        index: Vec<DateTime<Utc>>,
        values: Vec<f64>,
    ) -> Result<Self, AnalyzerError> {
        let returns = SeriesTable::single(config.strategy_name.clone(), index, values)?;
        Self::new(config, returns)
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn returns(&self) -> &SeriesTable {
        &self.returns
    }

    /// Resolved sampling [`Frequency`] of the return table.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Generate the [`SummaryStatistics`] of the return table.
    pub fn summary(&self) -> Result<SummaryStatistics, AnalyzerError> {
        SummaryStatistics::generate(
            &self.returns,
            self.frequency,
            self.config.sharpe_frequency,
            self.config.calendar_convention,
        )
        .map_err(AnalyzerError::from)
    }
}
