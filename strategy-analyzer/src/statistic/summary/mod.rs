use crate::{
    FnvIndexMap,
    series::{ColumnMap, SeriesTable},
    statistic::{
        error::StatisticError,
        metric::{
            calmar::calmar_ratio, drawdown::max::max_drawdown, rate_of_return::annualized_return,
            sharpe::sharpe_ratio, sortino::sortino_ratio, time_in_market::time_in_market,
            volatility::annualized_volatility_with,
        },
        time::{CalendarConvention, Frequency},
    },
};
use chrono::{DateTime, TimeDelta, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};

pub mod display;

/// Summary statistic reported by [`SummaryStatistics`], displayed by its report label.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, Display,
)]
pub enum Metric {
    /// Annualised, continuously compounded rate of return.
    #[display("IRR")]
    Irr,
    /// Maximum drawdown of the growth-of-one curve.
    #[display("Maxdd")]
    MaxDrawdown,
    /// Fraction of periods with a nonzero return.
    #[display("TimeInMarket")]
    TimeInMarket,
    #[display("Sortino")]
    Sortino,
    #[display("Sharpe")]
    Sharpe,
    #[display("Calmar")]
    Calmar,
    /// Annualised volatility at the summary's Sharpe frequency.
    #[display("Annual Vol")]
    AnnualVolatility,
}

impl Metric {
    /// Every [`Metric`], in report order.
    pub const ALL: [Metric; 7] = [
        Metric::Irr,
        Metric::MaxDrawdown,
        Metric::TimeInMarket,
        Metric::Sortino,
        Metric::Sharpe,
        Metric::Calmar,
        Metric::AnnualVolatility,
    ];

    /// Whether the [`Metric`] is a fraction best presented as a percentage.
    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            Metric::Irr | Metric::MaxDrawdown | Metric::TimeInMarket | Metric::AnnualVolatility
        )
    }
}

/// Summary statistics of a return table: one row per [`Metric`], one value per column.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SummaryStatistics {
    /// First timestamp of the summarised return table.
    pub time_start: DateTime<Utc>,

    /// Last timestamp of the summarised return table.
    pub time_end: DateTime<Utc>,

    /// Sampling [`Frequency`] of the summarised return table.
    pub frequency: Frequency,

    /// [`CalendarConvention`] used to annualise daily statistics.
    pub convention: CalendarConvention,

    /// Metric rows in report order.
    ///
    /// Non-finite values are serialised as strings (eg/ "inf", "NaN"), since JSON numbers cannot
    /// represent them.
    #[serde(serialize_with = "se_metric_rows", deserialize_with = "de_metric_rows")]
    pub rows: FnvIndexMap<Metric, ColumnMap<f64>>,
}

impl SummaryStatistics {
    /// Generate the [`SummaryStatistics`] of a return table sampled at `frequency`.
    ///
    /// Sharpe and Sortino are annualised from `frequency`. Annual volatility is measured at
    /// `sharpe_frequency`, defaulting to `frequency`.
    pub fn generate(
        returns: &SeriesTable,
        frequency: Frequency,
        sharpe_frequency: Option<Frequency>,
        convention: CalendarConvention,
    ) -> Result<Self, StatisticError> {
        let mut rows = FnvIndexMap::default();
        rows.insert(Metric::Irr, annualized_return(returns));
        rows.insert(Metric::MaxDrawdown, max_drawdown(returns));
        rows.insert(Metric::TimeInMarket, time_in_market(returns));
        rows.insert(
            Metric::Sortino,
            sortino_ratio(returns, Some(frequency), convention)?,
        );
        rows.insert(
            Metric::Sharpe,
            sharpe_ratio(returns, Some(frequency), convention)?,
        );
        rows.insert(Metric::Calmar, calmar_ratio(returns));
        rows.insert(
            Metric::AnnualVolatility,
            annualized_volatility_with(returns, frequency, sharpe_frequency, convention)?,
        );

        Ok(Self {
            time_start: returns.time_start(),
            time_end: returns.time_end(),
            frequency,
            convention,
            rows,
        })
    }

    /// Value of a [`Metric`] for the named column.
    pub fn get(&self, metric: Metric, column: &str) -> Option<f64> {
        self.rows
            .get(&metric)
            .and_then(|values| values.get(column))
            .copied()
    }

    /// [`Metric`] rows in report order.
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.rows.keys().copied()
    }

    /// Column names in table order.
    pub fn columns(&self) -> impl Iterator<Item = &SmolStr> {
        self.rows
            .first()
            .into_iter()
            .flat_map(|(_, values)| values.keys())
    }

    /// Duration covered by the summarised return table.
    pub fn duration(&self) -> TimeDelta {
        self.time_end.signed_duration_since(self.time_start)
    }
}

/// Serialisable form of a metric value that preserves infinity and NaN.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
enum MetricValue {
    Finite(f64),
    NonFinite(SmolStr),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::Finite(value)
        } else {
            Self::NonFinite(format_smolstr!("{value}"))
        }
    }
}

impl MetricValue {
    fn into_f64<E>(self) -> Result<f64, E>
    where
        E: serde::de::Error,
    {
        match self {
            Self::Finite(value) => Ok(value),
            Self::NonFinite(text) => text.parse::<f64>().map_err(E::custom),
        }
    }
}

/// Serialize metric rows, writing non-finite values as strings.
fn se_metric_rows<S>(
    rows: &FnvIndexMap<Metric, ColumnMap<f64>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    rows.iter()
        .map(|(metric, values)| {
            let values = values
                .iter()
                .map(|(column, value)| (column.clone(), MetricValue::from(*value)))
                .collect::<ColumnMap<_>>();
            (*metric, values)
        })
        .collect::<FnvIndexMap<_, _>>()
        .serialize(serializer)
}

/// Deserialize metric rows written by [`se_metric_rows`].
fn de_metric_rows<'de, D>(
    deserializer: D,
) -> Result<FnvIndexMap<Metric, ColumnMap<f64>>, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    let rows = FnvIndexMap::<Metric, ColumnMap<MetricValue>>::deserialize(deserializer)?;

    rows.into_iter()
        .map(|(metric, values)| {
            values
                .into_iter()
                .map(|(column, value)| value.into_f64().map(|value| (column, value)))
                .collect::<Result<ColumnMap<f64>, D::Error>>()
                .map(|values| (metric, values))
        })
        .collect()
}
