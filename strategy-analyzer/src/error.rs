use crate::statistic::error::StatisticError;
use smol_str::SmolStr;
use thiserror::Error;

/// All errors generated by `strategy-analyzer`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    #[error("statistic: {0}")]
    Statistic(#[from] StatisticError),

    #[error("series: {0}")]
    Series(#[from] SeriesError),

    #[error("config: {0}")]
    Config(String),
}

/// Invariant violations detected when building a [`SeriesTable`](crate::series::SeriesTable).
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum SeriesError {
    #[error("insufficient data: {0} timestamps provided, at least 2 required")]
    InsufficientData(usize),

    #[error("timestamps must be strictly increasing, violated at position {position}")]
    IndexNotIncreasing { position: usize },

    #[error("at least one column is required")]
    NoColumns,

    #[error("column {column} has {actual} values, but the index has {expected} timestamps")]
    ColumnLength {
        column: SmolStr,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column name: {0}")]
    DuplicateColumn(SmolStr),
}
