use crate::{FnvIndexMap, error::SeriesError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use smol_str::SmolStr;

/// One value per named column, in column order.
pub type ColumnMap<T> = FnvIndexMap<SmolStr, T>;

/// Table of named numeric columns sharing one strictly increasing timestamp index.
///
/// A single series is a one-column table. Every column holds exactly one value per timestamp.
///
/// Values are trusted to be finite: cleaning (eg/ zero-filling missing returns) happens upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesTable {
    index: Vec<DateTime<Utc>>,
    columns: ColumnMap<Vec<f64>>,
}

impl SeriesTable {
    /// Construct a validated [`SeriesTable`].
    ///
    /// Requires at least two strictly increasing timestamps, at least one column, unique column
    /// names, and every column to have one value per timestamp.
    pub fn new<Name, Columns>(
        index: Vec<DateTime<Utc>>,
        columns: Columns,
    ) -> Result<Self, SeriesError>
    where
        Name: Into<SmolStr>,
        Columns: IntoIterator<Item = (Name, Vec<f64>)>,
    {
        if index.len() < 2 {
            return Err(SeriesError::InsufficientData(index.len()));
        }

        if let Some(position) = index
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
            .map(|position| position + 1)
        {
            return Err(SeriesError::IndexNotIncreasing { position });
        }

        let mut validated = ColumnMap::default();
        for (name, values) in columns {
            let name = name.into();

            if values.len() != index.len() {
                return Err(SeriesError::ColumnLength {
                    column: name,
                    expected: index.len(),
                    actual: values.len(),
                });
            }

            if validated.contains_key(&name) {
                return Err(SeriesError::DuplicateColumn(name));
            }

            validated.insert(name, values);
        }

        if validated.is_empty() {
            return Err(SeriesError::NoColumns);
        }

        Ok(Self {
            index,
            columns: validated,
        })
    }

    /// Construct a validated single column [`SeriesTable`].
    pub fn single<Name>(
        name: Name,
        index: Vec<DateTime<Utc>>,
        values: Vec<f64>,
    ) -> Result<Self, SeriesError>
    where
        Name: Into<SmolStr>,
    {
        Self::new(index, [(name, values)])
    }

    /// Construct a derived [`SeriesTable`] whose invariants are upheld by the caller.
    pub(crate) fn from_parts(index: Vec<DateTime<Utc>>, columns: ColumnMap<Vec<f64>>) -> Self {
        debug_assert!(index.len() >= 2);
        debug_assert!(columns.values().all(|values| values.len() == index.len()));
        Self { index, columns }
    }

    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    pub fn columns(&self) -> &ColumnMap<Vec<f64>> {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &SmolStr> {
        self.columns.keys()
    }

    /// Number of rows (timestamps).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always `false` for a validated table, provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn time_start(&self) -> DateTime<Utc> {
        self.index[0]
    }

    pub fn time_end(&self) -> DateTime<Utc> {
        self.index[self.index.len() - 1]
    }

    /// Derive a new table over the same index by transforming each column.
    pub(crate) fn map_columns<F>(&self, transform: F) -> Self
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        Self::from_parts(
            self.index.clone(),
            self.columns
                .iter()
                .map(|(name, values)| (name.clone(), transform(values)))
                .collect(),
        )
    }

    /// Reduce each column to a single value.
    pub(crate) fn reduce_columns<T, F>(&self, reduce: F) -> ColumnMap<T>
    where
        F: Fn(&[f64]) -> T,
    {
        self.columns
            .iter()
            .map(|(name, values)| (name.clone(), reduce(values)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{daily_index, time_base, time_plus_days};

    #[test]
    fn test_series_table_new() {
        struct TestCase {
            index: Vec<DateTime<Utc>>,
            columns: Vec<(&'static str, Vec<f64>)>,
            expected: Result<(), SeriesError>,
        }

        let cases = vec![
            // TC0: valid multi column table
            TestCase {
                index: daily_index(3),
                columns: vec![("a", vec![0.1, 0.2, 0.3]), ("b", vec![0.0, 0.0, 0.0])],
                expected: Ok(()),
            },
            // TC1: single timestamp
            TestCase {
                index: daily_index(1),
                columns: vec![("a", vec![0.1])],
                expected: Err(SeriesError::InsufficientData(1)),
            },
            // TC2: duplicate timestamp
            TestCase {
                index: vec![time_base(), time_plus_days(time_base(), 1), time_plus_days(time_base(), 1)],
                columns: vec![("a", vec![0.1, 0.2, 0.3])],
                expected: Err(SeriesError::IndexNotIncreasing { position: 2 }),
            },
            // TC3: decreasing timestamp
            TestCase {
                index: vec![time_plus_days(time_base(), 1), time_base()],
                columns: vec![("a", vec![0.1, 0.2])],
                expected: Err(SeriesError::IndexNotIncreasing { position: 1 }),
            },
            // TC4: no columns
            TestCase {
                index: daily_index(2),
                columns: vec![],
                expected: Err(SeriesError::NoColumns),
            },
            // TC5: column length mismatch
            TestCase {
                index: daily_index(3),
                columns: vec![("a", vec![0.1, 0.2, 0.3]), ("b", vec![0.1, 0.2])],
                expected: Err(SeriesError::ColumnLength {
                    column: SmolStr::new("b"),
                    expected: 3,
                    actual: 2,
                }),
            },
            // TC6: duplicate column
            TestCase {
                index: daily_index(2),
                columns: vec![("a", vec![0.1, 0.2]), ("a", vec![0.3, 0.4])],
                expected: Err(SeriesError::DuplicateColumn(SmolStr::new("a"))),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = SeriesTable::new(test.index, test.columns).map(|_| ());
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_series_table_accessors() {
        let table = SeriesTable::new(
            daily_index(3),
            [("b", vec![0.1, 0.2, 0.3]), ("a", vec![0.0, -0.1, 0.1])],
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.time_start(), time_base());
        assert_eq!(table.time_end(), time_plus_days(time_base(), 2));
        assert_eq!(table.column("a"), Some([0.0, -0.1, 0.1].as_slice()));
        assert_eq!(table.column("missing"), None);

        // Insertion order is preserved
        let names = table.column_names().map(SmolStr::as_str).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_series_table_reduce_columns_preserves_order() {
        let table = SeriesTable::new(
            daily_index(2),
            [("z", vec![1.0, 2.0]), ("y", vec![3.0, 4.0])],
        )
        .unwrap();

        let sums = table.reduce_columns(|values| values.iter().sum::<f64>());
        assert_eq!(
            sums.into_iter().collect::<Vec<_>>(),
            vec![(SmolStr::new("z"), 3.0), (SmolStr::new("y"), 7.0)]
        );
    }
}
