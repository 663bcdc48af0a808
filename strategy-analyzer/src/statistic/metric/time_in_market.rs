use crate::series::{ColumnMap, SeriesTable};

/// Fraction of periods in `[0, 1]` with a nonzero return, used as a proxy for the fraction of
/// time a position was held.
pub fn time_in_market(returns: &SeriesTable) -> ColumnMap<f64> {
    returns.reduce_columns(|values| {
        let active = values.iter().filter(|value| **value != 0.0).count();
        active as f64 / values.len() as f64
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{daily_table, f64_is_eq};

    #[test]
    fn test_time_in_market() {
        struct TestCase {
            input: Vec<f64>,
            expected: f64,
        }

        let cases = vec![
            // TC0: never in market
            TestCase {
                input: vec![0.0; 8],
                expected: 0.0,
            },
            // TC1: always in market
            TestCase {
                input: vec![0.01, -0.02, 0.005],
                expected: 1.0,
            },
            // TC2: half the periods
            TestCase {
                input: vec![0.0, 0.01, 0.0, -0.01],
                expected: 0.5,
            },
            // TC3: negative zero counts as flat
            TestCase {
                input: vec![-0.0, 0.0, 0.03, 0.0, 0.0],
                expected: 0.2,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = time_in_market(&daily_table(test.input))["strategy"];
            assert!(
                f64_is_eq(actual, test.expected, 1e-12),
                "TC{index} failed: {actual} != {}",
                test.expected
            );
        }
    }
}
