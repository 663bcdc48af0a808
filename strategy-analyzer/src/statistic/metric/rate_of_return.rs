use crate::{
    series::{ColumnMap, SeriesTable},
    statistic::metric::cumulative::{compound, years_elapsed},
};

/// Annualised, continuously compounded rate of return of each column.
///
/// Calculated as `ln(final growth of one) / years elapsed`.
///
/// A final growth at or below zero (total loss or worse) is outside the logarithm's domain, and
/// yields `-inf` or NaN rather than an error.
///
/// See docs: <https://www.investopedia.com/terms/a/annualized-total-return.asp>
pub fn annualized_return(returns: &SeriesTable) -> ColumnMap<f64> {
    let years = years_elapsed(returns);
    returns.reduce_columns(|values| annualize(final_growth(values), years))
}

pub(crate) fn annualize(final_growth: f64, years: f64) -> f64 {
    final_growth.ln() / years
}

pub(crate) fn final_growth(returns: &[f64]) -> f64 {
    compound(returns, 1.0).last().copied().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{daily_table, f64_is_eq};

    #[test]
    fn test_annualized_return() {
        struct TestCase {
            input: Vec<f64>,
            expected: f64,
        }

        let cases = vec![
            // TC0: flat returns
            TestCase {
                input: vec![0.0; 10],
                expected: 0.0,
            },
            // TC1: single doubling over 730 days
            TestCase {
                input: {
                    let mut returns = vec![0.0; 731];
                    returns[1] = 1.0;
                    returns
                },
                expected: 2.0_f64.ln() / (730.0 / 365.25),
            },
            // TC2: halving over 365 days
            TestCase {
                input: {
                    let mut returns = vec![0.0; 366];
                    returns[100] = -0.5;
                    returns
                },
                expected: 0.5_f64.ln() / (365.0 / 365.25),
            },
            // TC3: total loss
            TestCase {
                input: vec![0.1, -1.0, 0.0],
                expected: f64::NEG_INFINITY,
            },
            // TC4: more than total loss
            TestCase {
                input: vec![0.1, -1.5, 0.0],
                expected: f64::NAN,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = annualized_return(&daily_table(test.input));
            let actual = actual["strategy"];
            assert!(
                f64_is_eq(actual, test.expected, 1e-12),
                "TC{index} failed: {actual} != {}",
                test.expected
            );
        }
    }
}
