use serde::{Deserialize, Serialize};

/// Grouping of [Welford Online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
/// algorithms for calculating running values such as mean and variance in one pass through.
pub mod welford_online {
    /// Calculates the next mean.
    pub fn calculate_mean<T>(mut prev_mean: T, next_value: T, count: T) -> T
    where
        T: Copy + std::ops::Sub<Output = T> + std::ops::Div<Output = T> + std::ops::AddAssign,
    {
        prev_mean += (next_value - prev_mean) / count;
        prev_mean
    }

    /// Calculates the next Welford Online recurrence relation M.
    pub fn calculate_recurrence_relation_m(
        prev_m: f64,
        prev_mean: f64,
        new_value: f64,
        new_mean: f64,
    ) -> f64 {
        prev_m + ((new_value - prev_mean) * (new_value - new_mean))
    }

    /// Calculates the unbiased 'Sample' Variance using Bessel's correction (count - 1), and the
    /// Welford Online recurrence relation M.
    ///
    /// Undefined (NaN) for fewer than two values.
    pub fn calculate_sample_variance(recurrence_relation_m: f64, count: f64) -> f64 {
        match count < 2.0 {
            true => f64::NAN,
            false => recurrence_relation_m / (count - 1.0),
        }
    }
}

/// Running count, mean and sample dispersion of a dataset, accumulated in one pass.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Moments {
    pub count: u64,
    pub mean: f64,
    pub recurrence_relation_m: f64,
}

impl Moments {
    /// Iteratively updates the [`Moments`] with the next value in the dataset.
    pub fn update(&mut self, value: f64) {
        self.count += 1;

        let prev_mean = self.mean;
        self.mean = welford_online::calculate_mean(self.mean, value, self.count as f64);

        self.recurrence_relation_m = welford_online::calculate_recurrence_relation_m(
            self.recurrence_relation_m,
            prev_mean,
            value,
            self.mean,
        );
    }

    /// Mean of the dataset, NaN if it is empty.
    pub fn mean(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            _ => self.mean,
        }
    }

    pub fn sample_variance(&self) -> f64 {
        welford_online::calculate_sample_variance(self.recurrence_relation_m, self.count as f64)
    }

    pub fn sample_std_dev(&self) -> f64 {
        self.sample_variance().sqrt()
    }
}

impl FromIterator<f64> for Moments {
    fn from_iter<Iter>(iter: Iter) -> Self
    where
        Iter: IntoIterator<Item = f64>,
    {
        iter.into_iter().fold(Self::default(), |mut moments, value| {
            moments.update(value);
            moments
        })
    }
}
