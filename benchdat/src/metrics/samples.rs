use crate::metrics::F64;
use crate::size::ObjectSize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of samples, always kept sorted in ascending order.
#[derive(Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Samples {
    values: Vec<F64>,
}

impl Samples {
    /// Creates an empty sample set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sample set from a list of values.
    pub fn from<T: IntoIterator<Item = f64>>(values: T) -> Self {
        let mut values: Vec<_> = values.into_iter().map(F64::new).collect();
        values.sort();
        Self { values }
    }

    /// Creates a sample set of throughputs (bytes per second) from the
    /// elapsed times (in seconds) it took to transfer `size` bytes.
    pub fn throughput<T: IntoIterator<Item = f64>>(
        size: ObjectSize,
        elapsed: T,
    ) -> Self {
        let size = size.bytes() as f64;
        Self::from(elapsed.into_iter().map(|elapsed| size / elapsed))
    }

    /// Returns a new sample set without the smallest and the largest value.
    /// Sets with two or less values become empty.
    pub fn trimmed(&self) -> Self {
        let values = if self.values.len() > 2 {
            self.values[1..self.values.len() - 1].to_vec()
        } else {
            Vec::new()
        };
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the samples in ascending order.
    pub fn values(&self) -> impl Iterator<Item = F64> + '_ {
        self.values.iter().copied()
    }

    pub fn min(&self) -> F64 {
        self.values.first().copied().unwrap_or_else(F64::nan)
    }

    pub fn max(&self) -> F64 {
        self.values.last().copied().unwrap_or_else(F64::nan)
    }

    pub fn mean(&self) -> F64 {
        if self.values.is_empty() {
            return F64::nan();
        }
        let sum = compensated_sum(self.values().map(F64::value));
        F64::new(sum / self.len() as f64)
    }

    /// Sample standard deviation. Empty sets and sets with a single sample
    /// have a `NaN` standard deviation.
    pub fn stddev(&self) -> F64 {
        if self.values.is_empty() {
            return F64::nan();
        }
        let mean = self.mean().value();
        let sum = compensated_sum(self.values().map(|x| {
            let diff = mean - x.value();
            diff * diff
        }));
        // we divide by (count - 1) to have the corrected version of variance
        // - https://en.wikipedia.org/wiki/Standard_deviation#Corrected_sample_standard_deviation
        let variance = sum / (self.len() as f64 - 1.0);
        F64::new(variance.sqrt())
    }

    /// Computes a given percentile (in `[0, 1]`), interpolating linearly
    /// between the two closest ranks. Empty sets have a `NaN` percentile.
    pub fn percentile(&self, percentile: f64) -> F64 {
        assert!((0.0..=1.0).contains(&percentile));

        if self.values.is_empty() {
            return F64::nan();
        }

        let rank = percentile * (self.len() - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        let left = self.values[lower].value();
        let right = self.values[upper].value();

        if lower == upper {
            F64::new(left)
        } else {
            let fraction = rank - lower as f64;
            F64::new(left + (right - left) * fraction)
        }
    }
}

/// Sums `values` keeping track of the low-order bits lost in each addition
/// (Neumaier's variant of Kahan summation).
fn compensated_sum<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, compensation) =
        values.fold((0.0f64, 0.0f64), |(sum, compensation), value| {
            let total = sum + value;
            let lost = if sum.abs() >= value.abs() {
                (sum - total) + value
            } else {
                (value - total) + sum
            };
            (total, compensation + lost)
        });
    sum + compensation
}

impl fmt::Debug for Samples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} min={:.1} max={:.1} avg={:.1} p50={:.1} p90={:.1} p99={:.1}",
            self.len(),
            self.min().value(),
            self.max().value(),
            self.mean().value(),
            self.percentile(0.5).value(),
            self.percentile(0.9).value(),
            self.percentile(0.99).value(),
        )
    }
}

/// Summary of a sample set: mean, standard deviation and the 50th, 90th and
/// 99th percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SampleStats {
    pub mean: F64,
    pub stddev: F64,
    pub p50: F64,
    pub p90: F64,
    pub p99: F64,
}

impl SampleStats {
    pub fn from(samples: &Samples) -> Self {
        Self {
            mean: samples.mean(),
            stddev: samples.stddev(),
            p50: samples.percentile(0.5),
            p90: samples.percentile(0.9),
            p99: samples.percentile(0.99),
        }
    }

    /// Divides each statistic by the same statistic in `baseline`.
    pub fn relative_to(&self, baseline: &Self) -> Self {
        Self {
            mean: self.mean / baseline.mean,
            stddev: self.stddev / baseline.stddev,
            p50: self.p50 / baseline.p50,
            p90: self.p90 / baseline.p90,
            p99: self.p99 / baseline.p99,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted() {
        let samples = Samples::from(vec![3.0, 1.0, 2.0]);
        let values: Vec<_> = samples.values().map(F64::value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(samples.min(), F64::new(1.0));
        assert_eq!(samples.max(), F64::new(3.0));
    }

    #[test]
    fn stats() {
        let samples = Samples::from(vec![10.0, 20.0, 30.0]);
        assert_eq!(samples.mean(), F64::new(20.0));
        assert_eq!(samples.stddev(), F64::new(10.0));

        let samples = Samples::from(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(samples.mean(), F64::new(5.0));
        // sum of squared diffs is 32, divided by 7
        assert!(samples
            .stddev()
            .close_to(F64::new((32.0f64 / 7.0).sqrt()), 1e-12));
    }

    #[test]
    fn percentile() {
        let samples = Samples::from(vec![1.0, 2.0, 3.0, 4.0]);
        // rank 1.5
        assert_eq!(samples.percentile(0.5), F64::new(2.5));
        // rank 2.7
        assert!(samples.percentile(0.9).close_to(F64::new(3.7), 1e-12));
        // rank 2.97
        assert!(samples.percentile(0.99).close_to(F64::new(3.97), 1e-12));

        let samples = Samples::from(vec![15.0, 20.0, 35.0, 40.0, 50.0]);
        assert_eq!(samples.percentile(0.5), F64::new(35.0));
        assert_eq!(samples.percentile(0.25), F64::new(20.0));
        assert!(samples.percentile(0.9).close_to(F64::new(46.0), 1e-12));
    }

    #[test]
    fn empty() {
        let samples = Samples::new();
        assert!(samples.is_empty());
        assert!(samples.min().is_nan());
        assert!(samples.max().is_nan());
        assert!(samples.mean().is_nan());
        assert!(samples.stddev().is_nan());
        assert!(samples.percentile(0.5).is_nan());

        let stats = SampleStats::from(&samples);
        assert!(stats.mean.is_nan());
        assert!(stats.stddev.is_nan());
        assert!(stats.p50.is_nan());
        assert!(stats.p99.is_nan());
    }

    #[test]
    fn compensated() {
        // a naive left-to-right sum loses the 1.0 next to 1e16
        assert_eq!(compensated_sum(vec![1e16, 1.0, -1e16].into_iter()), 1.0);
        assert_eq!(compensated_sum(vec![0.1; 10].into_iter()), 1.0);
        assert_eq!(compensated_sum(std::iter::empty()), 0.0);

        let samples = Samples::from(vec![1e16, 1.0, -1e16]);
        assert_eq!(samples.mean(), F64::new(1.0 / 3.0));
    }

    #[test]
    fn single_value() {
        let samples = Samples::from(vec![5120.0]);
        assert_eq!(samples.mean(), F64::new(5120.0));
        assert!(samples.stddev().is_nan());
        assert_eq!(samples.percentile(0.5), F64::new(5120.0));
        assert_eq!(samples.percentile(0.9), F64::new(5120.0));
        assert_eq!(samples.percentile(0.99), F64::new(5120.0));
    }

    #[test]
    fn trim_boundaries() {
        assert!(Samples::new().trimmed().is_empty());
        assert!(Samples::from(vec![1.0]).trimmed().is_empty());
        assert!(Samples::from(vec![1.0, 2.0]).trimmed().is_empty());
        let trimmed = Samples::from(vec![3.0, 1.0, 2.0]).trimmed();
        assert_eq!(trimmed.len(), 1);
        assert_eq!(trimmed.min(), F64::new(2.0));
    }

    #[test]
    fn throughput() {
        let size = ObjectSize::new(10240);
        let samples = Samples::throughput(size, vec![1.0, 2.0, 3.0]);
        let values: Vec<_> = samples.values().map(F64::value).collect();
        assert_eq!(values, vec![10240.0 / 3.0, 5120.0, 10240.0]);

        let trimmed = samples.trimmed();
        let stats = SampleStats::from(&trimmed);
        assert_eq!(stats.mean, F64::new(5120.0));
        assert!(stats.stddev.is_nan());
        assert_eq!(stats.p50, F64::new(5120.0));
        assert_eq!(stats.p90, F64::new(5120.0));
        assert_eq!(stats.p99, F64::new(5120.0));
    }

    #[test]
    fn relative_to() {
        let stats = SampleStats::from(&Samples::from(vec![10.0, 20.0, 30.0]));
        let baseline = SampleStats::from(&Samples::from(vec![5.0, 10.0, 15.0]));
        let relative = stats.relative_to(&baseline);
        assert_eq!(relative.mean, F64::new(2.0));
        assert_eq!(relative.stddev, F64::new(2.0));
        assert_eq!(relative.p50, F64::new(2.0));

        let itself = stats.relative_to(&stats);
        assert_eq!(itself.mean, F64::new(1.0));
        assert_eq!(itself.stddev, F64::new(1.0));
        assert_eq!(itself.p90, F64::new(1.0));
        assert_eq!(itself.p99, F64::new(1.0));
    }
}
