//! Numeric building blocks shared by the analysis components.

// =============================================================================
// RUNNING STATISTICS
// =============================================================================
// Welford's online algorithm for computing mean and variance in a single pass.

/// Single-pass accumulator for count, mean, variance and range.
#[derive(Debug, Clone)]
pub(crate) struct RunningStats {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    min: f64,
    max: f64,
}

impl RunningStats {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub(crate) fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Mean, or NaN when no values were added.
    pub(crate) fn mean(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.mean }
    }

    /// Sample variance (N-1 denominator); NaN for fewer than two values.
    pub(crate) fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub(crate) fn sample_std(&self) -> f64 {
        self.sample_variance().sqrt()
    }

    pub(crate) fn min(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.min }
    }

    pub(crate) fn max(&self) -> f64 {
        if self.count == 0 { f64::NAN } else { self.max }
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// Sort values ascending. Inputs never contain NaN (columns store it as missing).
pub(crate) fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_unstable_by(f64::total_cmp);
    values
}

/// The `p`-th quantile (0..=1) of pre-sorted data, interpolating linearly
/// between the two closest ranks (R-7). NaN for empty input.
pub(crate) fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let j = h.floor() as usize;
    let g = h - h.floor();

    if j + 1 >= n {
        return sorted[n - 1];
    }
    let (lo, hi) = (sorted[j], sorted[j + 1]);
    if g == 0.0 || lo == hi {
        return lo;
    }

    // Any point strictly inside a segment with an infinite end is that end
    if lo == f64::NEG_INFINITY {
        return lo;
    }
    if hi == f64::INFINITY {
        return hi;
    }

    let span = hi - lo;
    let value = if span.is_finite() {
        lo + g * span
    } else {
        (1.0 - g) * lo + g * hi
    };
    // Rounding must not carry the result outside its segment
    value.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_stats() {
        let mut stats = RunningStats::new();
        stats.extend([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert_eq!(stats.count(), 8);
        assert!((stats.mean() - 5.0).abs() < 1e-12);
        assert!((stats.sample_variance() - 32.0 / 7.0).abs() < 1e-12);
        assert_eq!(stats.min(), 2.0);
        assert_eq!(stats.max(), 9.0);
    }

    #[test]
    fn test_running_stats_undefined() {
        let empty = RunningStats::new();
        assert!(empty.mean().is_nan());
        assert!(empty.min().is_nan());

        let mut single = RunningStats::new();
        single.add(3.0);
        assert_eq!(single.mean(), 3.0);
        assert!(single.sample_std().is_nan());
    }

    #[test]
    fn test_quantile_interpolates() {
        let data = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile_sorted(&data, 0.0), 10.0);
        assert_eq!(quantile_sorted(&data, 0.25), 17.5);
        assert_eq!(quantile_sorted(&data, 0.5), 25.0);
        assert_eq!(quantile_sorted(&data, 0.75), 32.5);
        assert_eq!(quantile_sorted(&data, 1.0), 40.0);
    }

    #[test]
    fn test_quantile_edge_cases() {
        assert!(quantile_sorted(&[], 0.5).is_nan());
        assert_eq!(quantile_sorted(&[7.0], 0.25), 7.0);
    }

    #[test]
    fn test_quantile_with_infinite_neighbours() {
        let data = sorted(vec![f64::INFINITY, f64::NEG_INFINITY, 1.0, 2.0]);
        let p25 = quantile_sorted(&data, 0.25);
        let p50 = quantile_sorted(&data, 0.5);
        let p75 = quantile_sorted(&data, 0.75);

        assert_eq!(p25, f64::NEG_INFINITY);
        assert_eq!(p50, 1.5);
        assert_eq!(p75, f64::INFINITY);
        assert!(p25 <= p50 && p50 <= p75);

        let both = [f64::NEG_INFINITY, f64::INFINITY];
        assert_eq!(quantile_sorted(&both, 0.5), f64::NEG_INFINITY);
    }

    #[test]
    fn test_quantile_span_overflow() {
        let data = [-f64::MAX, f64::MAX];
        let mid = quantile_sorted(&data, 0.5);
        assert!(mid.is_finite());
        assert_eq!(mid, 0.0);
    }

    #[test]
    fn test_sorted() {
        assert_eq!(sorted(vec![3.0, -1.0, 2.0]), vec![-1.0, 2.0, 3.0]);
    }
}
