//! Fixed-width histogram of edge weights

use anyhow::Result;

/// Number of bins used for the weight distribution
pub const DEFAULT_BINS: usize = 50;

/// Equal-width bins spanning the observed range of the values.
///
/// Every bin is half-open `[lo, hi)` except the last, which also contains its
/// right edge, so the maximum value is always counted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightHistogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl WeightHistogram {
    /// Bin `values` into `bins` equal-width bins.
    ///
    /// Non-finite values are ignored. A single distinct value is binned over
    /// `[v - 0.5, v + 0.5]`; no values at all gives `[0, 1]` with zero counts.
    pub fn from_weights(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            anyhow::bail!("Histogram needs at least one bin");
        }

        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        let (mut lo, mut hi) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if finite.is_empty() {
            lo = 0.0;
            hi = 1.0;
        } else if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0usize; bins];
        for v in finite {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Self { edges, counts })
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// `bin_count() + 1` monotonically increasing edges
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Number of values that landed in a bin
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(lower edge, upper edge)` of the whole histogram
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// `(lo, hi, count)` for every bin in order
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(w, &count)| (w[0], w[1], count))
    }
}
