//! Outcome tallies for `fate histogram`.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

/// Width of the longest bar in table output.
const BAR_WIDTH: usize = 40;

/// Counts of each observed outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<i32, usize>,
    total: usize,
}

/// One row of a histogram report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    /// Outcome value.
    pub value: i32,
    /// Times the outcome was observed.
    pub count: usize,
    /// `count / total`.
    pub frequency: f64,
}

impl Histogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one outcome.
    pub fn record(&mut self, value: i32) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of recorded outcomes.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Observed frequency of `value`, zero when nothing was recorded.
    pub fn frequency(&self, value: i32) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.get(&value).copied().unwrap_or(0) as f64 / self.total as f64
    }

    /// Rows in ascending outcome order.
    pub fn buckets(&self) -> Vec<Bucket> {
        self.counts
            .iter()
            .map(|(&value, &count)| Bucket {
                value,
                count,
                frequency: self.frequency(value),
            })
            .collect()
    }

    /// Renders an aligned text table with proportional bars.
    pub fn to_table(&self) -> String {
        let buckets = self.buckets();
        let peak = buckets.iter().map(|b| b.count).max().unwrap_or(0);
        let width = buckets
            .iter()
            .map(|b| b.value.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        for bucket in &buckets {
            let bar = if peak == 0 {
                0
            } else {
                (bucket.count * BAR_WIDTH).div_ceil(peak)
            };
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "{:>width$} {:>7.3}% {}",
                bucket.value,
                bucket.frequency * 100.0,
                "#".repeat(bar),
                width = width,
            );
        }
        out
    }
}

impl FromIterator<i32> for Histogram {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for value in iter {
            histogram.record(value);
        }
        histogram
    }
}
