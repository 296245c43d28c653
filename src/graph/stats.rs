//! Descriptive statistics over degree distributions.
//!
//! Summarizes the shape of an out- or in-degree mapping: mean, median,
//! extremes, and quintile cut points. These are descriptive only - nothing
//! here feeds back into the rank computation.
//!
//! ## Conventions
//!
//! | Statistic | Definition                                                 |
//! |-----------|------------------------------------------------------------|
//! | mean      | arithmetic mean                                            |
//! | median    | middle value; average of the two middles for even counts   |
//! | quintiles | 4 cut points splitting the data into 5 equal-count groups  |
//!
//! Quintiles use the exclusive convention: cut point i/5 sits at position
//! i*(n+1)/5 of the sorted values, linearly interpolated between the
//! neighboring order statistics. With fewer than two observations no cut
//! point is defined and the quintile list is empty. On 2-3 element
//! distributions the edge cut points can extrapolate beyond min/max; that
//! is inherent to the convention, not a bug.

use serde::Serialize;

use crate::types::DegreeMap;

/// Descriptive summary of one degree distribution.
///
/// An empty mapping yields the all-zero summary with an empty quintile
/// list; this is defined behavior, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DegreeSummary {
    /// Number of pages in the distribution.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub max: usize,
    pub min: usize,
    /// The four quintile cut points, empty when count < 2.
    pub quintiles: Vec<f64>,
}

/// Compute the descriptive summary of a degree mapping.
pub fn degree_stats(degrees: &DegreeMap) -> DegreeSummary {
    let mut values: Vec<usize> = degrees.values().copied().collect();
    if values.is_empty() {
        return DegreeSummary::default();
    }
    values.sort_unstable();

    let count = values.len();
    let mean = values.iter().sum::<usize>() as f64 / count as f64;
    let median = if count % 2 == 1 {
        values[count / 2] as f64
    } else {
        (values[count / 2 - 1] + values[count / 2]) as f64 / 2.0
    };

    DegreeSummary {
        count,
        mean,
        median,
        max: values[count - 1],
        min: values[0],
        quintiles: quintiles(&values),
    }
}

/// Exclusive-convention cut points at 1/5 .. 4/5 of the sorted values.
///
/// Cut point i lies between order statistics j-1 and j, where j is
/// i*(n+1)/5 clamped to the observed index range; delta carries the exact
/// interpolation weight in integer arithmetic.
fn quintiles(sorted: &[usize]) -> Vec<f64> {
    let n = sorted.len();
    if n < 2 {
        return Vec::new();
    }

    let m = n + 1;
    (1..5)
        .map(|i| {
            let j = (i * m / 5).clamp(1, n - 1);
            let delta = (i * m) as i64 - (j * 5) as i64;
            (sorted[j - 1] as f64 * (5 - delta) as f64 + sorted[j] as f64 * delta as f64) / 5.0
        })
        .collect()
}
