use crate::error::{EdgeError, Result};
use crate::image::{ImageF32, ImageView};
use log::warn;
use serde::Serialize;

/// Bin count used by the pipeline when none is supplied.
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;

/// Equal-width histogram over the observed value range `[lo, hi]`.
///
/// Every bin is half-open `[edge_i, edge_i+1)` except the last, which also
/// holds `hi`. A degenerate range (all values equal) is widened to
/// `[v - 0.5, v + 0.5]`. The histogram is observational only: nothing in the
/// pipeline reads it back.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    lo: f32,
    hi: f32,
    counts: Vec<u64>,
}

impl Histogram {
    /// Bin the finite entries of `values` into `bins` equal-width bins.
    pub fn from_values(values: &[f32], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(EdgeError::out_of_range(
                "histogram_bins",
                bins,
                "histogram requires at least one bin",
            ));
        }

        let finite = || values.iter().copied().filter(|v| v.is_finite());
        let Some((min, max)) = finite().fold(None, |acc: Option<(f32, f32)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        }) else {
            return Ok(Self {
                lo: 0.0,
                hi: 1.0,
                counts: vec![0; bins],
            });
        };

        let (lo, hi) = if min == max {
            warn!("histogram over a constant field ({min}); widening range by 0.5");
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        let mut counts = vec![0u64; bins];
        let scale = bins as f64 / (f64::from(hi) - f64::from(lo));
        for v in finite() {
            let idx = ((f64::from(v) - f64::from(lo)) * scale) as usize;
            counts[idx.min(bins - 1)] += 1;
        }
        Ok(Self { lo, hi, counts })
    }

    /// Histogram of every sample in a field.
    pub fn from_field(field: &ImageF32, bins: usize) -> Result<Self> {
        match field.as_slice() {
            Some(samples) => Self::from_values(samples, bins),
            None => {
                let samples: Vec<f32> = field.rows().flatten().copied().collect();
                Self::from_values(&samples, bins)
            }
        }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    /// Range covered by the bins.
    pub fn range(&self) -> (f32, f32) {
        (self.lo, self.hi)
    }

    pub fn bin_width(&self) -> f32 {
        (self.hi - self.lo) / self.counts.len() as f32
    }

    /// The `num_bins() + 1` bin boundaries, from `lo` to `hi`.
    pub fn edges(&self) -> Vec<f32> {
        let n = self.counts.len();
        let width = f64::from(self.hi) - f64::from(self.lo);
        (0..=n)
            .map(|i| {
                if i == n {
                    self.hi
                } else {
                    (f64::from(self.lo) + width * i as f64 / n as f64) as f32
                }
            })
            .collect()
    }

    /// Number of binned samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Index of the fullest bin (first one on ties).
    pub fn peak_bin(&self) -> Option<usize> {
        let mut best_idx = None;
        let mut best_val = 0;
        for (i, &val) in self.counts.iter().enumerate() {
            if val > best_val {
                best_val = val;
                best_idx = Some(i);
            }
        }
        best_idx
    }
}
