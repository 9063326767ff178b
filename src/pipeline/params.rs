//! Parameters handed to the pipeline.
//!
//! The threshold is an external choice: pick it after looking at the
//! magnitude histogram from a previous run. Defaults match the settings the
//! pipeline was first tuned with (disk radius 3, 50 bins, threshold 50).

use crate::edges::KernelSet;
use crate::error::{EdgeError, Result};
use crate::filters::{DEFAULT_MEDIAN_RADIUS, MAX_MEDIAN_RADIUS};
use crate::threshold::{DEFAULT_HISTOGRAM_BINS, DEFAULT_THRESHOLD};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineParams {
    /// Radius of the disk footprint used by the median filter.
    pub median_radius: usize,
    /// Number of equal-width bins in the magnitude histogram (>= 1).
    pub histogram_bins: usize,
    /// Magnitudes strictly above this value become edge pixels.
    pub threshold: f32,
    /// Derivative kernels; not configurable from JSON.
    #[serde(skip)]
    pub kernels: KernelSet,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            median_radius: DEFAULT_MEDIAN_RADIUS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            threshold: DEFAULT_THRESHOLD,
            kernels: KernelSet::default(),
        }
    }
}

impl PipelineParams {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_median_radius(mut self, radius: usize) -> Self {
        self.median_radius = radius;
        self
    }

    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    pub fn with_kernels(mut self, kernels: KernelSet) -> Self {
        self.kernels = kernels;
        self
    }

    /// Reject out-of-range values before any stage runs.
    pub fn validate(&self) -> Result<()> {
        if self.median_radius > MAX_MEDIAN_RADIUS {
            return Err(EdgeError::out_of_range(
                "median_radius",
                self.median_radius,
                "exceeds the largest supported footprint",
            ));
        }
        if self.histogram_bins == 0 {
            return Err(EdgeError::out_of_range(
                "histogram_bins",
                self.histogram_bins,
                "histogram requires at least one bin",
            ));
        }
        if !self.threshold.is_finite() {
            return Err(EdgeError::out_of_range(
                "threshold",
                self.threshold,
                "threshold must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let params = PipelineParams::default();
        assert_eq!(params.median_radius, 3);
        assert_eq!(params.histogram_bins, 50);
        assert_eq!(params.threshold, 50.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let bad = [
            PipelineParams::default().with_histogram_bins(0),
            PipelineParams::default().with_median_radius(MAX_MEDIAN_RADIUS + 1),
            PipelineParams::default().with_threshold(f32::INFINITY),
        ];
        for params in bad {
            assert!(matches!(
                params.validate(),
                Err(EdgeError::ParameterOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params: PipelineParams = serde_json::from_str(r#"{"threshold": 12.5}"#).unwrap();
        assert_eq!(params.threshold, 12.5);
        assert_eq!(params.median_radius, DEFAULT_MEDIAN_RADIUS);
        assert_eq!(params.kernels, KernelSet::default());
    }
}
