use crate::diagnostics::TimingBreakdown;
use crate::image::ImageF32;
use crate::threshold::Histogram;
use serde::Serialize;

/// Summary of one pipeline run, serializable for tooling.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub input: InputDescriptor,
    pub median_radius: usize,
    pub threshold: f32,
    pub magnitude: MagnitudeStats,
    pub histogram: Histogram,
    /// Samples set to max intensity in the binary mask.
    pub edge_pixels: usize,
    pub edge_fraction: f32,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MagnitudeStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl MagnitudeStats {
    pub fn from_field(field: &ImageF32) -> Self {
        let Some((min, max)) = field.min_max() else {
            return Self::default();
        };
        let sum: f64 = field.data.iter().map(|&v| f64::from(v)).sum();
        Self {
            min,
            max,
            mean: (sum / field.data.len() as f64) as f32,
        }
    }
}
