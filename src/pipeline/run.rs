//! Pipeline driving edge-mask extraction end-to-end.
//!
//! Stages run in order, each to completion, each on a freshly allocated
//! output: median filter (per channel) → grayscale mean → vertical and
//! horizontal convolution → magnitude → histogram → binarize.
//!
//! Typical usage:
//! ```no_run
//! use edge_mask::image::io::load_color_image;
//! use edge_mask::{EdgePipeline, PipelineParams};
//! use std::path::Path;
//!
//! # fn example() -> edge_mask::Result<()> {
//! let image = load_color_image(Path::new("bird.jpg"))?;
//! let pipeline = EdgePipeline::new(PipelineParams::default().with_threshold(40.0))?;
//! let output = pipeline.run(image.as_view())?;
//! println!("edge pixels: {}", output.report.edge_pixels);
//! # Ok(())
//! # }
//! ```
use super::params::PipelineParams;
use crate::diagnostics::{InputDescriptor, MagnitudeStats, PipelineReport, TimingBreakdown};
use crate::edges::{edge_gradients, grayscale_mean, Grad};
use crate::error::Result;
use crate::filters::median_filter;
use crate::image::io::load_color_image;
use crate::image::{GrayImageU8, ImageBufU8, ImageF32, ImageU8};
use crate::threshold::{binarize, Histogram};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Every artifact produced by one run.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Median-filtered input, same shape and channel order as the input.
    pub filtered: ImageBufU8,
    /// Channel mean of `filtered`.
    pub grayscale: ImageF32,
    /// Gradients and edge magnitude of `grayscale`.
    pub grad: Grad,
    /// Distribution of `grad.mag`.
    pub histogram: Histogram,
    /// `grad.mag` binarized at the configured threshold.
    pub mask: GrayImageU8,
    pub report: PipelineReport,
}

impl PipelineOutput {
    pub fn magnitude(&self) -> &ImageF32 {
        &self.grad.mag
    }
}

/// Edge pipeline holding validated parameters. Runs share no state.
#[derive(Clone, Debug)]
pub struct EdgePipeline {
    params: PipelineParams,
}

impl EdgePipeline {
    /// Create a pipeline, rejecting out-of-range parameters up front.
    pub fn new(params: PipelineParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    /// Run every stage on an in-memory image.
    pub fn run(&self, image: ImageU8<'_>) -> Result<PipelineOutput> {
        image.validate()?;
        let total_start = Instant::now();
        let params = &self.params;
        let mut timings = TimingBreakdown::default();
        let input = InputDescriptor {
            width: image.w,
            height: image.h,
            channels: image.channels,
        };
        debug!(
            "EdgePipeline::run input={}x{}x{}",
            input.width, input.height, input.channels
        );

        let filtered = timings.time("median", || median_filter(image, params.median_radius))?;
        let grayscale = timings.time("grayscale", || grayscale_mean(filtered.as_view()))?;
        let grad = timings.time("gradients", || edge_gradients(&grayscale, &params.kernels));
        let histogram = timings.time("histogram", || {
            Histogram::from_field(&grad.mag, params.histogram_bins)
        })?;
        let mask = timings.time("binarize", || binarize(&grad.mag, params.threshold))?;

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let edge_pixels = mask.count_nonzero();
        let pixel_count = (input.width * input.height) as f32;
        let report = PipelineReport {
            input,
            median_radius: params.median_radius,
            threshold: params.threshold,
            magnitude: MagnitudeStats::from_field(&grad.mag),
            histogram: histogram.clone(),
            edge_pixels,
            edge_fraction: edge_pixels as f32 / pixel_count,
            timings,
        };
        info!(
            "edge mask {}x{}: {} edge pixels (threshold {}) in {:.3} ms",
            input.width, input.height, edge_pixels, params.threshold, report.timings.total_ms
        );

        Ok(PipelineOutput {
            filtered,
            grayscale,
            grad,
            histogram,
            mask,
            report,
        })
    }
}

/// Load `path` and run the pipeline on it.
///
/// A load failure stops here: no numeric stage runs and the typed load error
/// is returned.
pub fn process_path(path: &Path, params: PipelineParams) -> Result<PipelineOutput> {
    let pipeline = EdgePipeline::new(params)?;
    let image = load_color_image(path)?;
    pipeline.run(image.as_view())
}
