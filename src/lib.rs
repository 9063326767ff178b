#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod pipeline;

// Stage-level building blocks, usable on their own.
pub mod config;
pub mod edges;
pub mod filters;
pub mod threshold;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + results.
pub use crate::error::{EdgeError, Result};
pub use crate::pipeline::{process_path, EdgePipeline, PipelineOutput, PipelineParams};

// Report returned with every run.
pub use crate::diagnostics::PipelineReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_mask::prelude::*;
///
/// # fn main() -> edge_mask::Result<()> {
/// let (w, h) = (64usize, 48usize);
/// let rgb = vec![0u8; w * h * 3];
/// let img = ImageBufU8::new(w, h, 3, rgb)?;
///
/// let pipeline = EdgePipeline::new(PipelineParams::default())?;
/// let out = pipeline.run(img.as_view())?;
/// println!("edge pixels={} total_ms={:.3}", out.report.edge_pixels, out.report.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageBufU8, ImageF32, ImageU8};
    pub use crate::{EdgePipeline, PipelineOutput, PipelineParams};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::edges::{edge_gradients, edge_magnitude, grayscale_mean, Grad, KernelSet};
    pub use crate::filters::{convolve_zero_pad, median_filter, DiskFootprint, Kernel};
    pub use crate::threshold::{binarize, Histogram};
}
