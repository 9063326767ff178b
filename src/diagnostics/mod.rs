//! Diagnostics data model returned alongside pipeline artifacts.
//!
//! `PipelineReport` is the entry point: input shape, the parameters in
//! effect, magnitude statistics, histogram bin counts, and per-stage timings.

pub mod pipeline;
pub mod timing;

pub use pipeline::{InputDescriptor, MagnitudeStats, PipelineReport};
pub use timing::{StageTiming, TimingBreakdown};
