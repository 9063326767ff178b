//! Edge pipeline orchestration.
//!
//! - [`params`]: the knobs handed to a run (filter radius, bin count,
//!   threshold, kernels).
//! - `run`: the [`EdgePipeline`] itself and the [`process_path`] entry point
//!   that loads a file first.
//!
//! Data moves between stages as plain grids; no stage touches another's
//! output in place.

pub mod params;
mod run;

pub use params::PipelineParams;
pub use run::{process_path, EdgePipeline, PipelineOutput};
