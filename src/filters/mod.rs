//! Spatial filters over sample grids.
//!
//! - [`median`]: per-channel rank filter with a disk footprint. Borders clip
//!   the neighbourhood to in-bounds samples.
//! - [`convolve`]: odd-sized kernel convolution on an `f32` field. Borders
//!   are zero-padded.
//!
//! The two border policies differ and the difference shows up in the
//! output near the image border.

pub mod convolve;
pub mod median;

pub use convolve::{convolve_zero_pad, Kernel};
pub use median::{
    median_filter, median_filter_channel, DiskFootprint, DEFAULT_MEDIAN_RADIUS,
    MAX_MEDIAN_RADIUS,
};
