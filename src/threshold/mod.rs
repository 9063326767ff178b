//! Magnitude histograms and scalar thresholding.
//!
//! The threshold is always supplied from outside (a person reading the
//! histogram, or a config file); nothing here derives it automatically.

pub mod binarize;
pub mod histogram;

pub use binarize::{binarize, DEFAULT_THRESHOLD, MAX_INTENSITY};
pub use histogram::{Histogram, DEFAULT_HISTOGRAM_BINS};
