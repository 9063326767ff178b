//! Edge estimation: grayscale reduction, directional gradients, magnitude.
//!
//! - [`grayscale_mean`] averages color channels into an `f32` field.
//! - [`edge_gradients`] convolves that field with a vertical and a
//!   horizontal derivative kernel (zero-padded borders) and combines them
//!   into a magnitude field.
//! - [`edge_magnitude`] chains both for an 8-bit input.

pub mod grad;
pub mod gray;

/// Per‑pixel gradients, kernels, and magnitude.
pub use grad::{
    edge_gradients, edge_magnitude, magnitude, Grad, KernelSet, HORIZONTAL_KERNEL,
    VERTICAL_KERNEL,
};
pub use gray::grayscale_mean;
