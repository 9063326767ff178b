//! Directional gradients and their Euclidean magnitude.
//!
//! - Convolves the grayscale field with a vertical and a horizontal 3×3
//!   derivative kernel under zero padding.
//! - Outputs per-pixel `gx`, `gy`, and `mag = sqrt(gx^2 + gy^2)`.
//!
//! Because the border is zero-padded, a flat field still produces a response
//! along the outermost rows and columns.
//!
//! Complexity: O(W·H·K²) per kernel; memory: three float buffers.
use crate::error::Result;
use crate::filters::{convolve_zero_pad, Kernel};
use crate::image::{ImageF32, ImageU8};
use log::debug;

use super::gray::grayscale_mean;

/// Responds to horizontal edges (intensity change along y).
pub const VERTICAL_KERNEL: [[i32; 3]; 3] = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Responds to vertical edges (intensity change along x).
pub const HORIZONTAL_KERNEL: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// The pair of derivative kernels applied to the grayscale field.
#[derive(Clone, Debug, PartialEq)]
pub struct KernelSet {
    /// Produces `gy`.
    pub vertical: Kernel,
    /// Produces `gx`.
    pub horizontal: Kernel,
}

impl KernelSet {
    pub fn new(vertical: Kernel, horizontal: Kernel) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl Default for KernelSet {
    fn default() -> Self {
        Self {
            vertical: Kernel::from_odd_rows(VERTICAL_KERNEL),
            horizontal: Kernel::from_odd_rows(HORIZONTAL_KERNEL),
        }
    }
}

/// Per‑pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with the horizontal kernel)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with the vertical kernel)
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
}

/// Combine two gradient fields into their per-pixel Euclidean norm.
pub fn magnitude(gx: &ImageF32, gy: &ImageF32) -> ImageF32 {
    gx.zip_map(gy, |x, y| (x * x + y * y).sqrt())
}

/// Convolve a grayscale field with both kernels and combine the results.
pub fn edge_gradients(gray: &ImageF32, kernels: &KernelSet) -> Grad {
    let gy = convolve_zero_pad(gray, &kernels.vertical);
    let gx = convolve_zero_pad(gray, &kernels.horizontal);
    let mag = magnitude(&gx, &gy);
    debug!("edge_gradients {}x{}", gray.w, gray.h);
    Grad { gx, gy, mag }
}

/// Grayscale reduction followed by the default kernels: the edge magnitude
/// of an 8-bit image.
pub fn edge_magnitude(src: ImageU8<'_>) -> Result<ImageF32> {
    let gray = grayscale_mean(src)?;
    Ok(edge_gradients(&gray, &KernelSet::default()).mag)
}
