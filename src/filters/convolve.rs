//! Direct 2D convolution with zero padding.
//!
//! For every output position `(x, y)` the engine sums
//! `kernel[j][i] * input[y + j - ky][x + i - kx]` over the kernel, where
//! `(kx, ky)` is the kernel's half size. Input samples outside the grid
//! contribute 0. The kernel is applied in correlation orientation (no flip).
//!
//! Output rows are independent and computed in parallel; the input is shared
//! read-only and every worker writes a disjoint row.
use crate::error::{EdgeError, Result};
use crate::image::{ImageF32, ImageView};
use rayon::prelude::*;

/// Odd-sized kernel of `f32` weights in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    width: usize,
    height: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Construct a kernel from row-major weights.
    ///
    /// Both dimensions must be odd and `weights.len()` must equal
    /// `width * height`.
    pub fn new(width: usize, height: usize, weights: Vec<f32>) -> Result<Self> {
        if width % 2 == 0 {
            return Err(EdgeError::out_of_range(
                "kernel_width",
                width,
                "kernel dimensions must be odd",
            ));
        }
        if height % 2 == 0 {
            return Err(EdgeError::out_of_range(
                "kernel_height",
                height,
                "kernel dimensions must be odd",
            ));
        }
        if weights.len() != width * height {
            return Err(EdgeError::out_of_range(
                "kernel_weights",
                weights.len(),
                "weight count does not match kernel size",
            ));
        }
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(EdgeError::out_of_range(
                "kernel_weights",
                "non-finite",
                "weights must be finite",
            ));
        }
        Ok(Self {
            width,
            height,
            weights,
        })
    }

    /// Square kernel from signed integer rows. Integer weights are exact in
    /// `f32` up to 2^24.
    pub fn from_rows<const N: usize>(rows: [[i32; N]; N]) -> Result<Self> {
        let weights = rows.iter().flatten().map(|&v| v as f32).collect();
        Self::new(N, N, weights)
    }

    /// Square kernel from rows whose size is known to be odd.
    pub(crate) fn from_odd_rows<const N: usize>(rows: [[i32; N]; N]) -> Self {
        debug_assert!(N % 2 == 1, "kernel size must be odd");
        Self {
            width: N,
            height: N,
            weights: rows.iter().flatten().map(|&v| v as f32).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Half sizes `(kx, ky)`.
    pub fn half(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> f32 {
        self.weights[j * self.width + i]
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}

/// Convolve a single-channel field with `kernel`, treating samples outside
/// the grid as zero. The output has the shape of the input.
pub fn convolve_zero_pad(input: &ImageF32, kernel: &Kernel) -> ImageF32 {
    let (w, h) = (input.w, input.h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let (kx, ky) = kernel.half();

    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for j in 0..kernel.height() {
                // Rows above or below the grid are all padding.
                let Some(sy) = (y + j).checked_sub(ky).filter(|&sy| sy < h) else {
                    continue;
                };
                let src_row = input.row(sy);
                for i in 0..kernel.width() {
                    let weight = kernel.at(i, j);
                    if weight == 0.0 {
                        continue;
                    }
                    // Output columns whose source column x + i - kx is in bounds.
                    let x_start = kx.saturating_sub(i);
                    let x_end = (w + kx).saturating_sub(i).min(w);
                    for x in x_start..x_end {
                        dst_row[x] += weight * src_row[x + i - kx];
                    }
                }
            }
        });
    out
}
