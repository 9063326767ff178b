use crate::error::{EdgeError, Result};
use crate::image::{GrayImageU8, ImageView, ImageViewMut};

/// Value written for samples above the threshold.
pub const MAX_INTENSITY: u8 = 255;

/// Threshold used by the pipeline when none is supplied.
pub const DEFAULT_THRESHOLD: f32 = 50.0;

/// Binarize a single-channel grid: `MAX_INTENSITY` where the sample is
/// strictly greater than `threshold`, 0 elsewhere. A sample equal to the
/// threshold maps to 0.
///
/// Works for `f32` magnitude fields and for 8-bit masks alike; on an
/// existing 0/255 mask with a threshold in `[0, 255)` it is a no-op.
pub fn binarize<I>(src: &I, threshold: f32) -> Result<GrayImageU8>
where
    I: ImageView,
    I::Pixel: Into<f32>,
{
    if !threshold.is_finite() {
        return Err(EdgeError::out_of_range(
            "threshold",
            threshold,
            "threshold must be finite",
        ));
    }
    if src.channels() != 1 {
        return Err(EdgeError::MalformedInput(format!(
            "binarize expects one channel, got {}",
            src.channels()
        )));
    }

    let mut out = GrayImageU8::zeros(src.width(), src.height());
    for (src_row, dst_row) in src.rows().zip(out.rows_mut()) {
        for (&v, dst) in src_row.iter().zip(dst_row.iter_mut()) {
            let v: f32 = v.into();
            *dst = if v > threshold { MAX_INTENSITY } else { 0 };
        }
    }
    Ok(out)
}
