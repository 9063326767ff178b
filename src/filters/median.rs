//! Rank-order median filter over a disk-shaped footprint.
//!
//! Each channel is filtered on its own. Neighbourhoods that cross the image
//! border are clipped to the in-bounds samples (no padding), so the output is
//! always one of the input samples. When a clipped neighbourhood holds an
//! even number of samples the upper median is taken.
//!
//! The offset list for a radius is built once by [`DiskFootprint::new`] and
//! reused for every pixel. Selection runs `select_nth_unstable` on a scratch
//! buffer, so one pixel costs O(|footprint|).
use crate::error::{EdgeError, Result};
use crate::image::{GrayImageU8, ImageBufU8, ImageU8, ImageView, ImageViewMut};
use log::debug;
use rayon::prelude::*;

/// Radius used by the pipeline when none is supplied.
pub const DEFAULT_MEDIAN_RADIUS: usize = 3;

/// Largest accepted radius (footprint of roughly 13k samples).
pub const MAX_MEDIAN_RADIUS: usize = 64;

/// Offsets `(dx, dy)` with `dx² + dy² <= r²`, in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiskFootprint {
    radius: usize,
    offsets: Vec<(isize, isize)>,
}

impl DiskFootprint {
    pub fn new(radius: usize) -> Result<Self> {
        if radius > MAX_MEDIAN_RADIUS {
            return Err(EdgeError::out_of_range(
                "median_radius",
                radius,
                "exceeds the largest supported footprint",
            ));
        }
        let r = radius as isize;
        let offsets = (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx * dx + dy * dy <= r * r)
            .collect();
        Ok(Self { radius, offsets })
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Median-filter a single channel of `src` into a fresh plane.
///
/// # Panics
/// If `channel >= src.channels`.
pub fn median_filter_channel(
    src: ImageU8<'_>,
    channel: usize,
    footprint: &DiskFootprint,
) -> GrayImageU8 {
    assert!(channel < src.channels, "channel index out of bounds");
    let (w, h) = (src.w as isize, src.h as isize);
    let mut out = GrayImageU8::zeros(src.w, src.h);
    let mut scratch: Vec<u8> = Vec::with_capacity(footprint.len());

    for (y, dst_row) in out.rows_mut().enumerate() {
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            scratch.clear();
            for &(dx, dy) in footprint.offsets() {
                let (sx, sy) = (x as isize + dx, y as isize + dy);
                if sx < 0 || sy < 0 || sx >= w || sy >= h {
                    continue;
                }
                scratch.push(src.get(sx as usize, sy as usize, channel));
            }
            // The centre offset is always in bounds, so scratch is never empty.
            let mid = scratch.len() / 2;
            let (_, median, _) = scratch.select_nth_unstable(mid);
            *dst_px = *median;
        }
    }
    out
}

/// Median-filter every channel of `src` with a disk of `radius`.
///
/// Channels are processed in parallel and written back in input order. The
/// output has the same shape and sample type as the input.
pub fn median_filter(src: ImageU8<'_>, radius: usize) -> Result<ImageBufU8> {
    src.validate()?;
    let footprint = DiskFootprint::new(radius)?;
    debug!(
        "median_filter {}x{}x{} radius={} footprint={}",
        src.width(),
        src.height(),
        src.channels(),
        radius,
        footprint.len()
    );

    let planes: Vec<GrayImageU8> = (0..src.channels)
        .into_par_iter()
        .map(|c| median_filter_channel(src, c, &footprint))
        .collect();
    ImageBufU8::from_channels(&planes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_footprint_matches_euclidean_radius() {
        assert_eq!(DiskFootprint::new(0).unwrap().offsets(), &[(0, 0)]);
        assert_eq!(DiskFootprint::new(1).unwrap().len(), 5);
        assert_eq!(DiskFootprint::new(2).unwrap().len(), 13);
        let disk3 = DiskFootprint::new(3).unwrap();
        assert_eq!(disk3.len(), 29);
        assert!(disk3.offsets().contains(&(3, 0)));
        assert!(!disk3.offsets().contains(&(3, 1)));
        assert!(!disk3.offsets().contains(&(-3, -3)));
    }

    #[test]
    fn oversized_radius_is_rejected() {
        assert!(matches!(
            DiskFootprint::new(MAX_MEDIAN_RADIUS + 1),
            Err(EdgeError::ParameterOutOfRange { .. })
        ));
    }

    #[test]
    fn removes_isolated_impulse() {
        let mut data = vec![10u8; 7 * 7];
        data[3 * 7 + 3] = 255;
        let img = ImageU8::gray(7, 7, &data);
        let out = median_filter(img, 1).unwrap();
        assert!(out.data().iter().all(|&v| v == 10));
    }

    #[test]
    fn border_neighbourhoods_are_clipped_not_padded() {
        // A zero-padding filter would pull the corner towards 0.
        let data = vec![200u8; 5 * 5];
        let img = ImageU8::gray(5, 5, &data);
        let out = median_filter(img, 2).unwrap();
        assert!(out.data().iter().all(|&v| v == 200));
    }

    #[test]
    fn even_clipped_count_takes_upper_median() {
        // On a 2x1 image every radius-1 neighbourhood clips to [1, 9].
        let data = [1u8, 9];
        let img = ImageU8::gray(2, 1, &data);
        let out = median_filter(img, 1).unwrap();
        assert_eq!(out.data(), &[9, 9]);
    }

    #[test]
    fn preserves_shape_and_channel_order() {
        let (w, h) = (6, 4);
        let mut data = Vec::with_capacity(w * h * 3);
        for _ in 0..w * h {
            data.extend_from_slice(&[10, 20, 30]);
        }
        let src = ImageBufU8::new(w, h, 3, data).unwrap();
        let out = median_filter(src.as_view(), DEFAULT_MEDIAN_RADIUS).unwrap();
        assert_eq!((out.width(), out.height(), out.channels()), (w, h, 3));
        assert_eq!(out, src);
    }

    #[test]
    fn empty_input_is_malformed() {
        let img = ImageU8::gray(0, 0, &[]);
        assert!(matches!(
            median_filter(img, 1),
            Err(EdgeError::MalformedInput(_))
        ));
    }
}
