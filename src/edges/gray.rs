//! Grayscale reduction by unweighted channel averaging.
use crate::error::Result;
use crate::image::{ImageF32, ImageU8, ImageViewMut};

/// Average the channels of every pixel into an `f32` field.
///
/// A single-channel input has no channel axis to average over and takes the
/// pass-through branch: samples are widened to `f32` unchanged.
pub fn grayscale_mean(src: ImageU8<'_>) -> Result<ImageF32> {
    src.validate()?;
    let mut out = ImageF32::new(src.w, src.h);
    if src.channels == 1 {
        for (y, dst) in out.rows_mut().enumerate() {
            for (x, px) in dst.iter_mut().enumerate() {
                *px = f32::from(src.get(x, y, 0));
            }
        }
        return Ok(out);
    }

    let channels = src.channels as f32;
    for (y, dst) in out.rows_mut().enumerate() {
        for (x, px) in dst.iter_mut().enumerate() {
            let sum: u32 = src.pixel(x, y).iter().map(|&v| u32::from(v)).sum();
            *px = sum as f32 / channels;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdgeError;
    use crate::image::ImageBufU8;

    #[test]
    fn averages_channels_without_weighting() {
        let img = ImageBufU8::new(2, 1, 3, vec![0, 30, 60, 255, 255, 254]).unwrap();
        let gray = grayscale_mean(img.as_view()).unwrap();
        assert_eq!((gray.w, gray.h), (2, 1));
        assert!((gray.get(0, 0) - 30.0).abs() < 1e-5);
        assert!((gray.get(1, 0) - 764.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn no_integer_truncation() {
        let img = ImageBufU8::new(1, 1, 3, vec![1, 1, 2]).unwrap();
        let gray = grayscale_mean(img.as_view()).unwrap();
        assert!((gray.get(0, 0) - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn single_channel_passes_through() {
        let data = [7u8, 0, 255, 42];
        let gray = grayscale_mean(ImageU8::gray(2, 2, &data)).unwrap();
        assert_eq!(gray.data, vec![7.0, 0.0, 255.0, 42.0]);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            grayscale_mean(ImageU8::gray(0, 4, &[])),
            Err(EdgeError::MalformedInput(_))
        ));
    }
}
