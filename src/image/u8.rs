//! 8-bit sample grids: a borrowed interleaved view plus owned color and
//! single-channel buffers.
//!
//! Access outside the grid panics through slice indexing. Border handling
//! is the caller's job.
use super::traits::{ImageView, ImageViewMut};
use crate::error::{EdgeError, Result};

/// Borrowed interleaved 8-bit image of shape `h × w × channels`.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub channels: usize,
    pub stride: usize, // samples between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Single-channel view over a tightly packed buffer.
    pub fn gray(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            channels: 1,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[y * self.stride + x * self.channels + c]
    }

    /// Samples of pixel `(x, y)` across all channels.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &'a [u8] {
        let start = y * self.stride + x * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Reject empty grids and buffers too short for the declared shape.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(EdgeError::MalformedInput(format!(
                "empty image ({}x{})",
                self.w, self.h
            )));
        }
        if self.channels == 0 {
            return Err(EdgeError::MalformedInput(
                "image has no channel dimension".to_string(),
            ));
        }
        if self.stride < self.w * self.channels {
            return Err(EdgeError::MalformedInput(format!(
                "stride {} shorter than row of {} samples",
                self.stride,
                self.w * self.channels
            )));
        }
        let needed = (self.h - 1) * self.stride + self.w * self.channels;
        if self.data.len() < needed {
            return Err(EdgeError::MalformedInput(format!(
                "buffer holds {} samples, shape needs {needed}",
                self.data.len()
            )));
        }
        Ok(())
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        let len = self.w * self.channels;
        (self.stride == len).then_some(&self.data[..len * self.h])
    }
}

/// Owned interleaved 8-bit image, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBufU8 {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl ImageBufU8 {
    /// Wrap raw interleaved samples, checking them against the shape.
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let image = Self {
            width,
            height,
            channels,
            data,
        };
        image.as_view().validate()?;
        if image.data.len() != width * height * channels {
            return Err(EdgeError::MalformedInput(format!(
                "data length ({}) does not match the image size ({})",
                image.data.len(),
                width * height * channels
            )));
        }
        Ok(image)
    }

    /// Interleave equally sized single-channel planes, keeping their order.
    pub fn from_channels(planes: &[GrayImageU8]) -> Result<Self> {
        let first = planes.first().ok_or_else(|| {
            EdgeError::MalformedInput("no channel planes to interleave".to_string())
        })?;
        let (width, height) = (first.width(), first.height());
        if planes
            .iter()
            .any(|p| p.width() != width || p.height() != height)
        {
            return Err(EdgeError::MalformedInput(
                "channel planes differ in size".to_string(),
            ));
        }

        let channels = planes.len();
        let mut data = vec![0u8; width * height * channels];
        for (c, plane) in planes.iter().enumerate() {
            for (dst, &src) in data.iter_mut().skip(c).step_by(channels).zip(plane.data()) {
                *dst = src;
            }
        }
        Self::new(width, height, channels, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            channels: self.channels,
            stride: self.width * self.channels,
            data: &self.data,
        }
    }

    /// Copy channel `c` out into its own plane.
    pub fn channel(&self, c: usize) -> Result<GrayImageU8> {
        if c >= self.channels {
            return Err(EdgeError::out_of_range(
                "channel",
                c,
                "index past the channel count",
            ));
        }
        let data = self
            .data
            .iter()
            .skip(c)
            .step_by(self.channels)
            .copied()
            .collect();
        Ok(GrayImageU8::new(self.width, self.height, data))
    }
}

/// Owned single-channel 8-bit image; the binary mask type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    ///
    /// # Panics
    /// If `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "gray buffer length must match its dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Zero-initialized buffer of size `width × height`.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![0; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.width + x] = v;
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::gray(self.width, self.height, &self.data)
    }

    /// Number of samples that are not zero.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        Some(&mut self.data)
    }
}
