//! I/O helpers for color input, grayscale output, and JSON.
//!
//! - `load_color_image`: read a PNG/JPEG/etc. into an owned 3-channel buffer.
//! - `save_gray_u8`: write a single-channel 8-bit buffer (e.g. a mask) to disk.
//! - `save_magnitude_preview`: write an `ImageF32` scaled by its maximum.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GrayImageU8, ImageBufU8, ImageF32};
use crate::error::{EdgeError, Result};
use image::{GrayImage, RgbImage};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB.
///
/// A missing file is reported as [`EdgeError::InputNotFound`]; anything the
/// decoder rejects as [`EdgeError::Decode`].
pub fn load_color_image(path: &Path) -> Result<ImageBufU8> {
    if !path.exists() {
        return Err(EdgeError::InputNotFound(path.to_path_buf()));
    }
    let img: RgbImage = image::open(path)
        .map_err(|source| EdgeError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let (width, height) = (img.width() as usize, img.height() as usize);
    debug!("loaded {} ({width}x{height})", path.display());
    ImageBufU8::new(width, height, 3, img.into_raw())
}

/// Save an 8-bit grayscale buffer as a single-channel raster file.
pub fn save_gray_u8(buffer: &GrayImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| EdgeError::MalformedInput("gray buffer does not match its size".to_string()))?;
    image.save(path).map_err(|source| EdgeError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a non-negative float field to a grayscale PNG, scaling its maximum
/// to 255. An all-zero field is written black.
pub fn save_magnitude_preview(field: &ImageF32, path: &Path) -> Result<()> {
    let max = field.min_max().map_or(0.0, |(_, hi)| hi);
    let scale = if max > 0.0 { 255.0 / max } else { 0.0 };
    save_gray_u8(&field.map(|v| v * scale).to_u8_saturating(), path)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
