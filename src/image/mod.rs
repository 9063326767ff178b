//! Sample grids: 8-bit interleaved images, single-channel masks, and f32
//! fields, plus load/save helpers.
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
pub use self::u8::{GrayImageU8, ImageBufU8, ImageU8};
