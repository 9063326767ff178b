use edge_mask::image::ImageBufU8;

/// Channel values of the dark checkerboard cells; their mean is 32.
pub const DARK_RGB: [u8; 3] = [10, 32, 54];
/// Channel values of the bright checkerboard cells; their mean is 220.
pub const BRIGHT_RGB: [u8; 3] = [200, 220, 240];

/// Generates a high-contrast RGB checkerboard. Cell `(0, 0)` is dark.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> ImageBufU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let px = if sum & 1 == 0 { DARK_RGB } else { BRIGHT_RGB };
            img.extend_from_slice(&px);
        }
    }
    ImageBufU8::new(width, height, 3, img).expect("valid checkerboard")
}

/// Uniform RGB image with isolated full-intensity impulses at `impulses`.
pub fn uniform_with_impulses(
    width: usize,
    height: usize,
    value: u8,
    impulses: &[(usize, usize)],
) -> ImageBufU8 {
    let mut img = vec![value; width * height * 3];
    for &(x, y) in impulses {
        let i = (y * width + x) * 3;
        img[i..i + 3].copy_from_slice(&[255, 255, 255]);
    }
    ImageBufU8::new(width, height, 3, img).expect("valid uniform image")
}
