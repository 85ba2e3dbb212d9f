use rasize_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The source pixel at the floored coordinates, copied verbatim.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<u8, C>,
    u: f64,
    v: f64,
) -> [u8; C] {
    // NOTE: float to int casts saturate, negative coordinates land on 0
    nearest_pixel(image, u.floor() as usize, v.floor() as usize)
}

/// Copy the source pixel at an already mapped index, bounded to the last row and column.
#[inline]
pub(crate) fn nearest_pixel<const C: usize>(
    image: &Image<u8, C>,
    iu: usize,
    iv: usize,
) -> [u8; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let mut pixel = [0; C];
    pixel.copy_from_slice(image.pixel(iu.min(cols - 1), iv.min(rows - 1)));

    pixel
}
