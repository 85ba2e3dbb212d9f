//! Coordinate math shared by the interpolation kernels.
//!
//! All kernels map a destination pixel back to the source grid. The mapping only depends on the
//! ratio between the two extents along an axis, so the same helpers serve both axes.

use rasize_image::Image;

/// Compute the scale factor `k` such that `src_extent * k = dst_extent`.
///
/// # Example
///
/// ```
/// use rasize_imgproc::interpolation::coords::scale_factor;
///
/// assert_eq!(scale_factor(4, 8), 2.0);
/// assert_eq!(scale_factor(8, 2), 0.25);
/// ```
#[inline]
pub fn scale_factor(src_extent: usize, dst_extent: usize) -> f64 {
    dst_extent as f64 / src_extent as f64
}

/// Compute the half-pixel offset used to align pixel centers between both grids.
///
/// The offset is `(factor - 1) / (2 * factor)` and is zero when the factor is one.
#[inline]
pub fn sampling_offset(factor: f64) -> f64 {
    (factor - 1.0) / (2.0 * factor)
}

/// Round an interpolated channel value and clamp it to the `u8` range.
///
/// Cubic kernels can overshoot below 0 or above 255, this is the single place where that is
/// corrected before the value is stored.
///
/// # Example
///
/// ```
/// use rasize_imgproc::interpolation::coords::clamp_channel;
///
/// assert_eq!(clamp_channel(127.5), 128);
/// assert_eq!(clamp_channel(-12.0), 0);
/// assert_eq!(clamp_channel(301.7), 255);
/// ```
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Clamp every channel of an interpolated pixel.
#[inline]
pub(crate) fn clamp_pixel<const C: usize>(values: [f64; C]) -> [u8; C] {
    values.map(clamp_channel)
}

/// Read the channels of a source pixel as floating point values.
#[inline]
pub(crate) fn pixel_f64<const C: usize>(
    image: &Image<u8, C>,
    x: usize,
    y: usize,
) -> [f64; C] {
    let mut values = [0.0; C];
    values
        .iter_mut()
        .zip(image.pixel(x, y))
        .for_each(|(out, &v)| *out = v as f64);
    values
}

/// Map a destination index to the source grid without centering.
///
/// Used by the nearest neighbor kernel. The result is `floor(dst / factor)` with
/// `factor = dst_extent / src_extent`, evaluated as `dst * src_extent / dst_extent` in integers
/// so that exact ratios never round down to the previous index. It is bounded to the last
/// source index.
///
/// # Example
///
/// ```
/// use rasize_imgproc::interpolation::coords::nearest_source_index;
///
/// assert_eq!(nearest_source_index(1, 49, 7), 7);
/// assert_eq!(nearest_source_index(3, 2, 4), 1);
/// ```
#[inline]
pub fn nearest_source_index(dst: usize, src_extent: usize, dst_extent: usize) -> usize {
    let index = dst as u128 * src_extent as u128 / dst_extent.max(1) as u128;
    (index as usize).min(src_extent.saturating_sub(1))
}

/// Map a destination coordinate to the source grid aligning pixel centers.
///
/// Used by the bilinear and bicubic kernels: `dst / factor - offset`.
#[inline]
pub fn centered_source_coord(dst: usize, factor: f64, offset: f64) -> f64 {
    dst as f64 / factor - offset
}

/// Per axis mapping parameters, computed once per call and shared by all the workers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisMap {
    pub src_extent: usize,
    pub dst_extent: usize,
    pub factor: f64,
    pub offset: f64,
}

impl AxisMap {
    pub fn new(src_extent: usize, dst_extent: usize) -> Self {
        let factor = scale_factor(src_extent, dst_extent);
        Self {
            src_extent,
            dst_extent,
            factor,
            offset: sampling_offset(factor),
        }
    }

    #[inline]
    pub fn nearest(&self, dst: usize) -> usize {
        nearest_source_index(dst, self.src_extent, self.dst_extent)
    }

    #[inline]
    pub fn centered(&self, dst: usize) -> f64 {
        centered_source_coord(dst, self.factor, self.offset)
    }
}
