use rasize_image::Image;

use super::coords::{clamp_pixel, pixel_f64};

/// Weighted average of two samples anchored at `n` and `n + 1`, evaluated at `v`.
///
/// `n` is the largest integer no larger than `v`. The sample `c0` sits at `n` and `c1`
/// at `n + 1`, so the result is `(n + 1 - v) * c0 + (v - n) * c1`.
///
/// # Example
///
/// ```
/// use rasize_imgproc::interpolation::internal_division;
///
/// assert_eq!(internal_division(0.0, 255.0, 0.0, 0.5), 127.5);
/// assert_eq!(internal_division(255.0, 255.0, 3.0, 3.25), 255.0);
/// ```
#[inline]
pub fn internal_division(c0: f64, c1: f64, n: f64, v: f64) -> f64 {
    (n + 1.0 - v) * c0 + (v - n) * c1
}

#[inline]
fn blend<const C: usize>(p0: [f64; C], p1: [f64; C], n: f64, v: f64) -> [f64; C] {
    let mut out = [0.0; C];
    for k in 0..C {
        out[k] = internal_division(p0[k], p1[k], n, v);
    }
    out
}

// index of the source row/column to use when the coordinate falls outside the grid
#[inline]
fn edge_index(t: f64, extent: usize) -> usize {
    if t < 0.0 {
        0
    } else {
        extent - 1
    }
}

// lower and upper anchors around `t`, the upper one bounded to the last row/column
#[inline]
fn anchors(t: f64, extent: usize) -> (f64, usize, usize) {
    let n = t.floor();
    let i0 = n as usize;
    (n, i0, (i0 + 1).min(extent - 1))
}

/// Kernel for bilinear interpolation
///
/// Coordinates outside `[0, extent - 1]` on an axis are clamped to the border along that axis
/// and only the other axis is blended. When both axes are outside, the nearest corner is used.
///
/// # Arguments
///
/// * `image` - The input image container, at least 2x2.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bilinear_interpolation<const C: usize>(
    image: &Image<u8, C>,
    u: f64,
    v: f64,
) -> [u8; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let edge_u = u < 0.0 || u > (cols - 1) as f64;
    let edge_v = v < 0.0 || v > (rows - 1) as f64;

    match (edge_u, edge_v) {
        (true, true) => {
            let mut pixel = [0; C];
            pixel.copy_from_slice(image.pixel(edge_index(u, cols), edge_index(v, rows)));
            pixel
        }
        (true, false) => {
            let iu = edge_index(u, cols);
            let (nv, iv0, iv1) = anchors(v, rows);

            let p0 = pixel_f64(image, iu, iv0);
            let p1 = pixel_f64(image, iu, iv1);

            clamp_pixel(blend(p0, p1, nv, v))
        }
        (false, true) => {
            let iv = edge_index(v, rows);
            let (nu, iu0, iu1) = anchors(u, cols);

            let p0 = pixel_f64(image, iu0, iv);
            let p1 = pixel_f64(image, iu1, iv);

            clamp_pixel(blend(p0, p1, nu, u))
        }
        (false, false) => {
            let (nu, iu0, iu1) = anchors(u, cols);
            let (nv, iv0, iv1) = anchors(v, rows);

            // blend along x on both rows first, then along y
            let top = blend(
                pixel_f64(image, iu0, iv0),
                pixel_f64(image, iu1, iv0),
                nu,
                u,
            );
            let bottom = blend(
                pixel_f64(image, iu0, iv1),
                pixel_f64(image, iu1, iv1),
                nu,
                u,
            );

            clamp_pixel(blend(top, bottom, nv, v))
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rasize_image::{Image, ImageError, ImageSize};

    #[test]
    fn internal_division_midpoint() {
        let (r, g, b) = (
            super::internal_division(0.0, 255.0, 0.0, 0.5),
            super::internal_division(0.0, 255.0, 0.0, 0.5),
            super::internal_division(0.0, 255.0, 0.0, 0.5),
        );
        let a = super::internal_division(255.0, 255.0, 0.0, 0.5);

        assert_relative_eq!(r, 127.5);
        assert_relative_eq!(g, 127.5);
        assert_relative_eq!(b, 127.5);
        assert_relative_eq!(a, 255.0);
    }

    #[test]
    fn internal_division_at_anchors() {
        assert_relative_eq!(super::internal_division(10.0, 20.0, 4.0, 4.0), 10.0);
        assert_relative_eq!(super::internal_division(10.0, 20.0, 4.0, 4.75), 17.5);
    }

    fn gradient() -> Result<Image<u8, 1>, ImageError> {
        // 3x3 image with a horizontal ramp 0, 100, 200 and a vertical offset of 10 per row
        Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![0, 100, 200, 10, 110, 210, 20, 120, 220],
        )
    }

    #[test]
    fn bilinear_inside() -> Result<(), ImageError> {
        let image = gradient()?;

        assert_eq!(super::bilinear_interpolation(&image, 0.5, 0.0), [50]);
        assert_eq!(super::bilinear_interpolation(&image, 0.5, 0.5), [55]);
        assert_eq!(super::bilinear_interpolation(&image, 1.25, 1.0), [135]);

        // exactly on the last row and column
        assert_eq!(super::bilinear_interpolation(&image, 2.0, 2.0), [220]);

        Ok(())
    }

    #[test]
    fn bilinear_edges() -> Result<(), ImageError> {
        let image = gradient()?;

        // left of the grid: only blend along y on the first column
        assert_eq!(super::bilinear_interpolation(&image, -0.25, 0.5), [5]);

        // below the grid: only blend along x on the last row
        assert_eq!(super::bilinear_interpolation(&image, 1.5, 2.25), [170]);

        // both outside: nearest corner
        assert_eq!(super::bilinear_interpolation(&image, -1.0, -1.0), [0]);
        assert_eq!(super::bilinear_interpolation(&image, 2.5, -0.1), [200]);
        assert_eq!(super::bilinear_interpolation(&image, 3.0, 2.5), [220]);

        Ok(())
    }
}
