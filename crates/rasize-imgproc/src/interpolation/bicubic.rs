use rasize_image::Image;

use super::coords::{clamp_pixel, pixel_f64};

/// Evaluate a Catmull-Rom spline at the fractional position `u`.
///
/// The samples `p` are the values at `n - 1`, `n`, `n + 1` and `n + 2`, where `n` is the
/// floor of the interpolated coordinate and `u` its fractional part in `[0, 1)`.
///
/// The result is not clamped and can overshoot the range of the samples.
///
/// # Example
///
/// ```
/// use rasize_imgproc::interpolation::catmull_rom;
///
/// assert_eq!(catmull_rom(0.5, &[0.0, 100.0, 200.0, 150.0]), 159.375);
/// assert_eq!(catmull_rom(0.0, &[0.0, 100.0, 200.0, 150.0]), 100.0);
/// ```
#[inline]
pub fn catmull_rom(u: f64, p: &[f64; 4]) -> f64 {
    let u2 = u * u;
    let u3 = u2 * u;

    let a = (-p[0] + 3.0 * p[1] - 3.0 * p[2] + p[3]) * u3;
    let b = (2.0 * p[0] - 5.0 * p[1] + 4.0 * p[2] - p[3]) * u2;
    let c = (-p[0] + p[2]) * u;
    let d = 2.0 * p[1];

    0.5 * (a + b + c + d)
}

#[inline]
fn spline_pixels<const C: usize>(u: f64, p: &[[f64; C]; 4]) -> [f64; C] {
    let mut out = [0.0; C];
    for k in 0..C {
        out[k] = catmull_rom(u, &[p[0][k], p[1][k], p[2][k], p[3][k]]);
    }
    out
}

// anchor row/column for a coordinate outside `[1, extent - 2]`
#[inline]
fn border_index(t: f64, extent: usize) -> usize {
    if t < 0.5 {
        0
    } else if t < 1.0 {
        1
    } else if t <= extent as f64 - 1.5 {
        extent - 2
    } else {
        extent - 1
    }
}

// the four sample indices around `t` and its fractional part, with `t` in `[1, extent - 2]`
#[inline]
fn spline_window(t: f64, extent: usize) -> ([usize; 4], f64) {
    let n = t.floor();
    let i = n as usize;
    // `t` never exceeds extent - 2; at that bound the n + 2 sample has zero weight
    let window = [i - 1, i, i + 1, (i + 2).min(extent - 1)];
    (window, t - n)
}

/// Kernel for bicubic interpolation
///
/// Evaluates a separable Catmull-Rom spline, first along x on four rows and then along y.
/// Coordinates outside `[1, extent - 2]` on an axis snap to a border anchor along that axis
/// and only the other axis is interpolated. When both axes are outside, the anchor pixel is
/// copied as is.
///
/// # Arguments
///
/// * `image` - The input image container, at least 4x4.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values clamped to `[0, 255]`.
pub(crate) fn bicubic_interpolation<const C: usize>(
    image: &Image<u8, C>,
    u: f64,
    v: f64,
) -> [u8; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let out_u = u < 1.0 || u > (cols - 2) as f64;
    let out_v = v < 1.0 || v > (rows - 2) as f64;

    match (out_u, out_v) {
        (true, true) => {
            let mut pixel = [0; C];
            pixel.copy_from_slice(image.pixel(border_index(u, cols), border_index(v, rows)));
            pixel
        }
        (true, false) => {
            let iu = border_index(u, cols);
            let (iv, frac_v) = spline_window(v, rows);

            let p = iv.map(|y| pixel_f64(image, iu, y));

            clamp_pixel(spline_pixels(frac_v, &p))
        }
        (false, true) => {
            let iv = border_index(v, rows);
            let (iu, frac_u) = spline_window(u, cols);

            let p = iu.map(|x| pixel_f64(image, x, iv));

            clamp_pixel(spline_pixels(frac_u, &p))
        }
        (false, false) => {
            let (iu, frac_u) = spline_window(u, cols);
            let (iv, frac_v) = spline_window(v, rows);

            // x first on each of the four rows, y later over the intermediate values
            let tmp = iv.map(|y| {
                let p = iu.map(|x| pixel_f64(image, x, y));
                spline_pixels(frac_u, &p)
            });

            clamp_pixel(spline_pixels(frac_v, &tmp))
        }
    }
}
