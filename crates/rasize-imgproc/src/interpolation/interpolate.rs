use std::fmt;
use std::str::FromStr;

use rasize_image::{Image, ImageSize};

use super::bicubic::bicubic_interpolation;
use super::bilinear::bilinear_interpolation;
use super::coords::AxisMap;
use super::nearest::{nearest_neighbor_interpolation, nearest_pixel};
use crate::error::ResizeError;
use crate::parallel::{par_iter_pixels_indexed, ExecutionStrategy};

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Bicubic interpolation with a Catmull-Rom spline
    Bicubic,
}

impl InterpolationMode {
    /// The name used to select the mode from configuration.
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMode::Nearest => "nearest-neighbor",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Bicubic => "bicubic",
        }
    }

    /// Check that a source image of the given size can be sampled with this mode.
    ///
    /// # Errors
    ///
    /// * Bilinear needs at least 2x2 source pixels.
    /// * Bicubic needs at least 4x4 source pixels.
    /// * Nearest neighbor needs at least one source pixel.
    pub fn check_source(&self, size: ImageSize) -> Result<(), ResizeError> {
        match self {
            InterpolationMode::Bilinear if size.width < 2 || size.height < 2 => Err(
                ResizeError::SourceTooSmallForBilinear(size.width, size.height),
            ),
            InterpolationMode::Bicubic if size.width < 4 || size.height < 4 => Err(
                ResizeError::SourceTooSmallForBicubic(size.width, size.height),
            ),
            _ if size.is_empty() => Err(ResizeError::EmptySource),
            _ => Ok(()),
        }
    }

    /// Fill every pixel of `dst` by sampling `src` with this mode.
    ///
    /// The destination size is taken as is; the scale factor of each axis is derived from the
    /// ratio between both images. The source size is checked before any pixel is written, so
    /// on error `dst` is left untouched.
    ///
    /// # Arguments
    ///
    /// * `src` - The input image container.
    /// * `dst` - The output image container.
    /// * `strategy` - How the destination pixels are distributed over the workers.
    pub fn interpolate<const C: usize>(
        &self,
        src: &Image<u8, C>,
        dst: &mut Image<u8, C>,
        strategy: ExecutionStrategy,
    ) -> Result<(), ResizeError> {
        self.check_source(src.size())?;

        let map_x = AxisMap::new(src.width(), dst.width());
        let map_y = AxisMap::new(src.height(), dst.height());

        match self {
            InterpolationMode::Nearest => fill(dst, strategy, |x, y| {
                nearest_pixel(src, map_x.nearest(x), map_y.nearest(y))
            }),
            InterpolationMode::Bilinear => fill(dst, strategy, |x, y| {
                bilinear_interpolation(src, map_x.centered(x), map_y.centered(y))
            }),
            InterpolationMode::Bicubic => fill(dst, strategy, |x, y| {
                bicubic_interpolation(src, map_x.centered(x), map_y.centered(y))
            }),
        }
    }
}

// write the kernel output to every destination pixel
fn fill<const C: usize>(
    dst: &mut Image<u8, C>,
    strategy: ExecutionStrategy,
    kernel: impl Fn(usize, usize) -> [u8; C] + Send + Sync,
) -> Result<(), ResizeError> {
    par_iter_pixels_indexed(dst, strategy, |x, y, dst_pixel| {
        dst_pixel.copy_from_slice(&kernel(x, y));
    })?;
    Ok(())
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationMode {
    type Err = ResizeError;

    /// Parse a mode from its name. The empty string selects the default, bilinear.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest-neighbor" => Ok(InterpolationMode::Nearest),
            "" | "bilinear" => Ok(InterpolationMode::Bilinear),
            "bicubic" => Ok(InterpolationMode::Bicubic),
            other => Err(ResizeError::InvalidInterpolationMethod(other.to_string())),
        }
    }
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate, in source space.
/// * `v` - The y coordinate of the pixel to interpolate, in source space.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel value.
///
/// # Errors
///
/// If the image is too small for the mode, see [`InterpolationMode::check_source`].
///
/// # Example
///
/// ```
/// use rasize_image::{Image, ImageSize};
/// use rasize_imgproc::interpolation::{interpolate_pixel, InterpolationMode};
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0, 100, 100, 200],
/// )
/// .unwrap();
///
/// let pixel = interpolate_pixel(&image, 0.5, 0.5, InterpolationMode::Bilinear).unwrap();
/// assert_eq!(pixel, [100]);
/// ```
pub fn interpolate_pixel<const C: usize>(
    image: &Image<u8, C>,
    u: f64,
    v: f64,
    interpolation: InterpolationMode,
) -> Result<[u8; C], ResizeError> {
    interpolation.check_source(image.size())?;

    Ok(match interpolation {
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Bicubic => bicubic_interpolation(image, u, v),
    })
}

#[cfg(test)]
mod tests {
    use super::InterpolationMode;
    use crate::error::ResizeError;
    use crate::parallel::ExecutionStrategy;
    use rasize_image::{Image, ImageError, ImageSize};

    #[test]
    fn parse_modes() -> Result<(), ResizeError> {
        assert_eq!(
            "nearest-neighbor".parse::<InterpolationMode>()?,
            InterpolationMode::Nearest
        );
        assert_eq!(
            "bilinear".parse::<InterpolationMode>()?,
            InterpolationMode::Bilinear
        );
        assert_eq!(
            "bicubic".parse::<InterpolationMode>()?,
            InterpolationMode::Bicubic
        );
        assert_eq!(
            "".parse::<InterpolationMode>()?,
            InterpolationMode::default()
        );
        assert_eq!(
            "full crimp".parse::<InterpolationMode>(),
            Err(ResizeError::InvalidInterpolationMethod(
                "full crimp".to_string()
            ))
        );
        // names are matched exactly
        assert!("Bicubic".parse::<InterpolationMode>().is_err());
        Ok(())
    }

    #[test]
    fn display_round_trips_names() -> Result<(), ResizeError> {
        for mode in [
            InterpolationMode::Nearest,
            InterpolationMode::Bilinear,
            InterpolationMode::Bicubic,
        ] {
            assert_eq!(mode.to_string().parse::<InterpolationMode>()?, mode);
        }
        Ok(())
    }

    #[test]
    fn check_source_sizes() {
        let size = |width, height| ImageSize { width, height };

        assert_eq!(
            InterpolationMode::Bilinear.check_source(size(1, 1)),
            Err(ResizeError::SourceTooSmallForBilinear(1, 1))
        );
        assert_eq!(
            InterpolationMode::Bilinear.check_source(size(1, 8)),
            Err(ResizeError::SourceTooSmallForBilinear(1, 8))
        );
        assert_eq!(InterpolationMode::Bilinear.check_source(size(2, 2)), Ok(()));
        assert_eq!(
            InterpolationMode::Bicubic.check_source(size(3, 3)),
            Err(ResizeError::SourceTooSmallForBicubic(3, 3))
        );
        assert_eq!(InterpolationMode::Bicubic.check_source(size(4, 4)), Ok(()));
        assert_eq!(InterpolationMode::Nearest.check_source(size(1, 1)), Ok(()));
        assert_eq!(
            InterpolationMode::Nearest.check_source(size(0, 4)),
            Err(ResizeError::EmptySource)
        );
    }

    #[test]
    fn failed_check_leaves_dst_untouched() -> Result<(), ImageError> {
        let src = Image::<u8, 4>::from_size_val([3, 3].into(), 7)?;
        let mut dst = Image::<u8, 4>::from_size_val([6, 6].into(), 42)?;

        let res =
            InterpolationMode::Bicubic.interpolate(&src, &mut dst, ExecutionStrategy::default());

        assert_eq!(res, Err(ResizeError::SourceTooSmallForBicubic(3, 3)));
        assert!(dst.as_slice().iter().all(|&v| v == 42));
        Ok(())
    }

    #[test]
    fn interpolate_pixel_checks_source() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val([2, 2].into(), 9)?;
        assert_eq!(
            super::interpolate_pixel(&image, 0.5, 0.5, InterpolationMode::Bicubic),
            Err(ResizeError::SourceTooSmallForBicubic(2, 2))
        );
        assert_eq!(
            super::interpolate_pixel(&image, 0.5, 0.5, InterpolationMode::Nearest),
            Ok([9])
        );
        Ok(())
    }
}
