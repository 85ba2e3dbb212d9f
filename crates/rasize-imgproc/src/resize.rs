use rasize_image::{Image, ImageSize};

use crate::error::ResizeError;
use crate::interpolation::InterpolationMode;
use crate::parallel::ExecutionStrategy;

/// Target of a resize operation.
///
/// A dimension set to zero is derived from the other one so that the aspect ratio of the
/// source image is preserved. At most one dimension can be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSpec {
    width: usize,
    height: usize,
    interpolation: InterpolationMode,
}

impl ResizeSpec {
    /// Create a new resize target from a method name.
    ///
    /// # Arguments
    ///
    /// * `width` - The target width, or 0 to derive it from the height.
    /// * `height` - The target height, or 0 to derive it from the width.
    /// * `method` - One of `nearest-neighbor`, `bilinear` or `bicubic`. The empty string
    ///   selects bilinear.
    ///
    /// # Errors
    ///
    /// * [`ResizeError::InvalidDimension`] if both dimensions are zero.
    /// * [`ResizeError::InvalidInterpolationMethod`] if the method name is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use rasize_imgproc::interpolation::InterpolationMode;
    /// use rasize_imgproc::resize::ResizeSpec;
    ///
    /// let spec = ResizeSpec::new(100, 0, "").unwrap();
    /// assert_eq!(spec.interpolation(), InterpolationMode::Bilinear);
    ///
    /// assert!(ResizeSpec::new(0, 0, "bicubic").is_err());
    /// assert!(ResizeSpec::new(100, 0, "lanczos").is_err());
    /// ```
    pub fn new(width: usize, height: usize, method: &str) -> Result<Self, ResizeError> {
        if width == 0 && height == 0 {
            return Err(ResizeError::InvalidDimension);
        }
        Self::with_mode(width, height, method.parse()?)
    }

    /// Create a new resize target with an already parsed interpolation mode.
    ///
    /// # Errors
    ///
    /// [`ResizeError::InvalidDimension`] if both dimensions are zero.
    pub fn with_mode(
        width: usize,
        height: usize,
        interpolation: InterpolationMode,
    ) -> Result<Self, ResizeError> {
        if width == 0 && height == 0 {
            return Err(ResizeError::InvalidDimension);
        }
        Ok(Self {
            width,
            height,
            interpolation,
        })
    }

    /// The requested width, 0 when it is derived.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The requested height, 0 when it is derived.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The interpolation mode.
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Resolve the output size for a source image of the given size.
    ///
    /// The missing dimension is `round(present * src_opposite / src_matching)`.
    ///
    /// # Example
    ///
    /// ```
    /// use rasize_image::ImageSize;
    /// use rasize_imgproc::resize::ResizeSpec;
    ///
    /// let spec = ResizeSpec::new(0, 100, "bilinear").unwrap();
    /// let size = spec.output_size(ImageSize { width: 300, height: 200 });
    /// assert_eq!(size, ImageSize { width: 150, height: 100 });
    /// ```
    pub fn output_size(&self, src: ImageSize) -> ImageSize {
        let derive = |present: usize, opposite: usize, matching: usize| {
            (present as f64 * opposite as f64 / matching as f64).round() as usize
        };

        match (self.width, self.height) {
            (0, height) => ImageSize {
                width: derive(height, src.width, src.height),
                height,
            },
            (width, 0) => ImageSize {
                width,
                height: derive(width, src.height, src.width),
            },
            (width, height) => ImageSize { width, height },
        }
    }
}

/// Resize an image to the given target.
///
/// The output size is resolved with [`ResizeSpec::output_size`], a new image is allocated
/// and every pixel of it is sampled from `src` in parallel with the requested interpolation mode.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `spec` - The target size and interpolation mode.
///
/// # Returns
///
/// The resized image.
///
/// # Errors
///
/// If the source is too small for the interpolation mode, see
/// [`InterpolationMode::check_source`].
///
/// # Example
///
/// ```
/// use rasize_image::{Image, ImageSize};
/// use rasize_imgproc::resize::{resize, ResizeSpec};
///
/// let image = Image::<u8, 4>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     0,
/// )
/// .unwrap();
///
/// let spec = ResizeSpec::new(2, 3, "nearest-neighbor").unwrap();
/// let image_resized = resize(&image, &spec).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 4);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize<const C: usize>(
    src: &Image<u8, C>,
    spec: &ResizeSpec,
) -> Result<Image<u8, C>, ResizeError> {
    resize_with(src, spec, ExecutionStrategy::default())
}

/// Resize an image to the given target with an explicit execution strategy.
///
/// See [`resize`].
pub fn resize_with<const C: usize>(
    src: &Image<u8, C>,
    spec: &ResizeSpec,
    strategy: ExecutionStrategy,
) -> Result<Image<u8, C>, ResizeError> {
    // fail before deriving sizes or allocating anything
    spec.interpolation.check_source(src.size())?;

    let new_size = spec.output_size(src.size());

    log::debug!(
        "resizing {}x{} -> {}x{} with {}",
        src.width(),
        src.height(),
        new_size.width,
        new_size.height,
        spec.interpolation
    );

    let mut dst = Image::<u8, C>::from_size_val(new_size, 0)?;
    spec.interpolation.interpolate(src, &mut dst, strategy)?;

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::{resize, resize_with, ResizeSpec};
    use crate::error::ResizeError;
    use crate::interpolation::InterpolationMode;
    use crate::parallel::ExecutionStrategy;
    use rasize_image::{Image, ImageSize};

    #[test]
    fn spec_keeps_dimensions() -> Result<(), ResizeError> {
        let spec = ResizeSpec::new(100, 120, "")?;
        assert_eq!(spec.width(), 100);
        assert_eq!(spec.height(), 120);
        assert_eq!(spec.interpolation(), InterpolationMode::Bilinear);
        Ok(())
    }

    #[test]
    fn spec_rejects_zero_dimensions() {
        for method in ["", "nearest-neighbor", "bilinear", "bicubic", "full crimp"] {
            assert_eq!(
                ResizeSpec::new(0, 0, method),
                Err(ResizeError::InvalidDimension)
            );
        }
        assert_eq!(
            ResizeSpec::with_mode(0, 0, InterpolationMode::Nearest),
            Err(ResizeError::InvalidDimension)
        );
    }

    #[test]
    fn spec_rejects_unknown_method() {
        assert_eq!(
            ResizeSpec::new(100, 0, "full crimp"),
            Err(ResizeError::InvalidInterpolationMethod(
                "full crimp".to_string()
            ))
        );
    }

    #[test]
    fn output_size_keeps_aspect_ratio() -> Result<(), ResizeError> {
        let src = ImageSize {
            width: 258,
            height: 195,
        };

        let size = ResizeSpec::new(0, 100, "")?.output_size(src);
        assert_eq!(size.width, (100.0f64 * 258.0 / 195.0).round() as usize);
        assert_eq!(size.width, 132);

        let size = ResizeSpec::new(100, 0, "")?.output_size(src);
        assert_eq!(size.height, 76);

        // doubling one side doubles the other one
        let size = ResizeSpec::new(0, 390, "")?.output_size(src);
        assert_eq!(size, ImageSize { width: 516, height: 390 });

        // explicit sizes are kept even if they distort the image
        let size = ResizeSpec::new(10, 10, "")?.output_size(src);
        assert_eq!(size, ImageSize { width: 10, height: 10 });
        Ok(())
    }

    #[test]
    fn resize_smoke_rgba() -> Result<(), ResizeError> {
        let image = Image::<u8, 4>::from_size_val(
            ImageSize {
                width: 4,
                height: 5,
            },
            0,
        )?;

        for method in ["nearest-neighbor", "bilinear", "bicubic"] {
            let image_resized = resize(&image, &ResizeSpec::new(2, 3, method)?)?;

            assert_eq!(image_resized.num_channels(), 4);
            assert_eq!(image_resized.size().width, 2);
            assert_eq!(image_resized.size().height, 3);
        }
        Ok(())
    }

    #[test]
    fn resize_propagates_source_errors() -> Result<(), ResizeError> {
        let tiny = Image::<u8, 4>::from_size_val([1, 1].into(), 255)?;
        assert_eq!(
            resize(&tiny, &ResizeSpec::new(4, 4, "bilinear")?),
            Err(ResizeError::SourceTooSmallForBilinear(1, 1))
        );

        let small = Image::<u8, 4>::from_size_val([3, 3].into(), 255)?;
        assert_eq!(
            resize(&small, &ResizeSpec::new(9, 9, "bicubic")?),
            Err(ResizeError::SourceTooSmallForBicubic(3, 3))
        );

        let empty = Image::<u8, 4>::from_size_val([0, 0].into(), 255)?;
        assert_eq!(
            resize(&empty, &ResizeSpec::new(9, 0, "nearest-neighbor")?),
            Err(ResizeError::EmptySource)
        );
        Ok(())
    }

    #[test]
    fn resize_with_fixed_threads() -> Result<(), ResizeError> {
        let image = Image::<u8, 4>::from_size_pixel([5, 5].into(), [1, 2, 3, 4])?;
        let spec = ResizeSpec::new(13, 0, "bicubic")?;

        let serial = resize_with(&image, &spec, ExecutionStrategy::Serial)?;
        let fixed = resize_with(&image, &spec, ExecutionStrategy::Fixed(3))?;

        assert_eq!(serial.size(), ImageSize { width: 13, height: 13 });
        assert_eq!(serial, fixed);
        assert!(fixed.as_slice().chunks_exact(4).all(|p| p == [1, 2, 3, 4]));
        Ok(())
    }
}
