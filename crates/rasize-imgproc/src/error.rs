use rasize_image::ImageError;

use crate::parallel::ParallelError;

/// An error type for the resize operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResizeError {
    /// Both target dimensions are unset.
    #[error("invalid dimension: one of the dimension is not set or set to 0")]
    InvalidDimension,

    /// The interpolation method name is not recognized.
    #[error(
        "invalid interpolation method `{0}`: only nearest-neighbor, bilinear, and bicubic are available"
    )]
    InvalidInterpolationMethod(String),

    /// The source image is too small for bilinear interpolation.
    #[error("source image is too small for bilinear: {0}x{1}, width < 2 or height < 2")]
    SourceTooSmallForBilinear(usize, usize),

    /// The source image is too small for bicubic interpolation.
    #[error("source image is too small for bicubic: {0}x{1}, width < 4 or height < 4")]
    SourceTooSmallForBicubic(usize, usize),

    /// The source image holds no pixel to sample from.
    #[error("source image is empty")]
    EmptySource,

    /// Error raised by the image container.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error raised while fanning out the work.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
