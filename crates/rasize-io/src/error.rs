/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// The file name does not have the `name.extension` shape.
    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    /// The file extension is not a supported format.
    #[error("invalid format `{0}`: only jpg/jpeg and png formats are supported")]
    InvalidFormat(String),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] rasize_image::ImageError),

    /// Error to decode or encode the image.
    #[error("Failed to decode or encode the image. {0}")]
    ImageCodecError(#[from] image::ImageError),

    /// The image dimensions do not fit the codec limits.
    #[error("Image size {0}x{1} is not supported by the codec")]
    UnsupportedImageSize(usize, usize),
}
