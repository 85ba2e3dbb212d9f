use std::fmt;
use std::str::FromStr;

use crate::error::IoError;

/// The image formats the pipeline can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// JPEG, without alpha channel.
    Jpeg,
    /// PNG, with alpha channel.
    Png,
}

impl ImageFormat {
    /// The canonical extension of the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            other => Err(IoError::InvalidFormat(other.to_string())),
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

/// A file name split in its stem and its image format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFileName {
    /// Everything before the last dot.
    pub name: String,
    /// The format given by the extension.
    pub format: ImageFormat,
}

impl ImageFileName {
    /// Parse a file name of the shape `name.extension`.
    ///
    /// The split happens at the last dot and both parts must be non empty. `jpg` is
    /// normalized to [`ImageFormat::Jpeg`].
    ///
    /// # Errors
    ///
    /// * [`IoError::InvalidFileName`] if the name has no extension or no stem.
    /// * [`IoError::InvalidFormat`] if the extension is not jpg, jpeg or png.
    ///
    /// # Example
    ///
    /// ```
    /// use rasize_io::{ImageFileName, ImageFormat};
    ///
    /// let file = ImageFileName::parse("norwich.terrier.jpg").unwrap();
    /// assert_eq!(file.name, "norwich.terrier");
    /// assert_eq!(file.format, ImageFormat::Jpeg);
    /// ```
    pub fn parse(file_name: &str) -> Result<Self, IoError> {
        let (name, extension) = match file_name.rsplit_once('.') {
            Some((name, extension)) if !name.is_empty() && !extension.is_empty() => {
                (name, extension)
            }
            _ => return Err(IoError::InvalidFileName(file_name.to_string())),
        };

        Ok(Self {
            name: name.to_string(),
            format: extension.parse()?,
        })
    }

    /// Build the file name of a derived image, e.g. `dog_100x80.png`.
    pub fn with_suffix(&self, suffix: &str) -> String {
        format!("{}_{}.{}", self.name, suffix, self.format)
    }
}
