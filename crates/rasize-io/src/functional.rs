use std::io::Cursor;
use std::path::Path;

use rasize_image::{ImageSize, Rgba8Image};

use crate::error::IoError;
use crate::format::ImageFormat;

/// Decodes an image held in memory into an RGBA image.
///
/// Any format understood by the image crate is accepted; images without alpha channel get an
/// opaque one.
///
/// # Arguments
///
/// * `bytes` - The encoded image data.
pub fn decode_image_rgba8(bytes: &[u8]) -> Result<Rgba8Image, IoError> {
    let img = image::load_from_memory(bytes)?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("decoded {:?} image of {}", img.color(), size);

    Ok(Rgba8Image::new(size, img.into_rgba8().into_raw())?)
}

/// Reads an image from the given file path into an RGBA image.
///
/// The method tries to read from any image format supported by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Errors
///
/// [`IoError::FileDoesNotExist`] if the file is missing, or the decoding error.
pub fn read_image_rgba8(file_path: impl AsRef<Path>) -> Result<Rgba8Image, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    decode_image_rgba8(&bytes)
}

/// Encodes an RGBA image in the given format.
///
/// JPEG has no alpha channel, so the alpha values are dropped when encoding to it.
///
/// # Arguments
///
/// * `image` - The image to encode.
/// * `format` - The target format.
pub fn encode_image_rgba8(image: &Rgba8Image, format: ImageFormat) -> Result<Vec<u8>, IoError> {
    let (width, height) = (image.width(), image.height());
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(IoError::UnsupportedImageSize(width, height));
    };

    let buffer = image::RgbaImage::from_raw(w, h, image.as_slice().to_vec())
        .ok_or(IoError::UnsupportedImageSize(width, height))?;
    let dynamic = match format {
        ImageFormat::Png => image::DynamicImage::ImageRgba8(buffer),
        ImageFormat::Jpeg => {
            image::DynamicImage::ImageRgb8(image::DynamicImage::ImageRgba8(buffer).to_rgb8())
        }
    };

    let mut bytes = Cursor::new(Vec::new());
    dynamic.write_to(&mut bytes, format.into())?;

    Ok(bytes.into_inner())
}

/// Writes the given RGBA image to the given file path.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `image` - The image to write.
/// * `format` - The format to encode the image with.
pub fn write_image_rgba8(
    file_path: impl AsRef<Path>,
    image: &Rgba8Image,
    format: ImageFormat,
) -> Result<(), IoError> {
    let bytes = encode_image_rgba8(image, format)?;
    std::fs::write(file_path, bytes)?;
    Ok(())
}
