#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, file naming and encoding/decoding failures.
pub mod error;

/// Image file names and the formats they map to.
pub mod format;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_rgba8`] for automatic format detection.
pub mod functional;

pub use crate::error::IoError;
pub use crate::format::{ImageFileName, ImageFormat};
