//! Parallel image resizing with nearest-neighbor, bilinear and bicubic interpolation.
//!
//! ```
//! use rasize::image::{Image, ImageSize};
//! use rasize::imgproc::resize::{resize, ResizeSpec};
//!
//! let image = Image::<u8, 4>::from_size_pixel(
//!     ImageSize {
//!         width: 8,
//!         height: 6,
//!     },
//!     [10, 20, 30, 255],
//! )
//! .unwrap();
//!
//! // only the width is given, the height keeps the aspect ratio
//! let spec = ResizeSpec::new(4, 0, "bicubic").unwrap();
//! let resized = resize(&image, &spec).unwrap();
//!
//! assert_eq!(resized.size(), ImageSize { width: 4, height: 3 });
//! ```

#[doc(inline)]
pub use rasize_image as image;

#[doc(inline)]
pub use rasize_imgproc as imgproc;

#[doc(inline)]
pub use rasize_io as io;
