//! Pixel interpolation methods for image resampling.
//!
//! This module provides the interpolation algorithms used when resizing an image. Each
//! destination pixel is mapped back to the source grid and sampled with one of the kernels.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, copies the source pixel under the floored coordinate
//! - **Bilinear**: Linear blend of the 2x2 neighborhood, x first then y
//! - **Bicubic**: Catmull-Rom spline over the 4x4 neighborhood, x first then y
//!
//! All the kernels clamp their output to the `u8` range before storing it.

mod bicubic;
mod bilinear;

/// Coordinate transforms between the destination and the source grids.
pub mod coords;

pub(crate) mod interpolate;
mod nearest;

pub use bicubic::catmull_rom;
pub use bilinear::internal_division;
pub use interpolate::{interpolate_pixel, InterpolationMode};
