// MIT/Apache2 License

//! Outlines for masking images and views.
//!
//! The generators in this crate compute the vertices of a few fixed shapes: rectangles with a corner cut off, an
//! arrow, and a "dialog balloon" whose arrow can point in any direction. The results are plain [`Polygon`]s
//! that can be moved around with [`RigidTransform`]s, handed to any `lyon`-based renderer, or filled into a
//! coverage [`Mask`] by a [`Rasterizer`]. [`clip_image`] uses such a mask to cut a shape out of an [`Image`].

#![forbid(unsafe_code)]

mod error;

pub mod fill;
pub mod geometry;
pub mod image;
pub mod mask;
pub mod orientation;
pub mod raster;

mod clip;
mod polygon;
mod shapes;
mod stroke;
mod transform;

pub(crate) mod util;

pub use clip::*;
pub use error::*;
pub use fill::*;
pub use image::*;
pub use mask::*;
pub use orientation::*;
pub use polygon::*;
pub use raster::*;
pub use shapes::*;
pub use stroke::*;
pub use transform::*;
