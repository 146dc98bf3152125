// MIT/Apache2 License

//! Basic geometric primitives. These are thin `f64` instantiations of the `lyon_geom` types, so that callers
//! can hand them straight to anything else built on `lyon`.

mod angle;

pub use angle::*;

/// A point in two-dimensional space. The X axis runs from left to right, the Y axis from top to bottom.
pub type Point = lyon_geom::Point<f64>;
/// A displacement in two-dimensional space.
pub type Vector = lyon_geom::Vector<f64>;
/// A width and a height.
pub type Size = lyon_geom::Size<f64>;
/// An axis-aligned rectangle, described by its origin (top left corner) and its size.
pub type Rect = lyon_geom::Rect<f64>;
/// A straight line between two points.
pub type LineSegment = lyon_geom::LineSegment<f64>;

/// Shorthand for creating a `Point`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    lyon_geom::point(x, y)
}

/// Shorthand for creating a `Vector`.
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    lyon_geom::vector(x, y)
}

/// Shorthand for creating a `Rect` from its origin and its size.
#[inline]
pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(point(x, y), lyon_geom::size(width, height))
}
