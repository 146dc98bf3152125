// MIT/Apache2 License

use crate::{
    apply_transform,
    geometry::{point, rect, LineSegment, Point, Rect, Vector},
    FillRule, RigidTransform,
};
use lyon_path::{iterator::PathIterator, Path, PathEvent};
use std::{iter::FromIterator, vec::IntoIter as VecIter};

/// A closed, ordered sequence of points defining a fillable outline.
///
/// The last point is always considered to be connected to the first one. That closing edge is part of the
/// polygon's meaning, not an extra stored point; if a shape's construction happens to repeat its first point
/// at the end, the repeated point is kept as-is and the closing edge simply has zero length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a new polygon from a series of points.
    #[inline]
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Polygon {
        Polygon {
            points: points.into_iter().collect(),
        }
    }

    /// Collect the first sub-path of a series of `lyon_path` events into a polygon, flattening any curves with
    /// the given tolerance.
    #[inline]
    pub fn from_path_events<I: IntoIterator<Item = PathEvent>>(events: I, tolerance: f32) -> Polygon {
        events
            .into_iter()
            .flattened(tolerance)
            .take_while(|event| !matches!(event, PathEvent::End { .. }))
            .filter_map(|event| match event {
                PathEvent::Begin { at } => Some(at),
                PathEvent::Line { to, .. } => Some(to),
                _ => None,
            })
            .map(|p| point(f64::from(p.x), f64::from(p.y)))
            .collect()
    }

    /// The vertices of this polygon, in order.
    #[must_use]
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of vertices in this polygon.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Tell whether this polygon has no vertices at all.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Tell whether every coordinate in this polygon is a finite number.
    #[must_use]
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Iterate over the edges of this polygon, including the closing edge from the last point to the first.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let closing = match (self.points.first(), self.points.last()) {
            (Some(&first), Some(&last)) if self.points.len() > 1 => Some(LineSegment {
                from: last,
                to: first,
            }),
            _ => None,
        };

        self.points
            .windows(2)
            .map(|pair| LineSegment {
                from: pair[0],
                to: pair[1],
            })
            .chain(closing)
    }

    /// The smallest axis-aligned rectangle containing every vertex. An empty polygon has an empty rectangle at
    /// the origin for bounds.
    #[must_use]
    #[inline]
    pub fn bounds(&self) -> Rect {
        let mut iter = self.points.iter();
        let first = match iter.next() {
            Some(first) => *first,
            None => return Rect::zero(),
        };

        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (
                point(min.x.min(p.x), min.y.min(p.y)),
                point(max.x.max(p.x), max.y.max(p.y)),
            )
        });

        rect(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// The signed area enclosed by this polygon, using the shoelace formula. The sign depends on the direction
    /// the vertices run in.
    #[must_use]
    #[inline]
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .map(|edge| edge.from.x * edge.to.y - edge.to.x * edge.from.y)
            .sum::<f64>()
            / 2.0
    }

    /// The area enclosed by this polygon. This is only meaningful for simple polygons.
    #[must_use]
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// The number of times this polygon winds around a point.
    #[must_use]
    pub fn winding_number(&self, p: Point) -> i32 {
        self.edges().fold(0, |winding, edge| {
            let LineSegment { from, to } = edge;
            let side = (to.x - from.x) * (p.y - from.y) - (p.x - from.x) * (to.y - from.y);

            if from.y <= p.y {
                if to.y > p.y && side > 0.0 {
                    return winding + 1;
                }
            } else if to.y <= p.y && side < 0.0 {
                return winding - 1;
            }

            winding
        })
    }

    /// Tell whether a point lies inside this polygon under the given fill rule.
    #[must_use]
    #[inline]
    pub fn contains(&self, p: Point, fill_rule: FillRule) -> bool {
        fill_rule.is_inside(self.winding_number(p))
    }

    /// Apply a rigid transform to this polygon.
    #[must_use]
    #[inline]
    pub fn transformed(&self, transform: &RigidTransform) -> Polygon {
        apply_transform(self, transform)
    }

    /// Move every vertex of this polygon by the same offset.
    #[must_use]
    #[inline]
    pub fn translated(&self, offset: Vector) -> Polygon {
        self.points.iter().map(|&p| p + offset).collect()
    }

    /// Move this polygon so that the top left corner of its bounds sits at the origin.
    #[must_use]
    #[inline]
    pub fn normalized(&self) -> Polygon {
        self.translated(-self.bounds().origin.to_vector())
    }

    /// Convert this polygon into a closed `lyon_path` path, for use with `lyon`-based renderers.
    #[must_use]
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut iter = self
            .points
            .iter()
            .map(|p| lyon_geom::point(p.x as f32, p.y as f32));

        if let Some(first) = iter.next() {
            builder.begin(first);
            for p in iter {
                builder.line_to(p);
            }
            builder.close();
        }

        builder.build()
    }
}

impl FromIterator<Point> for Polygon {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Polygon {
        Polygon::from_points(iter)
    }
}

impl IntoIterator for Polygon {
    type Item = Point;
    type IntoIter = VecIter<Point>;

    #[inline]
    fn into_iter(self) -> VecIter<Point> {
        self.points.into_iter()
    }
}

impl From<Vec<Point>> for Polygon {
    #[inline]
    fn from(points: Vec<Point>) -> Polygon {
        Polygon { points }
    }
}
