// MIT/Apache2 License

use crate::{
    geometry::{point, vector, Angle, Point, Vector},
    Polygon,
};

/// A rigid motion: a rotation about the origin, followed by a translation.
///
/// Rigid transforms preserve the shape and size of whatever they are applied to. A point `p` is mapped to
/// `R(rotation) * p + translation`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RigidTransform {
    /// The rotation applied first, about the origin.
    pub rotation: Angle,
    /// The translation applied after the rotation.
    pub translation: Vector,
}

impl Default for RigidTransform {
    #[inline]
    fn default() -> RigidTransform {
        RigidTransform::identity()
    }
}

impl RigidTransform {
    /// The transform that leaves everything where it is.
    #[must_use]
    #[inline]
    pub fn identity() -> RigidTransform {
        RigidTransform {
            rotation: Angle::zero(),
            translation: vector(0.0, 0.0),
        }
    }

    /// Create a transform from a rotation and the translation that follows it.
    #[must_use]
    #[inline]
    pub fn new(rotation: Angle, translation: Vector) -> RigidTransform {
        RigidTransform {
            rotation,
            translation,
        }
    }

    /// A pure rotation about the origin.
    #[must_use]
    #[inline]
    pub fn rotation(rotation: Angle) -> RigidTransform {
        RigidTransform::new(rotation, vector(0.0, 0.0))
    }

    /// A pure translation.
    #[must_use]
    #[inline]
    pub fn translation(dx: f64, dy: f64) -> RigidTransform {
        RigidTransform::new(Angle::zero(), vector(dx, dy))
    }

    /// Tell whether this transform leaves every point unchanged.
    #[must_use]
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.rotation.sin_cos() == (0.0, 1.0) && self.translation == vector(0.0, 0.0)
    }

    /// Apply this transform to a single point.
    #[must_use]
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        let (sin, cos) = self.rotation.sin_cos();
        point(
            p.x * cos - p.y * sin + self.translation.x,
            p.x * sin + p.y * cos + self.translation.y,
        )
    }

    /// Rotate a vector; translations do not affect vectors.
    #[must_use]
    #[inline]
    pub fn transform_vector(&self, v: Vector) -> Vector {
        let (sin, cos) = self.rotation.sin_cos();
        vector(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }

    /// The transform that applies `self`, and then `other`.
    ///
    /// Rotations are summed with `+`, so two infinite rotations of opposite sign combine into no rotation at all.
    #[must_use]
    #[inline]
    pub fn then(&self, other: &RigidTransform) -> RigidTransform {
        RigidTransform {
            rotation: self.rotation + other.rotation,
            translation: other.transform_vector(self.translation) + other.translation,
        }
    }

    /// The transform that undoes this one.
    #[must_use]
    #[inline]
    pub fn inverse(&self) -> RigidTransform {
        let rotation = RigidTransform::rotation(-self.rotation);
        RigidTransform {
            rotation: -self.rotation,
            translation: -rotation.transform_vector(self.translation),
        }
    }
}

/// Apply a rigid transform to every vertex of a polygon.
#[inline]
pub fn apply_transform(polygon: &Polygon, transform: &RigidTransform) -> Polygon {
    polygon
        .points()
        .iter()
        .map(|&p| transform.transform_point(p))
        .collect()
}
