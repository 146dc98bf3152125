// MIT/Apache2 License

use crate::util::approx_eq;
use ordered_float::NotNan;
use std::{f64::consts, ops};

/// An angle, or a measure of the space between two intersecting lines.
///
/// Since the Y axis points down, positive angles turn clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Angle {
    radians: NotNan<f64>,
}

impl Angle {
    /// The empty angle.
    #[must_use]
    #[inline]
    pub fn zero() -> Angle {
        Angle::default()
    }

    /// A quarter of a full turn, or 90 degrees.
    #[must_use]
    #[inline]
    pub fn quarter_turn() -> Angle {
        Angle::from_radians_or_zero(consts::FRAC_PI_2)
    }

    /// Half of a full turn, or 180 degrees.
    #[must_use]
    #[inline]
    pub fn half_turn() -> Angle {
        Angle::from_radians_or_zero(consts::PI)
    }

    /// Create an angle based on the number of radians in the angle. This function returns `None` if the radians
    /// given is NaN.
    #[must_use]
    #[inline]
    pub fn from_radians(radians: f64) -> Option<Angle> {
        NotNan::new(radians).ok().map(|radians| Angle { radians })
    }

    /// Create an angle based on the number of degrees in the angle. This function returns `None` if the degrees
    /// given times pi divided by 180 is NaN.
    #[must_use]
    #[inline]
    pub fn from_degrees(degrees: f64) -> Option<Angle> {
        Angle::from_radians(degrees.to_radians())
    }

    #[inline]
    fn from_radians_or_zero(radians: f64) -> Angle {
        Angle::from_radians(radians).unwrap_or_default()
    }

    /// Sum two angles, or `None` if the sum is not a number (as with opposite infinities).
    #[must_use]
    #[inline]
    pub fn checked_add(self, other: Angle) -> Option<Angle> {
        Angle::from_radians(self.radians() + other.radians())
    }

    /// Get the number of radians in this angle.
    #[must_use]
    #[inline]
    pub fn radians(self) -> f64 {
        self.radians.into_inner()
    }

    /// Get the number of degrees in this angle.
    #[must_use]
    #[inline]
    pub fn degrees(self) -> f64 {
        self.radians().to_degrees()
    }

    /// Get the sine and the cosine of this angle.
    ///
    /// Multiples of a quarter turn are snapped to exact values, so that rotating a shape by a right angle does
    /// not smear its coordinates with rounding noise.
    #[must_use]
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        let quarters = self.radians() / consts::FRAC_PI_2;
        let rounded = quarters.round();
        if approx_eq(quarters, rounded, 1e-12) {
            match (rounded as i64).rem_euclid(4) {
                0 => (0.0, 1.0),
                1 => (1.0, 0.0),
                2 => (0.0, -1.0),
                _ => (-1.0, 0.0),
            }
        } else {
            self.radians().sin_cos()
        }
    }
}

/// Sum two angles.
///
/// Angles may hold infinite radians, and opposite infinities have no sum. That NaN sum becomes the zero angle;
/// use [`Angle::checked_add`] to tell it apart from a real zero.
impl ops::Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, other: Angle) -> Angle {
        Angle::from_radians_or_zero(self.radians() + other.radians())
    }
}

impl ops::Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle {
            radians: -self.radians,
        }
    }
}
