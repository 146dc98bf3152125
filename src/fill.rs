// MIT/Apache2 License

/// Decides which regions of a polygon count as its inside.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FillRule {
    /// A point is inside if the polygon winds around it a nonzero number of times.
    NonZero,
    /// A point is inside if a ray from it crosses the outline an odd number of times.
    EvenOdd,
}

impl Default for FillRule {
    #[inline]
    fn default() -> FillRule {
        FillRule::NonZero
    }
}

impl FillRule {
    /// Given a winding number, tell whether it counts as inside under this rule.
    #[must_use]
    #[inline]
    pub fn is_inside(self, winding: i32) -> bool {
        match self {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}
