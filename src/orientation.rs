// MIT/Apache2 License

/// The direction that a shape's feature, such as the arrow of a dialog balloon, points in.
///
/// The mirrored variants exist so that image orientation values can be passed through unchanged. They produce
/// the same geometry as their base orientation; no flip is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
    UpMirrored,
    DownMirrored,
    LeftMirrored,
    RightMirrored,
}

impl Default for Orientation {
    #[inline]
    fn default() -> Orientation {
        Orientation::Up
    }
}

impl Orientation {
    /// Every orientation, mirrored variants included.
    pub const ALL: [Orientation; 8] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
        Orientation::UpMirrored,
        Orientation::DownMirrored,
        Orientation::LeftMirrored,
        Orientation::RightMirrored,
    ];

    /// The non-mirrored orientation that shares geometry with this one.
    #[must_use]
    #[inline]
    pub fn base(self) -> Orientation {
        match self {
            Orientation::Up | Orientation::UpMirrored => Orientation::Up,
            Orientation::Down | Orientation::DownMirrored => Orientation::Down,
            Orientation::Left | Orientation::LeftMirrored => Orientation::Left,
            Orientation::Right | Orientation::RightMirrored => Orientation::Right,
        }
    }

    /// Is this one of the mirrored variants?
    #[must_use]
    #[inline]
    pub fn is_mirrored(self) -> bool {
        self != self.base()
    }

    /// Does building a shape in this orientation require swapping the width and height of its frame?
    #[must_use]
    #[inline]
    pub fn is_transposed(self) -> bool {
        matches!(self.base(), Orientation::Left | Orientation::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_variants_share_base() {
        assert_eq!(Orientation::DownMirrored.base(), Orientation::Down);
        assert_eq!(Orientation::LeftMirrored.base(), Orientation::Left);
        assert!(Orientation::RightMirrored.is_mirrored());
        assert!(!Orientation::Right.is_mirrored());
    }

    #[test]
    fn transposition() {
        let transposed: Vec<Orientation> = Orientation::ALL
            .iter()
            .copied()
            .filter(|o| o.is_transposed())
            .collect();
        assert_eq!(
            transposed,
            vec![
                Orientation::Left,
                Orientation::Right,
                Orientation::LeftMirrored,
                Orientation::RightMirrored
            ]
        );
    }
}
