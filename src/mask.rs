// MIT/Apache2 License

/// The area of pixel space that a rasterizer covers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaskRegion {
    /// X coordinate of the top left pixel.
    pub x: i32,
    /// Y coordinate of the top left pixel.
    pub y: i32,
    /// Number of pixel columns.
    pub width: u32,
    /// Number of pixel rows.
    pub height: u32,
}

impl MaskRegion {
    /// The region starting at the origin with the given size.
    #[must_use]
    #[inline]
    pub fn with_size(width: u32, height: u32) -> MaskRegion {
        MaskRegion {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// The number of pixels in this region.
    #[must_use]
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// An 8-bit coverage bitmap, as produced by a [`Rasterizer`].
///
/// Each pixel tells how much of it lies inside the rasterized shape, from 0 (none of it) to 255 (all of it).
/// The mask covers a [`MaskRegion`] which may start anywhere in pixel space.
///
/// [`Rasterizer`]: crate::Rasterizer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Mask {
    region: MaskRegion,
    // invariant: data.len() == region.area()
    data: Vec<u8>,
}

impl Mask {
    /// Create a mask with no coverage anywhere.
    #[must_use]
    #[inline]
    pub fn empty(region: MaskRegion) -> Mask {
        Mask {
            region,
            data: vec![0; region.area()],
        }
    }

    /// The region this mask covers.
    #[must_use]
    #[inline]
    pub fn region(&self) -> MaskRegion {
        self.region
    }

    /// The width of this mask, in pixels.
    #[must_use]
    #[inline]
    pub fn width(&self) -> u32 {
        self.region.width
    }

    /// The height of this mask, in pixels.
    #[must_use]
    #[inline]
    pub fn height(&self) -> u32 {
        self.region.height
    }

    /// The raw coverage values, row by row.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let col = i64::from(x) - i64::from(self.region.x);
        let row = i64::from(y) - i64::from(self.region.y);
        if col < 0 || row < 0 || col >= i64::from(self.region.width) || row >= i64::from(self.region.height) {
            None
        } else {
            Some(row as usize * self.region.width as usize + col as usize)
        }
    }

    /// The coverage of the pixel at `(x, y)`, in absolute pixel coordinates. Pixels outside of the mask have
    /// no coverage.
    #[must_use]
    #[inline]
    pub fn coverage(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |i| self.data[i])
    }

    /// Set the coverage of the pixel at `(x, y)`. Pixels outside of the mask are ignored.
    #[inline]
    pub fn set_coverage(&mut self, x: i32, y: i32, coverage: u8) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = coverage;
        }
    }

    /// A mutable view of one row of coverage values, relative to the top of the mask.
    #[inline]
    pub(crate) fn row_mut(&mut self, row: u32) -> &mut [u8] {
        let width = self.region.width as usize;
        let start = row as usize * width;
        &mut self.data[start..start + width]
    }

    /// Combine another mask into this one, keeping the larger coverage of the two at every pixel. Only the part
    /// of `other` that overlaps this mask's region is used.
    pub fn union_with(&mut self, other: &Mask) {
        let MaskRegion { x, y, width, .. } = self.region;
        let width = width as usize;
        if width == 0 {
            return;
        }

        for (row, line) in self.data.chunks_mut(width).enumerate() {
            for (col, coverage) in line.iter_mut().enumerate() {
                let theirs = other.coverage(x + col as i32, y + row as i32);
                *coverage = (*coverage).max(theirs);
            }
        }
    }

    /// The number of pixels with any coverage at all.
    #[must_use]
    #[inline]
    pub fn covered_pixels(&self) -> usize {
        self.data.iter().filter(|&&c| c != 0).count()
    }
}
