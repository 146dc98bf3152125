// MIT/Apache2 License

use super::Rasterizer;
use crate::{
    geometry::LineSegment,
    util::clamp,
    Error, FillRule, Mask, MaskRegion, Polygon,
};
use std::cmp::Ordering;
use tinyvec::TinyVec;

const DEFAULT_SAMPLES: u32 = 4;
/// Past this, `samples * samples` no longer fits in a `u32` hit counter.
const MAX_SAMPLES: u32 = 65_535;

/// A software rasterizer that samples each pixel on a regular grid.
///
/// Every pixel is split into `samples * samples` sample points. For each row of sample points, the crossings of
/// the polygon's edges are found and sorted, and the winding number is accumulated from left to right; sample
/// points whose winding counts as inside under the fill rule are hits. A pixel's coverage is the fraction of its
/// sample points that were hit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScanlineRasterizer {
    samples: u32,
}

/// The place where an edge crosses a row of samples.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
struct Crossing {
    x: f64,
    winding: i32,
}

impl Default for ScanlineRasterizer {
    #[inline]
    fn default() -> ScanlineRasterizer {
        ScanlineRasterizer {
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl ScanlineRasterizer {
    /// Create a new rasterizer with four by four samples per pixel.
    #[must_use]
    #[inline]
    pub fn new() -> ScanlineRasterizer {
        ScanlineRasterizer::default()
    }

    /// Create a new rasterizer that takes `samples * samples` samples per pixel. One sample per pixel disables
    /// antialiasing entirely. `samples` must lie between 1 and 65535.
    #[inline]
    pub fn with_samples(samples: u32) -> crate::Result<ScanlineRasterizer> {
        if samples == 0 {
            Err(Error::StaticMsg("A rasterizer needs at least one sample per pixel"))
        } else if samples > MAX_SAMPLES {
            Err(Error::StaticMsg("A rasterizer takes at most 65535 samples per pixel axis"))
        } else {
            Ok(ScanlineRasterizer { samples })
        }
    }

    /// The number of samples taken along each axis of a pixel.
    #[must_use]
    #[inline]
    pub fn samples(&self) -> u32 {
        self.samples
    }
}

/// Where `edge` crosses the horizontal line at `y`, if it does. Edges include their top end but not their
/// bottom end, so that vertices shared by two edges are only counted once.
#[inline]
fn crossing(edge: &LineSegment, y: f64) -> Option<Crossing> {
    let LineSegment { from, to } = *edge;
    let (top, bottom, winding) = if from.y < to.y {
        (from.y, to.y, 1)
    } else {
        (to.y, from.y, -1)
    };

    if y < top || y >= bottom {
        return None;
    }

    let t = (y - from.y) / (to.y - from.y);
    Some(Crossing {
        x: from.x + t * (to.x - from.x),
        winding,
    })
}

impl Rasterizer for ScanlineRasterizer {
    fn rasterize_region(
        &mut self,
        polygon: &Polygon,
        fill_rule: FillRule,
        region: MaskRegion,
    ) -> crate::Result<Mask> {
        if !polygon.is_finite() {
            return Err(Error::NonFinite);
        }

        let mut mask = Mask::empty(region);
        if polygon.len() < 3 || region.area() == 0 {
            return Ok(mask);
        }

        log::debug!(
            "Rasterizing {}-point polygon into {:?} at {}x sampling",
            polygon.len(),
            region,
            self.samples
        );

        // horizontal edges never cross a row of samples
        let edges: Vec<LineSegment> = polygon
            .edges()
            .filter(|edge| edge.from.y != edge.to.y)
            .collect();

        let samples = self.samples;
        let step = 1.0 / f64::from(samples);
        let columns = u64::from(region.width) * u64::from(samples);
        let full = f64::from(samples).powi(2);
        let mut hits = vec![0u32; region.width as usize];

        // sample k sits at region.x + (k + 0.5) * step; spans take the samples in [left, right)
        let first_sample = |x: f64| -> u64 {
            let k = ((x - f64::from(region.x)) * f64::from(samples) - 0.5).ceil();
            if k <= 0.0 {
                0
            } else {
                (k as u64).min(columns)
            }
        };

        for row in 0..region.height {
            hits.iter_mut().for_each(|h| *h = 0);

            for sample_row in 0..samples {
                let y = f64::from(region.y)
                    + f64::from(row)
                    + (f64::from(sample_row) + 0.5) * step;

                let mut crossings: TinyVec<[Crossing; 16]> =
                    edges.iter().filter_map(|edge| crossing(edge, y)).collect();
                crossings.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

                let mut winding = 0;
                for pair in crossings.windows(2) {
                    winding += pair[0].winding;
                    if !fill_rule.is_inside(winding) {
                        continue;
                    }

                    let start = first_sample(pair[0].x);
                    let end = first_sample(pair[1].x);

                    for k in start..end {
                        hits[(k / u64::from(samples)) as usize] += 1;
                    }
                }
            }

            mask.row_mut(row)
                .iter_mut()
                .zip(hits.iter())
                .for_each(|(coverage, &hit)| *coverage = clamp(hit as f32 / full as f32));
        }

        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bottom_right_triangled_path, dialog_balloon_path,
        geometry::{point, rect},
        rectangle_path, Orientation,
    };

    fn total_coverage(mask: &Mask) -> f64 {
        mask.as_bytes().iter().map(|&c| f64::from(c) / 255.0).sum()
    }

    #[test]
    fn sample_count_limits() {
        assert!(ScanlineRasterizer::with_samples(0).is_err());
        assert_eq!(ScanlineRasterizer::with_samples(2).unwrap().samples(), 2);
        assert_eq!(
            ScanlineRasterizer::with_samples(65_535).unwrap().samples(),
            65_535
        );
        assert_eq!(
            ScanlineRasterizer::with_samples(70_000),
            Err(Error::StaticMsg(
                "A rasterizer takes at most 65535 samples per pixel axis"
            ))
        );
    }

    #[test]
    fn pixel_aligned_square_is_solid() {
        let mut rasterizer = ScanlineRasterizer::with_samples(1).unwrap();
        let mask = rasterizer
            .rasterize(&rectangle_path(rect(0.0, 0.0, 4.0, 4.0)), FillRule::NonZero)
            .unwrap();
        assert_eq!(mask.region(), MaskRegion::with_size(4, 4));
        assert!(mask.as_bytes().iter().all(|&c| c == 255));
    }

    #[test]
    fn half_covered_pixels() {
        let mut rasterizer = ScanlineRasterizer::with_samples(4).unwrap();
        let polygon = rectangle_path(rect(0.0, 0.0, 1.5, 1.0));
        let mask = rasterizer.rasterize(&polygon, FillRule::NonZero).unwrap();
        assert_eq!(mask.width(), 2);
        assert_eq!(mask.coverage(0, 0), 255);
        assert_eq!(mask.coverage(1, 0), 128);
    }

    #[test]
    fn coverage_tracks_area() {
        let mut rasterizer = ScanlineRasterizer::with_samples(16).unwrap();
        let polygon = bottom_right_triangled_path(rect(0.0, 0.0, 40.0, 40.0));
        let mask = rasterizer.rasterize(&polygon, FillRule::NonZero).unwrap();
        assert!((total_coverage(&mask) - polygon.area()).abs() < 1.0);
        // the cut corner is empty, the opposite one full
        assert_eq!(mask.coverage(39, 39), 0);
        assert_eq!(mask.coverage(0, 0), 255);
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let mut rasterizer = ScanlineRasterizer::new();
        let polygon = dialog_balloon_path(rect(0.0, 0.0, 60.0, 80.0), Orientation::Down, 10.0);
        let reversed = Polygon::from_points(polygon.points().iter().rev().copied());
        assert_eq!(
            rasterizer.rasterize(&polygon, FillRule::NonZero),
            rasterizer.rasterize(&reversed, FillRule::NonZero)
        );
    }

    #[test]
    fn even_odd_cancels_doubled_outline() {
        let square = rectangle_path(rect(0.0, 0.0, 6.0, 6.0));
        let doubled: Polygon = square
            .points()
            .iter()
            .chain(square.points())
            .copied()
            .collect();
        let mut rasterizer = ScanlineRasterizer::new();

        let nonzero = rasterizer.rasterize(&doubled, FillRule::NonZero).unwrap();
        assert_eq!(nonzero.covered_pixels(), 36);
        let even_odd = rasterizer.rasterize(&doubled, FillRule::EvenOdd).unwrap();
        assert_eq!(even_odd.covered_pixels(), 0);
    }

    #[test]
    fn region_clips_polygon() {
        let mut rasterizer = ScanlineRasterizer::with_samples(1).unwrap();
        let region = MaskRegion {
            x: 2,
            y: 2,
            width: 4,
            height: 4,
        };
        let mask = rasterizer
            .rasterize_region(&rectangle_path(rect(0.0, 0.0, 4.0, 4.0)), FillRule::NonZero, region)
            .unwrap();
        assert_eq!(mask.covered_pixels(), 4);
        assert_eq!(mask.coverage(3, 3), 255);
        assert_eq!(mask.coverage(4, 4), 0);
    }

    #[test]
    fn degenerate_and_broken_input() {
        let mut rasterizer = ScanlineRasterizer::new();
        let flat = bottom_right_triangled_path(rect(0.0, 0.0, 0.0, 10.0));
        let mask = rasterizer.rasterize(&flat, FillRule::NonZero).unwrap();
        assert_eq!(mask.width(), 0);
        assert_eq!(mask.covered_pixels(), 0);

        let broken = Polygon::from_points(vec![
            point(0.0, 0.0),
            point(f64::NAN, 3.0),
            point(3.0, 3.0),
        ]);
        assert_eq!(
            rasterizer.rasterize_region(&broken, FillRule::NonZero, MaskRegion::with_size(4, 4)),
            Err(Error::NonFinite)
        );
    }
}
