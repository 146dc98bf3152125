// MIT/Apache2 License

use crate::{stroke_outline, Error, FillRule, Mask, MaskRegion, Polygon};

/// Provides the `ScanlineRasterizer` type.
mod scanline;

pub use scanline::ScanlineRasterizer;

/// Something that can turn a [`Polygon`] into a coverage [`Mask`].
///
/// The rasterizer is always passed around explicitly; there is no notion of a "current" drawing context. Anything
/// that can fill a polygon into a bitmap under a [`FillRule`] can implement this trait. Implementors only need
/// to implement `rasterize_region()`. Implementors that cannot handle a fill rule should return
/// [`Error::NotSupported`].
pub trait Rasterizer {
    /// Rasterize a polygon into a mask covering exactly `region`. Parts of the polygon outside of the region are
    /// clipped away.
    fn rasterize_region(
        &mut self,
        polygon: &Polygon,
        fill_rule: FillRule,
        region: MaskRegion,
    ) -> crate::Result<Mask>;

    /// Rasterize a polygon into a mask sized to its bounding box, rounded outwards to whole pixels.
    #[inline]
    fn rasterize(&mut self, polygon: &Polygon, fill_rule: FillRule) -> crate::Result<Mask> {
        let region = pixel_bounds(polygon)?;
        self.rasterize_region(polygon, fill_rule, region)
    }
}

impl<R: Rasterizer + ?Sized> Rasterizer for &mut R {
    #[inline]
    fn rasterize_region(
        &mut self,
        polygon: &Polygon,
        fill_rule: FillRule,
        region: MaskRegion,
    ) -> crate::Result<Mask> {
        (**self).rasterize_region(polygon, fill_rule, region)
    }

    #[inline]
    fn rasterize(&mut self, polygon: &Polygon, fill_rule: FillRule) -> crate::Result<Mask> {
        (**self).rasterize(polygon, fill_rule)
    }
}

/// The whole-pixel region covering a polygon's bounds. Bounds reaching outside of the `i32` pixel grid are an
/// error rather than being clamped.
#[inline]
pub fn pixel_bounds(polygon: &Polygon) -> crate::Result<MaskRegion> {
    if !polygon.is_finite() {
        return Err(Error::NonFinite);
    }

    let bounds = polygon.bounds();
    let x = bounds.min_x().floor();
    let y = bounds.min_y().floor();
    let width = bounds.max_x().ceil() - x;
    let height = bounds.max_y().ceil() - y;

    let fits = |start: f64, extent: f64| {
        start >= f64::from(i32::MIN)
            && start + extent <= f64::from(i32::MAX)
            && extent <= f64::from(u32::MAX)
    };
    if !fits(x, width) || !fits(y, height) {
        return Err(Error::StaticMsg("Polygon bounds do not fit in pixel space"));
    }

    Ok(MaskRegion {
        x: x as i32,
        y: y as i32,
        width: width as u32,
        height: height as u32,
    })
}

/// Rasterize the line traced along a polygon's outline, `line_width` wide and centered on each edge, into a mask
/// covering exactly `region`. A width that is not positive strokes nothing.
pub fn stroke_mask<R: Rasterizer + ?Sized>(
    rasterizer: &mut R,
    polygon: &Polygon,
    line_width: f64,
    region: MaskRegion,
) -> crate::Result<Mask> {
    let mut mask = Mask::empty(region);
    for band in stroke_outline(polygon, line_width) {
        let band = rasterizer.rasterize_region(&band, FillRule::NonZero, region)?;
        mask.union_with(&band);
    }
    Ok(mask)
}

/// Render the shape of a polygon: the polygon is moved so that its bounds start at the origin, and then
/// rasterized into a mask exactly as large as it is.
///
/// With a positive `stroke_width`, the outline is stroked on top of the fill. The mask stays the size of the
/// polygon, so the half of the stroke lying outside of its bounds is cut off. Pass `0.0` to only fill.
pub fn shape_mask<R: Rasterizer + ?Sized>(
    rasterizer: &mut R,
    polygon: &Polygon,
    fill_rule: FillRule,
    stroke_width: f64,
) -> crate::Result<Mask> {
    let polygon = polygon.normalized();
    let mut mask = rasterizer.rasterize(&polygon, fill_rule)?;

    if stroke_width > 0.0 {
        let stroke = stroke_mask(rasterizer, &polygon, stroke_width, mask.region())?;
        mask.union_with(&stroke);
    }

    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arrow_path,
        geometry::{point, rect},
        rectangle_path, NotSupportedOp, DEFAULT_STROKE_WIDTH,
    };

    /// Only understands the nonzero rule.
    struct NonZeroOnly(ScanlineRasterizer);

    impl Rasterizer for NonZeroOnly {
        fn rasterize_region(
            &mut self,
            polygon: &Polygon,
            fill_rule: FillRule,
            region: MaskRegion,
        ) -> crate::Result<Mask> {
            match fill_rule {
                FillRule::NonZero => self.0.rasterize_region(polygon, fill_rule, region),
                FillRule::EvenOdd => Err(Error::NotSupported(NotSupportedOp::EvenOdd)),
            }
        }
    }

    #[test]
    fn bounds_round_outwards() {
        let polygon = rectangle_path(rect(10.5, 2.25, 2.0, 2.0));
        assert_eq!(
            pixel_bounds(&polygon),
            Ok(MaskRegion {
                x: 10,
                y: 2,
                width: 3,
                height: 3
            })
        );

        let broken = Polygon::from_points(vec![point(0.0, 0.0), point(f64::INFINITY, 1.0)]);
        assert_eq!(pixel_bounds(&broken), Err(Error::NonFinite));
    }

    #[test]
    fn bounds_outside_pixel_grid() {
        let far = rectangle_path(rect(1e12, 0.0, 4.0, 4.0));
        let err = Error::StaticMsg("Polygon bounds do not fit in pixel space");
        assert_eq!(pixel_bounds(&far), Err(err.clone()));
        assert_eq!(
            ScanlineRasterizer::new().rasterize(&far, FillRule::NonZero),
            Err(err)
        );

        let negative = rectangle_path(rect(0.0, -3e9, 2.0, 2.0));
        assert!(pixel_bounds(&negative).is_err());

        let edge = rectangle_path(rect(f64::from(i32::MAX) - 8.0, 0.0, 4.0, 4.0));
        assert_eq!(pixel_bounds(&edge).map(|region| region.width), Ok(4));
    }

    #[test]
    fn shape_mask_is_normalized() {
        let mut rasterizer = ScanlineRasterizer::new();
        let mask = shape_mask(
            &mut rasterizer,
            &rectangle_path(rect(-40.0, 17.0, 3.0, 2.0)),
            FillRule::NonZero,
            0.0,
        )
        .unwrap();
        assert_eq!(mask.region(), MaskRegion::with_size(3, 2));
        assert!(mask.as_bytes().iter().all(|&c| c == 255));
    }

    #[test]
    fn stroked_arrow_gains_its_outline() {
        let mut rasterizer = ScanlineRasterizer::new();
        let arrow = arrow_path();

        let filled = shape_mask(&mut rasterizer, &arrow, FillRule::NonZero, 0.0).unwrap();
        let stroked =
            shape_mask(&mut rasterizer, &arrow, FillRule::NonZero, DEFAULT_STROKE_WIDTH).unwrap();
        assert_eq!(stroked.region(), MaskRegion::with_size(40, 75));
        assert_eq!(stroked.region(), filled.region());

        // left of the stem: untouched by the fill, half covered by the line along x = 10
        assert_eq!(filled.coverage(9, 50), 0);
        assert_eq!(stroked.coverage(9, 50), 128);
        assert_eq!(stroked.coverage(8, 50), 0);
        // inside the stem the fill is already solid
        assert_eq!(stroked.coverage(20, 50), 255);

        assert!(filled
            .as_bytes()
            .iter()
            .zip(stroked.as_bytes())
            .all(|(f, s)| s >= f));
        let total = |mask: &Mask| mask.as_bytes().iter().map(|&c| u64::from(c)).sum::<u64>();
        assert!(total(&stroked) > total(&filled));
    }

    #[test]
    fn stroke_only_mask() {
        let mut rasterizer = ScanlineRasterizer::new();
        let square = rectangle_path(rect(1.0, 1.0, 4.0, 4.0));
        let mask = stroke_mask(&mut rasterizer, &square, 2.0, MaskRegion::with_size(6, 6)).unwrap();

        // a two pixel frame around the border, nothing in the middle
        assert_eq!(mask.coverage(0, 0), 255);
        assert_eq!(mask.coverage(1, 3), 255);
        assert_eq!(mask.coverage(5, 5), 255);
        assert_eq!(mask.coverage(2, 2), 0);
        assert_eq!(mask.coverage(3, 3), 0);
        assert_eq!(mask.covered_pixels(), 6 * 6 - 2 * 2);

        let none = stroke_mask(&mut rasterizer, &square, 0.0, MaskRegion::with_size(6, 6)).unwrap();
        assert_eq!(none.covered_pixels(), 0);
    }

    #[test]
    fn unsupported_rules_surface_through_references() {
        fn both_rules<R: Rasterizer>(
            mut rasterizer: R,
            polygon: &Polygon,
        ) -> (crate::Result<Mask>, crate::Result<Mask>) {
            (
                rasterizer.rasterize(polygon, FillRule::NonZero),
                rasterizer.rasterize(polygon, FillRule::EvenOdd),
            )
        }

        let mut rasterizer = NonZeroOnly(ScanlineRasterizer::new());
        let polygon = rectangle_path(rect(0.0, 0.0, 2.0, 2.0));
        let (nonzero, even_odd) = both_rules(&mut rasterizer, &polygon);
        assert_eq!(nonzero.map(|mask| mask.covered_pixels()), Ok(4));
        assert_eq!(
            even_odd,
            Err(Error::NotSupported(NotSupportedOp::EvenOdd))
        );
    }
}
