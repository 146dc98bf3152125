// MIT/Apache2 License

use crate::{
    geometry::{LineSegment, Vector},
    Polygon,
};

/// The line width used to stroke the outlines of arrows and circular masks.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// The outline that stroking a polygon with a line of the given width covers, as one rectangle per edge.
///
/// Each rectangle runs along its edge, reaches half of `line_width` out on either side, and sticks out half of
/// `line_width` past both ends, so that neighbouring edges overlap at the corners. The rectangles overlap, and
/// should be combined as a union. Edges of zero length are skipped. A width that is not positive (or NaN) strokes
/// nothing.
pub fn stroke_outline(polygon: &Polygon, line_width: f64) -> Vec<Polygon> {
    if !(line_width > 0.0) {
        return Vec::new();
    }

    let half = line_width / 2.0;
    polygon
        .edges()
        .filter_map(|edge| edge_outline(edge, half))
        .collect()
}

#[inline]
fn edge_outline(edge: LineSegment, half: f64) -> Option<Polygon> {
    let LineSegment { from, to } = edge;
    let direction = to - from;
    let length = direction.length();
    if !(length > 0.0) {
        return None;
    }

    let along: Vector = direction * (half / length);
    let across = Vector::new(-along.y, along.x);

    Some(Polygon::from_points(vec![
        from - along + across,
        to + along + across,
        to + along - across,
        from - along - across,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{point, rect},
        rectangle_path,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn one_band_per_edge() {
        let bands = stroke_outline(&rectangle_path(rect(0.0, 0.0, 10.0, 4.0)), 2.0);
        assert_eq!(bands.len(), 4);

        // the top edge, one unit out on every side
        assert_eq!(bands[0].bounds(), rect(-1.0, -1.0, 12.0, 2.0));
        assert_abs_diff_eq!(bands[0].area(), 12.0 * 2.0, epsilon = 1e-9);
    }

    #[test]
    fn diagonal_edges_keep_their_width() {
        let triangle = Polygon::from_points(vec![
            point(0.0, 0.0),
            point(3.0, 4.0),
            point(0.0, 4.0),
        ]);
        let bands = stroke_outline(&triangle, 1.0);
        // 5 long plus half a unit at each end, 1 wide
        assert_abs_diff_eq!(bands[0].area(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn nothing_to_stroke() {
        let square = rectangle_path(rect(0.0, 0.0, 1.0, 1.0));
        assert!(stroke_outline(&square, 0.0).is_empty());
        assert!(stroke_outline(&square, -2.0).is_empty());
        assert!(stroke_outline(&square, f64::NAN).is_empty());

        // the repeated closing point of a triangled path has no edge to stroke
        let repeated = Polygon::from_points(vec![
            point(0.0, 0.0),
            point(0.0, 2.0),
            point(2.0, 0.0),
            point(0.0, 0.0),
        ]);
        assert_eq!(stroke_outline(&repeated, 1.0).len(), 3);
    }
}
