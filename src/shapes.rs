// MIT/Apache2 License

//! Generators for the outlines of a handful of fixed shapes.
//!
//! Every generator is a pure function of its inputs. None of them fail: degenerate rectangles produce
//! degenerate, collapsed polygons rather than errors.

use crate::{
    geometry::{point, rect, vector, Angle, Point, Rect},
    Orientation, Polygon, RigidTransform,
};

/// Fraction of the height at which the bottom right diagonal cut meets the right edge.
const BOTTOM_CUT_DEPTH: f64 = 0.75;
/// Fraction of the height at which the top right diagonal cut meets the left edge.
const TOP_CUT_DEPTH: f64 = 0.25;

/// The arrow length used for dialog balloons when the caller has no preference.
pub const DEFAULT_ARROW_LENGTH: f64 = 20.0;

/// The flattening tolerance used for ovals when the one given is unusable.
pub const DEFAULT_OVAL_TOLERANCE: f64 = 0.25;

/// A rectangle, starting at its origin and running clockwise.
#[inline]
pub fn rectangle_path(r: Rect) -> Polygon {
    Polygon::from_points(vec![
        point(r.min_x(), r.min_y()),
        point(r.max_x(), r.min_y()),
        point(r.max_x(), r.max_y()),
        point(r.min_x(), r.max_y()),
    ])
}

/// The outline of `r` with its bottom right corner cut off diagonally.
///
/// The five vertices start at the origin corner, and the last one repeats the first. The cut begins at three
/// quarters of `max_y` on the right edge.
#[inline]
pub fn bottom_right_triangled_path(r: Rect) -> Polygon {
    let origin = r.origin;
    Polygon::from_points(vec![
        origin,
        point(origin.x, r.max_y()),
        point(r.max_x(), BOTTOM_CUT_DEPTH * r.max_y()),
        point(r.max_x(), origin.y),
        origin,
    ])
}

/// The outline of `r` with a diagonal cut running from a quarter of `max_y` on the left edge up to the top
/// right corner.
///
/// Like [`bottom_right_triangled_path`], this has five vertices and the last one repeats the first.
#[inline]
pub fn top_right_triangled_path(r: Rect) -> Polygon {
    let start = point(r.min_x(), TOP_CUT_DEPTH * r.max_y());
    Polygon::from_points(vec![
        start,
        point(r.min_x(), r.max_y()),
        point(r.max_x(), r.max_y()),
        point(r.max_x(), r.min_y()),
        start,
    ])
}

/// The frame a dialog balloon is constructed in: it starts at the origin, spans the size of `r` less the offset
/// of its origin, and has its width and height swapped if the arrow points sideways.
///
/// A rect anchored at the origin keeps its full size. A rect offset from the origin shrinks by that offset, so
/// `(100, 200, 200, 400)` builds in a `100x200` frame.
#[inline]
fn balloon_frame(r: Rect, orientation: Orientation) -> Rect {
    let width = r.width() - r.min_x();
    let height = r.height() - r.min_y();

    if orientation.is_transposed() {
        rect(0.0, 0.0, height, width)
    } else {
        rect(0.0, 0.0, width, height)
    }
}

/// The seven point outline of a dialog balloon with its arrow on the top edge, built in the frame that
/// `orientation` calls for but not yet rotated into place.
pub fn canonical_balloon_path(r: Rect, orientation: Orientation, arrow_length: f64) -> Polygon {
    let frame = balloon_frame(r, orientation);
    let mid_x = frame.center().x;
    let shoulder = frame.min_y() + arrow_length;
    let half_notch = arrow_length / 2.0;

    Polygon::from_points(vec![
        point(frame.min_x(), shoulder),
        point(mid_x - half_notch, shoulder),
        point(mid_x, frame.min_y()),
        point(mid_x + half_notch, shoulder),
        point(frame.max_x(), shoulder),
        point(frame.max_x(), frame.max_y()),
        point(frame.min_x(), frame.max_y()),
    ])
}

/// The transform that rotates a canonical balloon so that its arrow points along `orientation`, while keeping
/// it inside the normalized bounds of `r`.
///
/// Mirrored orientations use the transform of their base orientation.
pub fn dialog_balloon_transform(r: Rect, orientation: Orientation) -> RigidTransform {
    let frame = balloon_frame(r, orientation);

    match orientation.base() {
        Orientation::Down => {
            RigidTransform::new(Angle::half_turn(), vector(frame.width(), frame.height()))
        }
        Orientation::Left => RigidTransform::new(-Angle::quarter_turn(), vector(0.0, frame.width())),
        Orientation::Right => {
            RigidTransform::new(Angle::quarter_turn(), vector(frame.height(), 0.0))
        }
        _ => RigidTransform::identity(),
    }
}

/// The outline of a "speech bubble": a rectangle with a triangular arrow sticking out of one edge.
///
/// The arrow tip sits at the middle of the edge, and the notch is `arrow_length` wide and `arrow_length` deep.
/// The outline is built in a frame starting at `(0, 0)` whose size is that of `r` less the offset of its origin;
/// the result always lies within that frame.
///
/// An `arrow_length` of half the shorter side or more produces a degenerate or self-intersecting outline. This
/// is not checked.
pub fn dialog_balloon_path(r: Rect, orientation: Orientation, arrow_length: f64) -> Polygon {
    let frame = balloon_frame(r, Orientation::Up);
    if arrow_length >= frame.width().min(frame.height()) / 2.0 {
        log::warn!(
            "Arrow length {} is too long for a {}x{} balloon; the outline will intersect itself",
            arrow_length,
            frame.width(),
            frame.height()
        );
    }

    let canonical = canonical_balloon_path(r, orientation, arrow_length);
    let transform = dialog_balloon_transform(r, orientation);
    log::trace!(
        "Building {:?} balloon in {:?} with {:?}",
        orientation,
        r,
        transform
    );

    if transform.is_identity() {
        canonical
    } else {
        canonical.transformed(&transform)
    }
}

/// A fixed arrow pointing up, 40 wide and 75 tall.
#[inline]
pub fn arrow_path() -> Polygon {
    Polygon::from_points(vec![
        point(50.0, 0.0),
        point(70.0, 25.0),
        point(60.0, 25.0),
        point(60.0, 75.0),
        point(40.0, 75.0),
        point(40.0, 25.0),
        point(30.0, 25.0),
    ])
}

/// The largest square that fits in `r`, centered inside of it. This is the usual frame for a circular avatar
/// mask.
#[inline]
pub fn centered_square(r: Rect) -> Rect {
    let side = r.width().min(r.height());
    rect(
        r.min_x() + (r.width() - side) / 2.0,
        r.min_y() + (r.height() - side) / 2.0,
        side,
        side,
    )
}

/// The ellipse inscribed in `r`, approximated with straight lines that stray no further than `tolerance` from
/// the true curve. A tolerance that is not positive falls back to [`DEFAULT_OVAL_TOLERANCE`].
///
/// An empty rectangle produces its four collapsed corners.
pub fn oval_path(r: Rect, tolerance: f64) -> Polygon {
    if r.width() <= 0.0 || r.height() <= 0.0 {
        return rectangle_path(r);
    }

    let tolerance = if tolerance > 0.0 {
        tolerance
    } else {
        DEFAULT_OVAL_TOLERANCE
    };
    let radii = vector(r.width() / 2.0, r.height() / 2.0);
    let arc = lyon_geom::Arc {
        center: r.center(),
        radii,
        start_angle: lyon_geom::Angle::radians(0.0),
        sweep_angle: lyon_geom::Angle::radians(std::f64::consts::PI * 2.0),
        x_rotation: lyon_geom::Angle::radians(0.0),
    };

    let start = arc.from();
    let mut points: Vec<Point> = Some(start).into_iter().chain(arc.flattened(tolerance)).collect();

    // the sweep ends where it began
    let closes_on_start = points.last().map_or(false, |last| {
        approx::abs_diff_eq!(last.x, start.x, epsilon = tolerance)
            && approx::abs_diff_eq!(last.y, start.y, epsilon = tolerance)
    });
    if points.len() > 1 && closes_on_start {
        points.pop();
    }

    Polygon::from_points(points)
}
