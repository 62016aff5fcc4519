//! Reconstruction of closed polygonal contours from quadratic outlines.

use kurbo::{BezPath, PathEl};
use region_types::{Point, PointFlags};

/// Maximum deviation, in font units, between a quadratic segment and its
/// flattened approximation.
const FLATTEN_TOLERANCE: f64 = 0.25;

/// Composition directive derived from a contour's traversal direction.
///
/// The sign follows the source font's contour winding convention; it says
/// nothing about absolute clockwise or counter-clockwise orientation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Winding {
    /// The contour bounds filled geometry.
    Solid,
    /// The contour bounds a hole.
    Hole,
}

/// Builds the closed polygon approximating one contour and classifies its
/// winding direction.
///
/// Consecutive off-curve points imply an on-curve point at their midpoint,
/// synthesized here before curve emission. The rolling previous point is
/// seeded from the contour's last point so the closing edge is handled the
/// same way as interior edges. A contour with fewer than two points yields
/// an empty polygon.
pub(crate) fn contour_to_polygon(
    points: &[Point<f32>],
    flags: &[PointFlags],
) -> (Vec<Point<f32>>, Winding) {
    debug_assert_eq!(points.len(), flags.len());
    if points.len() < 2 {
        return (Vec::new(), Winding::Solid);
    }
    let mut verts: Vec<CurvePoint> = Vec::with_capacity(points.len() * 2);
    let mut sum = 0.0f32;
    let mut prev = *points.last().unwrap();
    let mut prev_off = flags.last().unwrap().is_off_curve();
    for (&point, flag) in points.iter().zip(flags) {
        let off = flag.is_off_curve();
        if off && prev_off {
            verts.push(CurvePoint {
                point: prev.midpoint(point),
                control: false,
            });
        }
        verts.push(CurvePoint {
            point,
            control: off,
        });
        sum += (point.x - prev.x) * (point.y + prev.y);
        prev = point;
        prev_off = off;
    }
    let winding = if sum > 0.0 {
        Winding::Solid
    } else {
        Winding::Hole
    };
    (flatten_closed(&verts), winding)
}

/// One vertex of the reconstructed curve: either on the contour or a
/// quadratic control point between two on-curve neighbors.
#[derive(Copy, Clone, Debug)]
struct CurvePoint {
    point: Point<f32>,
    control: bool,
}

/// Emits the cyclic vertex list as a path of lines and quadratics and
/// flattens it into polygon vertices.
fn flatten_closed(verts: &[CurvePoint]) -> Vec<Point<f32>> {
    // Start from an on-curve vertex; after midpoint synthesis every control
    // point is flanked by on-curve neighbors.
    let Some(first_on) = verts.iter().position(|v| !v.control) else {
        return Vec::new();
    };
    let start = verts[first_on].point;
    let mut path = BezPath::new();
    path.move_to(to_kurbo(start));
    let mut pending: Option<Point<f32>> = None;
    let rest = verts[first_on + 1..].iter().chain(&verts[..first_on]);
    for &CurvePoint { point, control } in rest {
        if control {
            pending = Some(point);
        } else {
            match pending.take() {
                Some(ctrl) => path.quad_to(to_kurbo(ctrl), to_kurbo(point)),
                None => path.line_to(to_kurbo(point)),
            }
        }
    }
    if let Some(ctrl) = pending.take() {
        path.quad_to(to_kurbo(ctrl), to_kurbo(start));
    }
    path.close_path();

    let mut polygon: Vec<Point<f32>> = Vec::new();
    kurbo::flatten(
        path.elements().iter().copied(),
        FLATTEN_TOLERANCE,
        |el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => {
                polygon.push(Point::new(p.x as f32, p.y as f32))
            }
            _ => {}
        },
    );
    // The closing edge is implicit in the polygon representation.
    if polygon.len() > 1 && polygon.last() == polygon.first() {
        polygon.pop();
    }
    polygon
}

fn to_kurbo(point: Point<f32>) -> kurbo::Point {
    kurbo::Point::new(point.x as f64, point.y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn on(x: f32, y: f32) -> (Point<f32>, PointFlags) {
        (Point::new(x, y), PointFlags::on_curve())
    }

    fn off(x: f32, y: f32) -> (Point<f32>, PointFlags) {
        (Point::new(x, y), PointFlags::off_curve())
    }

    fn build(contour: &[(Point<f32>, PointFlags)]) -> (Vec<Point<f32>>, Winding) {
        let points: Vec<_> = contour.iter().map(|(p, _)| *p).collect();
        let flags: Vec<_> = contour.iter().map(|(_, f)| *f).collect();
        contour_to_polygon(&points, &flags)
    }

    #[test]
    fn winding_unit_square() {
        // The direction that accumulates a positive sum is solid; its
        // reverse is a hole.
        let square = [on(0.0, 0.0), on(0.0, 1.0), on(1.0, 1.0), on(1.0, 0.0)];
        let (polygon, winding) = build(&square);
        assert_eq!(winding, Winding::Solid);
        assert_eq!(polygon.len(), 4);

        let mut reversed = square;
        reversed.reverse();
        let (_, winding) = build(&reversed);
        assert_eq!(winding, Winding::Hole);
    }

    #[test]
    fn all_on_curve_polygon_matches_input() {
        let square = [on(0.0, 0.0), on(0.0, 10.0), on(8.0, 10.0), on(8.0, 0.0)];
        let (polygon, _) = build(&square);
        let expected: Vec<_> = square.iter().map(|(p, _)| *p).collect();
        assert_eq!(polygon, expected);
    }

    #[test]
    fn implicit_midpoint_synthesis() {
        // Two adjacent off-curve points imply an on-curve point at their
        // midpoint; it must show up as a polygon vertex.
        let contour = [on(-1.0, 0.0), off(0.0, 0.0), off(2.0, 2.0), on(3.0, 1.0)];
        let (polygon, _) = build(&contour);
        assert!(
            polygon.contains(&Point::new(1.0, 1.0)),
            "expected implicit on-curve point at (1, 1) in {polygon:?}"
        );
    }

    #[test]
    fn all_off_curve_contour() {
        // Every edge pair implies a midpoint, including the closing edge.
        let contour = [off(0.0, 0.0), off(0.0, 2.0), off(2.0, 2.0), off(2.0, 0.0)];
        let (polygon, _) = build(&contour);
        for expected in [
            Point::new(0.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 0.0),
        ] {
            assert!(
                polygon.contains(&expected),
                "missing implied midpoint {expected:?} in {polygon:?}"
            );
        }
    }

    #[test]
    fn off_curve_start_rotates_to_on_curve() {
        let contour = [off(0.0, 4.0), on(0.0, 0.0), on(4.0, 0.0), on(4.0, 4.0)];
        let (polygon, _) = build(&contour);
        assert_eq!(polygon.first(), Some(&Point::new(0.0, 0.0)));
        // The closing quadratic through the leading control point lands
        // back on the start without duplicating it.
        assert_eq!(
            polygon.iter().filter(|p| **p == Point::new(0.0, 0.0)).count(),
            1
        );
    }

    #[test]
    fn degenerate_contours_are_empty() {
        assert!(build(&[]).0.is_empty());
        assert!(build(&[on(1.0, 1.0)]).0.is_empty());
    }

    #[test]
    fn quadratic_segments_are_flattened() {
        // A single quad between on-curve points must contribute
        // intermediate vertices, not just its endpoints.
        let contour = [on(0.0, 0.0), off(50.0, 100.0), on(100.0, 0.0)];
        let (polygon, _) = build(&contour);
        assert!(polygon.len() > 3, "quad was not subdivided: {polygon:?}");
        assert!(polygon
            .iter()
            .any(|p| p.y > 25.0 && (p.x - 50.0).abs() < 30.0));
    }
}
