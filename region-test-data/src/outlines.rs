//! Hand-authored glyph outlines.
//!
//! All outlines use the solid winding direction for outer boundaries and
//! the reverse for holes, matching the convention the composer expects
//! from a font.

use mynda::GlyphOutline;
use region_types::{Point, PointFlags};

fn on(x: f32, y: f32) -> (Point<f32>, PointFlags) {
    (Point::new(x, y), PointFlags::on_curve())
}

fn off(x: f32, y: f32) -> (Point<f32>, PointFlags) {
    (Point::new(x, y), PointFlags::off_curve())
}

fn outline(contours: &[&[(Point<f32>, PointFlags)]]) -> GlyphOutline {
    let mut points = Vec::new();
    let mut flags = Vec::new();
    let mut ends = Vec::new();
    for contour in contours {
        for &(point, flag) in *contour {
            points.push(point);
            flags.push(flag);
        }
        ends.push(points.len() as u16 - 1);
    }
    GlyphOutline::new(points, flags, ends)
}

/// A solid rectangle with its lower left corner at the origin.
pub fn bar(width: f32, height: f32) -> GlyphOutline {
    outline(&[&[
        on(0.0, 0.0),
        on(0.0, height),
        on(width, height),
        on(width, 0.0),
    ]])
}

/// A solid square with its lower left corner at the origin.
pub fn square(size: f32) -> GlyphOutline {
    bar(size, size)
}

/// A 10x10 solid square with a 4x4 hole punched out of its middle.
pub fn square_with_hole() -> GlyphOutline {
    outline(&[
        &[on(0.0, 0.0), on(0.0, 10.0), on(10.0, 10.0), on(10.0, 0.0)],
        &[on(3.0, 3.0), on(7.0, 3.0), on(7.0, 7.0), on(3.0, 7.0)],
    ])
}

/// A rectangle whose right side bulges through two off-curve points,
/// implying an on-curve point at (width, height / 2).
pub fn rounded_bar(width: f32, height: f32) -> GlyphOutline {
    outline(&[&[
        on(0.0, 0.0),
        on(0.0, height),
        off(width, height),
        off(width, 0.0),
    ]])
}

/// An outline with no contours, such as a space glyph.
pub fn empty() -> GlyphOutline {
    GlyphOutline::default()
}
