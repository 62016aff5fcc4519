//! Composition of a glyph's contours into a single region.

use region_types::Region;

use crate::contour::{contour_to_polygon, Winding};
use crate::provider::GlyphOutline;

/// Composes all contours of a glyph into one region.
///
/// Contours fold in source order: solid contours are unioned into the
/// accumulator, hole contours are subtracted from it. The source font
/// guarantees an outer boundary appears before the holes cut out of it, so
/// no reordering or containment analysis happens here. A glyph with no ink
/// (no contours, or only degenerate ones) composes to the empty region.
pub fn glyph_region<R: Region>(outline: &GlyphOutline) -> R {
    let mut region = R::empty();
    for (points, flags) in outline.contours() {
        let (polygon, winding) = contour_to_polygon(points, flags);
        if polygon.len() < 3 {
            continue;
        }
        let piece = R::from_polygon(polygon);
        region = match winding {
            Winding::Solid => region.union(piece),
            Winding::Hole => region.difference(piece),
        };
    }
    region
}
