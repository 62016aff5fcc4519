//! The font collaborator interface.

use region_types::{GlyphId, Point, PointFlags};

use crate::error::Result;

/// Interface to a parsed font, supplying glyph metrics and outline data.
///
/// Implementations sit on top of an actual font parser; this crate never
/// reads font files itself. All distances are in font units and all
/// outlines use the font's quadratic curve representation.
pub trait FontProvider {
    /// Maps a character to its nominal glyph identifier.
    fn glyph_index(&self, ch: char) -> GlyphId;

    /// Returns the horizontal advance for the given glyph.
    fn advance_width(&self, glyph: GlyphId) -> f32;

    /// Returns the vertical distance between successive baselines.
    ///
    /// Implementations conventionally measure the vertical metric of the
    /// line break glyph.
    fn advance_height(&self) -> f32;

    /// Returns the kerning adjustment between two adjacent glyphs.
    fn kerning(&self, prev: GlyphId, curr: GlyphId) -> f32;

    /// Loads the outline data for the given glyph.
    ///
    /// Contours must be ordered so that an outer boundary precedes the
    /// holes cut out of it; the composer folds contours in source order
    /// without any containment analysis.
    fn load_outline(&self, glyph: GlyphId) -> Result<GlyphOutline>;
}

/// A glyph's quadratic outline.
///
/// Points and flags are stored as parallel arrays covering the whole glyph,
/// with contours delimited by the index of their final point, matching the
/// storage convention of TrueType outlines. A glyph with no ink (a space,
/// for example) has no contours at all.
#[derive(Clone, Default, Debug)]
pub struct GlyphOutline {
    points: Vec<Point<f32>>,
    flags: Vec<PointFlags>,
    contour_ends: Vec<u16>,
}

impl GlyphOutline {
    /// Creates an outline from parallel point/flag arrays and contour end
    /// indices.
    ///
    /// `points` and `flags` must have the same length; each entry of
    /// `contour_ends` is the index of the last point of one contour, in
    /// ascending order.
    pub fn new(points: Vec<Point<f32>>, flags: Vec<PointFlags>, contour_ends: Vec<u16>) -> Self {
        debug_assert_eq!(points.len(), flags.len());
        Self {
            points,
            flags,
            contour_ends,
        }
    }

    /// Returns true if the outline has no contours.
    pub fn is_empty(&self) -> bool {
        self.contour_ends.is_empty()
    }

    /// Returns the total number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns an iterator over the point/flag slices of each contour.
    ///
    /// Malformed ranges (an end index before the running start, or past the
    /// point array) are skipped.
    pub fn contours(&self) -> impl Iterator<Item = (&[Point<f32>], &[PointFlags])> + '_ {
        let mut start = 0usize;
        self.contour_ends.iter().filter_map(move |&end| {
            let end = end as usize;
            if end < start || end >= self.points.len() || end >= self.flags.len() {
                log::warn!(
                    "skipping malformed contour range {start}..={end} in outline with {} points",
                    self.points.len()
                );
                return None;
            }
            let contour = (&self.points[start..=end], &self.flags[start..=end]);
            start = end + 1;
            Some(contour)
        })
    }
}
