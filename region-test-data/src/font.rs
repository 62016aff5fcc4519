//! An in-memory font with a handful of synthetic glyphs.

use mynda::{Error, FontProvider, GlyphId, GlyphOutline, Result};

use crate::outlines;

/// Line advance shared by every [`TestFont`] instance.
pub const ADVANCE_HEIGHT: f32 = 10.0;

/// Glyph mapped from `'!'`; loading its outline always fails.
pub const MISSING_GLYPH: GlyphId = GlyphId::new(9);

const SPACE: GlyphId = GlyphId::new(1);
const UPPER_A: GlyphId = GlyphId::new(2);
const UPPER_V: GlyphId = GlyphId::new(3);
const UPPER_I: GlyphId = GlyphId::new(4);
const UPPER_O: GlyphId = GlyphId::new(5);
const UPPER_D: GlyphId = GlyphId::new(6);

/// Font collaborator backed by hand-authored outlines and metrics.
///
/// Every glyph is 10 font units tall (one line advance), so a single glyph
/// scaled to size `h` has bounding height exactly `h`. The only kerning
/// pair is ('A', 'V') at -2.
#[derive(Copy, Clone, Default, Debug)]
pub struct TestFont;

impl TestFont {
    pub fn new() -> Self {
        Self
    }
}

impl FontProvider for TestFont {
    fn glyph_index(&self, ch: char) -> GlyphId {
        match ch {
            ' ' => SPACE,
            'A' => UPPER_A,
            'V' => UPPER_V,
            'I' => UPPER_I,
            'O' => UPPER_O,
            'D' => UPPER_D,
            '!' => MISSING_GLYPH,
            _ => GlyphId::NOTDEF,
        }
    }

    fn advance_width(&self, glyph: GlyphId) -> f32 {
        match glyph {
            SPACE => 5.0,
            UPPER_A => 10.0,
            UPPER_V => 12.0,
            UPPER_I | UPPER_O | UPPER_D => 10.0,
            _ => 0.0,
        }
    }

    fn advance_height(&self) -> f32 {
        ADVANCE_HEIGHT
    }

    fn kerning(&self, prev: GlyphId, curr: GlyphId) -> f32 {
        match (prev, curr) {
            (UPPER_A, UPPER_V) => -2.0,
            _ => 0.0,
        }
    }

    fn load_outline(&self, glyph: GlyphId) -> Result<GlyphOutline> {
        match glyph {
            GlyphId::NOTDEF | SPACE => Ok(outlines::empty()),
            UPPER_A => Ok(outlines::bar(8.0, 10.0)),
            UPPER_V => Ok(outlines::bar(9.0, 10.0)),
            UPPER_I => Ok(outlines::bar(6.0, 10.0)),
            UPPER_O => Ok(outlines::square_with_hole()),
            UPPER_D => Ok(outlines::rounded_bar(8.0, 10.0)),
            _ => Err(Error::GlyphLoad(glyph)),
        }
    }
}
