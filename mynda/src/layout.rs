//! Line and text layout: kerning, advances, alignment and final scaling.

use log::{debug, trace};
use region_types::{GlyphId, Region};

use crate::error::Result;
use crate::glyph::glyph_region;
use crate::provider::FontProvider;
use crate::text::{Align, Text};

/// Lays out a single line of text.
///
/// Returns the positioned region of every glyph that produced ink, plus
/// the line's total horizontal advance. Whitespace and other empty glyphs
/// contribute no region but still advance the cursor. An empty line yields
/// no regions and zero extent.
pub fn line_regions<F, R>(font: &F, line: &str) -> Result<(Vec<R>, f32)>
where
    F: FontProvider,
    R: Region,
{
    let mut regions = Vec::new();
    let mut cursor = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    for ch in line.chars() {
        let glyph = font.glyph_index(ch);
        if let Some(prev) = prev {
            cursor += font.kerning(prev, glyph);
        }
        let outline = font.load_outline(glyph)?;
        trace!("glyph {glyph} ({ch:?}): {} points at x={cursor}", outline.num_points());
        let region: R = glyph_region(&outline);
        if !region.is_empty() {
            regions.push(region.translate(cursor, 0.0));
        }
        cursor += font.advance_width(glyph);
        prev = Some(glyph);
    }
    Ok((regions, cursor))
}

/// Lays out a full text run and normalizes it to the requested size.
///
/// Lines are stacked downward by the font's line advance, each shifted
/// horizontally per the text's alignment; everything is then unioned into
/// one region, centered on the origin and scaled so that one line advance
/// maps to `size`.
///
/// The first glyph whose outline cannot be loaded aborts the conversion;
/// no partial region is returned.
pub fn text_region<F, R>(font: &F, text: &Text, size: f32) -> Result<R>
where
    F: FontProvider,
    R: Region,
{
    let line_height = font.advance_height();
    let mut placed: Vec<R> = Vec::new();
    let mut y_offset = 0.0f32;
    for line in text.text().split('\n') {
        let (regions, extent) = line_regions(font, line)?;
        let x_shift = align_shift(text.align(), extent);
        debug!("line {line:?}: extent={extent} shift={x_shift} y={y_offset}");
        placed.extend(
            regions
                .into_iter()
                .map(|region: R| region.translate(x_shift, y_offset)),
        );
        y_offset -= line_height;
    }
    let factor = size / line_height;
    debug!("composed {} glyph regions, scale factor {factor}", placed.len());
    let merged = placed.into_iter().fold(R::empty(), R::union);
    Ok(merged.center_and_scale(factor))
}

fn align_shift(align: Align, extent: f32) -> f32 {
    match align {
        Align::Left => 0.0,
        Align::Right => -extent,
        Align::Center => -extent / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_shift_per_mode() {
        assert_eq!(align_shift(Align::Left, 20.0), 0.0);
        assert_eq!(align_shift(Align::Right, 20.0), -20.0);
        assert_eq!(align_shift(Align::Center, 20.0), -10.0);
    }
}
