//! Glyph identifiers.
//!
//! Fonts address glyphs by index rather than by character; we represent the
//! index as a distinct type.

/// A 16-bit glyph identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphId(u16);

impl GlyphId {
    /// The identifier reserved for unknown glyphs.
    pub const NOTDEF: GlyphId = GlyphId(0);

    /// Construct a new `GlyphId`.
    pub const fn new(raw: u16) -> Self {
        GlyphId(raw)
    }

    /// The identifier as a u16.
    pub const fn to_u16(self) -> u16 {
        self.0
    }
}

impl Default for GlyphId {
    fn default() -> Self {
        GlyphId::NOTDEF
    }
}

impl std::fmt::Display for GlyphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gid{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::GlyphId;

    #[test]
    fn default_is_notdef() {
        assert_eq!(GlyphId::default(), GlyphId::NOTDEF);
    }

    #[test]
    fn display() {
        assert_eq!(GlyphId::new(42).to_string(), "gid42");
    }
}
