//! Error types associated with text composition.

use region_types::GlyphId;

/// Errors that may occur when composing text into a region.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The font collaborator could not produce outline data for a glyph.
    ///
    /// Any glyph failure aborts the whole conversion; there is no partial
    /// or placeholder-glyph recovery.
    #[error("failed to load outline data for glyph {0}")]
    GlyphLoad(GlyphId),
}

/// Result type alias for composition operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_glyph() {
        let err = Error::GlyphLoad(GlyphId::new(7));
        assert_eq!(err.to_string(), "failed to load outline data for glyph gid7");
    }
}
