//! Composition of font glyph outlines and text runs into planar regions.
//!
//! Mynda is a mid level library: it sits above font parsing, which supplies
//! glyph outlines and metrics through the [`FontProvider`] trait, and below
//! whatever geometry backend consumes the composed shape through the
//! [`Region`](region_types::Region) trait.
//!
//! The pipeline runs strictly bottom-up: one contour becomes a closed
//! polygon, a glyph's contours fold into one region via union/difference
//! driven by their winding direction, a line of glyphs is positioned by
//! advance widths and kerning, and a multi-line run is stacked, aligned,
//! unioned and normalized to a requested size. The top-level entry point is
//! [`text_region`]; [`line_regions`] and [`glyph_region`] expose the
//! intermediate stages for hosts that want to parallelize per line or per
//! glyph.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod contour;
mod error;
mod glyph;
mod layout;
mod provider;
mod text;

/// Expose the shared geometry types crate.
pub use region_types as types;

pub use error::{Error, Result};
pub use glyph::glyph_region;
pub use layout::{line_regions, text_region};
pub use provider::{FontProvider, GlyphOutline};
pub use text::{Align, Text};

/// Type for a glyph identifier.
pub type GlyphId = region_types::GlyphId;
