//! Test fixtures shared between the mynda crates.
//!
//! Provides hand-authored glyph outlines, an in-memory [`TestFont`] with
//! fixed metrics and kerning, and [`PolyRegion`], a polygon-soup
//! implementation of the `Region` trait with a computable bounding box.

mod font;
pub mod outlines;
mod region;

pub use font::{TestFont, ADVANCE_HEIGHT, MISSING_GLYPH};
pub use region::{Loop, PolyRegion};
