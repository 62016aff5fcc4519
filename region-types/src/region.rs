//! The planar region abstraction consumed by the composition engine.

use crate::Point;

/// An opaque composite planar shape.
///
/// The engine never inspects a region's internal representation; it only
/// folds regions together with union and difference and positions them with
/// affine operations. Implement this for whatever polygon or
/// signed-distance backend consumes the composed shape.
///
/// The empty region is the identity element for [`union`](Self::union), so
/// folding any sequence of regions can always start from
/// [`empty`](Self::empty).
pub trait Region: Sized {
    /// Returns the empty region.
    fn empty() -> Self;

    /// Returns true if this region contains no geometry.
    fn is_empty(&self) -> bool;

    /// Builds a region from the vertices of a closed polygon.
    ///
    /// The final vertex connects back to the first implicitly.
    fn from_polygon(vertices: Vec<Point<f32>>) -> Self;

    /// Returns the union of this region and `other`.
    #[must_use]
    fn union(self, other: Self) -> Self;

    /// Returns this region with `other` subtracted from it.
    #[must_use]
    fn difference(self, other: Self) -> Self;

    /// Returns this region translated by `(dx, dy)`.
    #[must_use]
    fn translate(self, dx: f32, dy: f32) -> Self;

    /// Returns this region centered on the origin and uniformly scaled by
    /// `factor`.
    #[must_use]
    fn center_and_scale(self, factor: f32) -> Self;
}
