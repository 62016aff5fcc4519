//! A polygon-soup region for inspecting composition results.

use region_types::{BoundingBox, Point, Region};

/// One closed polygon loop inside a [`PolyRegion`].
#[derive(Clone, PartialEq, Debug)]
pub struct Loop {
    /// The loop's vertices; the last connects back to the first.
    pub vertices: Vec<Point<f32>>,
    /// True if the loop adds geometry, false if it was subtracted.
    pub solid: bool,
}

/// Planar region backed by a flat list of polygon loops.
///
/// This is not a real boolean-geometry engine: union concatenates loops
/// and difference records the subtracted loops alongside them. That is
/// enough to verify composition order, placement and scaling, because
/// holes always lie inside the solid geometry that precedes them and so
/// never affect the bounding box.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct PolyRegion {
    loops: Vec<Loop>,
}

impl PolyRegion {
    /// Returns all loops in composition order.
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    /// Returns the bounding box of the solid loops, or `None` if the
    /// region is empty.
    pub fn bounds(&self) -> Option<BoundingBox<f32>> {
        self.loops
            .iter()
            .filter(|l| l.solid)
            .filter_map(|l| BoundingBox::of_points(&l.vertices))
            .reduce(BoundingBox::union)
    }
}

impl Region for PolyRegion {
    fn empty() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    fn from_polygon(vertices: Vec<Point<f32>>) -> Self {
        Self {
            loops: vec![Loop {
                vertices,
                solid: true,
            }],
        }
    }

    fn union(mut self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        self.loops.extend(other.loops);
        self
    }

    fn difference(mut self, other: Self) -> Self {
        // Subtracting from nothing leaves nothing.
        if self.is_empty() {
            return self;
        }
        self.loops.extend(other.loops.into_iter().map(|l| Loop {
            vertices: l.vertices,
            solid: false,
        }));
        self
    }

    fn translate(mut self, dx: f32, dy: f32) -> Self {
        let delta = Point::new(dx, dy);
        for l in &mut self.loops {
            for v in &mut l.vertices {
                *v += delta;
            }
        }
        self
    }

    fn center_and_scale(mut self, factor: f32) -> Self {
        let Some(bounds) = self.bounds() else {
            return self;
        };
        let center = bounds.center();
        for l in &mut self.loops {
            for v in &mut l.vertices {
                *v = (*v - center) * factor;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> PolyRegion {
        PolyRegion::from_polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
    }

    #[test]
    fn union_with_empty_is_identity() {
        let square = unit_square();
        assert_eq!(PolyRegion::empty().union(square.clone()), square);
        assert_eq!(square.clone().union(PolyRegion::empty()), square);
    }

    #[test]
    fn difference_from_empty_is_empty() {
        assert!(PolyRegion::empty().difference(unit_square()).is_empty());
    }

    #[test]
    fn translate_moves_bounds() {
        let bounds = unit_square().translate(3.0, -1.0).bounds().unwrap();
        assert_eq!(bounds.x_min, 3.0);
        assert_eq!(bounds.y_max, 0.0);
    }

    #[test]
    fn center_and_scale_centers_on_origin() {
        let bounds = unit_square().center_and_scale(4.0).bounds().unwrap();
        assert_eq!(bounds.x_min, -2.0);
        assert_eq!(bounds.x_max, 2.0);
        assert_eq!(bounds.height(), 4.0);
        assert_eq!(bounds.center(), Point::new(0.0, 0.0));
    }
}
