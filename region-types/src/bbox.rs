use crate::Point;

/// Minimum and maximum extents of a rectangular region.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Minimum extent in the x direction-- the left side of a region.
    pub x_min: T,
    /// Minimum extent in the y direction. In the Y-up coordinate system
    /// used by fonts, this is the bottom of a region.
    pub y_min: T,
    /// Maximum extent in the x direction-- the right side of a region.
    pub x_max: T,
    /// Maximum extent in the y direction. In a Y-up coordinate system,
    /// this is the top of a region.
    pub y_max: T,
}

impl BoundingBox<f32> {
    /// Returns the smallest box containing every point in the slice, or
    /// `None` for an empty slice.
    pub fn of_points(points: &[Point<f32>]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = BoundingBox {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x,
            y_max: first.y,
        };
        for point in &points[1..] {
            bbox.x_min = bbox.x_min.min(point.x);
            bbox.y_min = bbox.y_min.min(point.y);
            bbox.x_max = bbox.x_max.max(point.x);
            bbox.y_max = bbox.y_max.max(point.y);
        }
        Some(bbox)
    }

    /// Returns the smallest box containing both this box and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Horizontal extent of the box.
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Vertical extent of the box.
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// The point at the center of the box.
    pub fn center(&self) -> Point<f32> {
        Point::new(
            (self.x_min + self.x_max) * 0.5,
            (self.y_min + self.y_max) * 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_points() {
        let points = [
            Point::new(1.0, -2.0),
            Point::new(-3.0, 4.0),
            Point::new(0.5, 0.0),
        ];
        let bbox = BoundingBox::of_points(&points).unwrap();
        assert_eq!(bbox.x_min, -3.0);
        assert_eq!(bbox.y_min, -2.0);
        assert_eq!(bbox.x_max, 1.0);
        assert_eq!(bbox.y_max, 4.0);
        assert!(BoundingBox::of_points(&[]).is_none());
    }

    #[test]
    fn union_and_extents() {
        let a = BoundingBox::of_points(&[Point::new(0.0, 0.0), Point::new(2.0, 1.0)]).unwrap();
        let b = BoundingBox::of_points(&[Point::new(-1.0, 3.0)]).unwrap();
        let merged = a.union(b);
        assert_eq!(merged.width(), 3.0);
        assert_eq!(merged.height(), 3.0);
        assert_eq!(merged.center(), Point::new(0.5, 1.5));
    }
}
