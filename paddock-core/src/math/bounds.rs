use nalgebra::{Point3, Scalar};

/// 3D axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AABB<T: Scalar + PartialOrd> {
    min: Point3<T>,
    max: Point3<T>,
}

impl<T: Scalar + PartialOrd + Copy> AABB<T> {
    /// Creates a new AABB from the given minimum and maximum coordinates without checking that min <= max
    pub fn from_min_max_unchecked(min: Point3<T>, max: Point3<T>) -> Self {
        Self { min, max }
    }

    /// Creates the smallest AABB that contains all of the given points. Returns `None` if `points` is empty
    /// ```
    /// # use paddock_core::math::AABB;
    /// # use nalgebra::Point3;
    /// let bounds = AABB::from_points([Point3::new(1.0, -1.0, 0.0), Point3::new(-1.0, 1.0, 2.0)]).unwrap();
    /// assert_eq!(*bounds.min(), Point3::new(-1.0, -1.0, 0.0));
    /// assert_eq!(*bounds.max(), Point3::new(1.0, 1.0, 2.0));
    /// ```
    pub fn from_points<I: IntoIterator<Item = Point3<T>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let initial = Self::from_min_max_unchecked(first, first);
        Some(iter.fold(initial, |bounds, point| {
            Self::extend_with_point(&bounds, &point)
        }))
    }

    /// Returns the minimum point of this AABB
    pub fn min(&self) -> &Point3<T> {
        &self.min
    }

    /// Returns the maximum point of this AABB
    pub fn max(&self) -> &Point3<T> {
        &self.max
    }

    /// Extends the given AABB so that it contains the given point.
    pub fn extend_with_point(bounds: &AABB<T>, point: &Point3<T>) -> AABB<T> {
        let pick_min = |a: T, b: T| if a < b { a } else { b };
        let pick_max = |a: T, b: T| if a > b { a } else { b };
        Self {
            min: Point3::new(
                pick_min(bounds.min.x, point.x),
                pick_min(bounds.min.y, point.y),
                pick_min(bounds.min.z, point.z),
            ),
            max: Point3::new(
                pick_max(bounds.max.x, point.x),
                pick_max(bounds.max.y, point.y),
                pick_max(bounds.max.z, point.z),
            ),
        }
    }
}
