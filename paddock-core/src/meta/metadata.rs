use crate::math::AABB;

use std::{any::Any, fmt::Display};

/// Trait that represents metadata of a point cloud. Metadata is everything that is not the point data
/// itself. Text formats carry almost none of it in the data, so most of it is derived while reading.
pub trait Metadata: Display {
    /// Returns the bounding box of the associated `Metadata`, if it is known
    fn bounds(&self) -> Option<AABB<f64>>;
    /// Returns the number of points, if it is known
    fn number_of_points(&self) -> Option<usize>;
    /// Returns the value of the metadata field named `field_name`, if it exists.
    fn get_named_field(&self, field_name: &str) -> Option<Box<dyn Any>>;
}
