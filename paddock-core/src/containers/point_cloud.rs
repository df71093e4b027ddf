#[cfg(feature = "serde")]
use std::convert::TryFrom;
use std::iter::FromIterator;

use nalgebra::{Point3, Vector3};
use thiserror::Error;

use crate::layout::{attributes, PointAttribute};
use crate::math::AABB;

/// Errors that occur when the length invariant of a [`PointCloud`] would be violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    /// An optional attribute has a different number of entries than there are positions
    #[error("{attribute} has {actual} entries but the point cloud has {expected} points")]
    LengthMismatch {
        attribute: PointAttribute,
        expected: usize,
        actual: usize,
    },
    /// Two point clouds with a different set of attributes were combined
    #[error("Cannot append points {reason} {attribute}")]
    AttributePresenceMismatch {
        attribute: PointAttribute,
        reason: &'static str,
    },
}

/// An owning point cloud with one array per attribute.
///
/// `positions` defines the number of points. `normals` and `colors` are either empty, meaning the
/// attribute is absent, or contain exactly one entry per position. Colors are stored normalized to
/// `[0, 1]` per channel.
///
/// ```
/// # use paddock_core::containers::PointCloud;
/// # use paddock_core::nalgebra::Vector3;
/// let mut cloud = PointCloud::from_positions(vec![Vector3::new(1.0, 2.0, 3.0)]);
/// assert!(!cloud.has_normals());
/// cloud.set_normals(vec![Vector3::new(0.0, 0.0, 1.0)]).unwrap();
/// assert!(cloud.has_normals());
/// assert!(cloud.set_colors(vec![]).is_ok());
/// assert!(cloud.set_colors(vec![Vector3::zeros(); 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedPointCloud")
)]
pub struct PointCloud {
    positions: Vec<Vector3<f64>>,
    normals: Vec<Vector3<f64>>,
    colors: Vec<Vector3<f64>>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `PointCloud` with room for `capacity` positions. Normal and color arrays are only
    /// reserved for when `with_normals` resp. `with_colors` is set
    pub fn with_capacity(capacity: usize, with_normals: bool, with_colors: bool) -> Self {
        let reserve = |enabled: bool| {
            if enabled {
                Vec::with_capacity(capacity)
            } else {
                Vec::new()
            }
        };
        Self {
            positions: Vec::with_capacity(capacity),
            normals: reserve(with_normals),
            colors: reserve(with_colors),
        }
    }

    /// Creates a `PointCloud` that only has positions
    pub fn from_positions(positions: Vec<Vector3<f64>>) -> Self {
        Self {
            positions,
            normals: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Creates a `PointCloud` from all three attribute arrays. Fails if `normals` or `colors` are non-empty
    /// and their length differs from the length of `positions`
    pub fn from_attributes(
        positions: Vec<Vector3<f64>>,
        normals: Vec<Vector3<f64>>,
        colors: Vec<Vector3<f64>>,
    ) -> Result<Self, CloudError> {
        let cloud = Self {
            positions,
            normals,
            colors,
        };
        cloud.validate()?;
        Ok(cloud)
    }

    /// Number of points in this `PointCloud`
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vector3<f64>] {
        &self.normals
    }

    pub fn colors(&self) -> &[Vector3<f64>] {
        &self.colors
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Returns the values of the given attribute. Absent attributes yield an empty slice
    pub fn attribute(&self, attribute: PointAttribute) -> &[Vector3<f64>] {
        match attribute {
            PointAttribute::Position3D => &self.positions,
            PointAttribute::Normal3D => &self.normals,
            PointAttribute::ColorRgb => &self.colors,
        }
    }

    /// Returns true if the given attribute is present. For a `PointCloud` without points, only positions
    /// count as present
    pub fn has_attribute(&self, attribute: PointAttribute) -> bool {
        match attribute {
            PointAttribute::Position3D => true,
            _ => !self.attribute(attribute).is_empty(),
        }
    }

    /// Replaces the normals of this `PointCloud`. An empty `normals` vector removes the attribute
    pub fn set_normals(&mut self, normals: Vec<Vector3<f64>>) -> Result<(), CloudError> {
        Self::check_length(attributes::NORMAL, self.positions.len(), normals.len())?;
        self.normals = normals;
        Ok(())
    }

    /// Replaces the colors of this `PointCloud`. An empty `colors` vector removes the attribute
    pub fn set_colors(&mut self, colors: Vec<Vector3<f64>>) -> Result<(), CloudError> {
        Self::check_length(attributes::COLOR_RGB, self.positions.len(), colors.len())?;
        self.colors = colors;
        Ok(())
    }

    /// Appends all points of `other` to this `PointCloud`, leaving `other` empty. Both clouds have to
    /// carry the same optional attributes, unless this `PointCloud` is empty, in which case it takes over
    /// the attributes of `other`
    pub fn append(&mut self, other: &mut PointCloud) -> Result<(), CloudError> {
        if other.is_empty() {
            return Ok(());
        }
        if !self.is_empty() {
            for attribute in [attributes::NORMAL, attributes::COLOR_RGB] {
                match (self.has_attribute(attribute), other.has_attribute(attribute)) {
                    (true, false) => {
                        return Err(CloudError::AttributePresenceMismatch {
                            attribute,
                            reason: "without",
                        })
                    }
                    (false, true) => {
                        return Err(CloudError::AttributePresenceMismatch {
                            attribute,
                            reason: "with additional",
                        })
                    }
                    _ => {}
                }
            }
        }
        self.positions.append(&mut other.positions);
        self.normals.append(&mut other.normals);
        self.colors.append(&mut other.colors);
        Ok(())
    }

    /// Pushes a single point. Like [`append`](Self::append), the point has to carry the same optional
    /// attributes as the points already in this `PointCloud`
    pub fn push_point(
        &mut self,
        position: Vector3<f64>,
        normal: Option<Vector3<f64>>,
        color: Option<Vector3<f64>>,
    ) -> Result<(), CloudError> {
        let mut point = Self {
            positions: vec![position],
            normals: normal.into_iter().collect(),
            colors: color.into_iter().collect(),
        };
        self.append(&mut point)
    }

    /// Removes all points, keeping the allocated memory
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.colors.clear();
    }

    /// Checks the length invariant of all optional attributes
    pub fn validate(&self) -> Result<(), CloudError> {
        let expected = self.positions.len();
        Self::check_length(attributes::NORMAL, expected, self.normals.len())?;
        Self::check_length(attributes::COLOR_RGB, expected, self.colors.len())
    }

    /// Returns the bounding box of all positions, or `None` if there are no points
    pub fn bounds(&self) -> Option<AABB<f64>> {
        AABB::from_points(self.positions.iter().map(|position| Point3::from(*position)))
    }

    fn check_length(
        attribute: PointAttribute,
        expected: usize,
        actual: usize,
    ) -> Result<(), CloudError> {
        if actual != 0 && actual != expected {
            return Err(CloudError::LengthMismatch {
                attribute,
                expected,
                actual,
            });
        }
        Ok(())
    }
}

/// Deserialized attribute arrays before the length invariant is checked
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedPointCloud {
    positions: Vec<Vector3<f64>>,
    normals: Vec<Vector3<f64>>,
    colors: Vec<Vector3<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedPointCloud> for PointCloud {
    type Error = CloudError;

    fn try_from(unchecked: UncheckedPointCloud) -> Result<Self, Self::Error> {
        Self::from_attributes(unchecked.positions, unchecked.normals, unchecked.colors)
    }
}

impl FromIterator<Vector3<f64>> for PointCloud {
    fn from_iter<T: IntoIterator<Item = Vector3<f64>>>(iter: T) -> Self {
        Self::from_positions(iter.into_iter().collect())
    }
}
