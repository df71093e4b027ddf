use std::fmt::Display;

/// A point attribute that a [PointCloud](crate::containers::PointCloud) can store. Every attribute
/// is held in memory as a `Vector3<f64>`, independent of how it is encoded in a file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointAttribute {
    Position3D,
    Normal3D,
    /// RGB color with each channel normalized to `[0, 1]`
    ColorRgb,
}

impl PointAttribute {
    /// Returns the name of this attribute
    /// ```
    /// # use paddock_core::layout::*;
    /// assert_eq!(PointAttribute::Normal3D.name(), "Normal3D");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            PointAttribute::Position3D => "Position3D",
            PointAttribute::Normal3D => "Normal3D",
            PointAttribute::ColorRgb => "ColorRGB",
        }
    }
}

impl Display for PointAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Module containing the default attribute constants
pub mod attributes {
    use super::PointAttribute;

    /// Attribute for a 3D position
    pub const POSITION_3D: PointAttribute = PointAttribute::Position3D;
    /// Attribute for a 3D point normal
    pub const NORMAL: PointAttribute = PointAttribute::Normal3D;
    /// Attribute for an RGB color
    pub const COLOR_RGB: PointAttribute = PointAttribute::ColorRgb;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_names_are_distinct() {
        let names = [
            attributes::POSITION_3D.name(),
            attributes::NORMAL.name(),
            attributes::COLOR_RGB.name(),
        ];
        for (idx, name) in names.iter().enumerate() {
            assert!(!names[idx + 1..].contains(name));
        }
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(attributes::COLOR_RGB.to_string(), "ColorRGB");
        assert_eq!(
            format!("{}", attributes::POSITION_3D),
            attributes::POSITION_3D.name()
        );
    }
}
