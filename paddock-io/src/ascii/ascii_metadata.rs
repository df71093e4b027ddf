use paddock_core::meta::Metadata;
use std::fmt::Display;

use super::FormatTag;

/// `Metadata` implementation for text point clouds.
/// Text formats have no header, so the only things known are the format and the number of records.
#[derive(Debug, Clone)]
pub struct AsciiMetadata {
    format: FormatTag,
    number_of_points: usize,
}

impl AsciiMetadata {
    pub fn new(format: FormatTag, number_of_points: usize) -> Self {
        Self {
            format,
            number_of_points,
        }
    }

    pub fn format(&self) -> FormatTag {
        self.format
    }
}

impl Display for AsciiMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ascii Metadata")?;
        writeln!(f, "\tFormat: {}", self.format)?;
        writeln!(f, "\tNumber of points: {}", self.number_of_points)
    }
}

impl Metadata for AsciiMetadata {
    fn bounds(&self) -> Option<paddock_core::math::AABB<f64>> {
        None
    }

    fn number_of_points(&self) -> Option<usize> {
        Some(self.number_of_points)
    }

    fn get_named_field(&self, field_name: &str) -> Option<Box<dyn std::any::Any>> {
        match field_name {
            "format" => Some(Box::new(self.format)),
            _ => None,
        }
    }
}
