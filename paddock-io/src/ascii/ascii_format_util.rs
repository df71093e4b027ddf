use std::fmt::Display;
use std::str::FromStr;

use paddock_core::layout::{attributes, PointAttribute};

use super::{AsciiError, Result};

/// Callers use this prefix to mark a tag as referring to an in-memory buffer instead of a file
pub const MEMORY_PREFIX: &str = "mem::";

/// Number of digits after the decimal point for position and normal columns
pub const DEFAULT_PRECISION: usize = 10;

/// The meaning of a single column in a line of a text point cloud
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColumnType {
    PositionX,
    PositionY,
    PositionZ,
    NormalX,
    NormalY,
    NormalZ,
    ColorR,
    ColorG,
    ColorB,
}

/// How the value of a column is written as text
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColumnEncoding {
    /// Decimal number with a fixed number of digits after the decimal point
    FixedPoint,
    /// Integer in `[0, 255]`, mapped to `[0, 1]` in memory
    Byte,
}

impl ColumnType {
    /// The attribute that this column belongs to
    pub fn attribute(&self) -> PointAttribute {
        match self {
            ColumnType::PositionX | ColumnType::PositionY | ColumnType::PositionZ => {
                attributes::POSITION_3D
            }
            ColumnType::NormalX | ColumnType::NormalY | ColumnType::NormalZ => attributes::NORMAL,
            ColumnType::ColorR | ColumnType::ColorG | ColumnType::ColorB => attributes::COLOR_RGB,
        }
    }

    /// Index of the vector component that this column holds
    pub fn component(&self) -> usize {
        match self {
            ColumnType::PositionX | ColumnType::NormalX | ColumnType::ColorR => 0,
            ColumnType::PositionY | ColumnType::NormalY | ColumnType::ColorG => 1,
            ColumnType::PositionZ | ColumnType::NormalZ | ColumnType::ColorB => 2,
        }
    }

    pub fn encoding(&self) -> ColumnEncoding {
        match self.attribute() {
            PointAttribute::ColorRgb => ColumnEncoding::Byte,
            _ => ColumnEncoding::FixedPoint,
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All text formats known to the codec
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// `X Y Z`
    Xyz,
    /// `X Y Z NX NY NZ`
    Xyzn,
    /// `X Y Z R G B` with integer colors
    Xyzrgb,
    /// `X Y Z NX NY NZ R G B` with integer colors
    Xyznrgb,
}

static OPTIONAL_ATTRIBUTES: [PointAttribute; 2] = [attributes::NORMAL, attributes::COLOR_RGB];

const POSITION_COLUMNS: [ColumnType; 3] = [
    ColumnType::PositionX,
    ColumnType::PositionY,
    ColumnType::PositionZ,
];

static XYZ: FormatDescriptor = FormatDescriptor {
    tag: FormatTag::Xyz,
    columns: &POSITION_COLUMNS,
};

static XYZN: FormatDescriptor = FormatDescriptor {
    tag: FormatTag::Xyzn,
    columns: &[
        ColumnType::PositionX,
        ColumnType::PositionY,
        ColumnType::PositionZ,
        ColumnType::NormalX,
        ColumnType::NormalY,
        ColumnType::NormalZ,
    ],
};

static XYZRGB: FormatDescriptor = FormatDescriptor {
    tag: FormatTag::Xyzrgb,
    columns: &[
        ColumnType::PositionX,
        ColumnType::PositionY,
        ColumnType::PositionZ,
        ColumnType::ColorR,
        ColumnType::ColorG,
        ColumnType::ColorB,
    ],
};

static XYZNRGB: FormatDescriptor = FormatDescriptor {
    tag: FormatTag::Xyznrgb,
    columns: &[
        ColumnType::PositionX,
        ColumnType::PositionY,
        ColumnType::PositionZ,
        ColumnType::NormalX,
        ColumnType::NormalY,
        ColumnType::NormalZ,
        ColumnType::ColorR,
        ColumnType::ColorG,
        ColumnType::ColorB,
    ],
};

impl FormatTag {
    /// Returns every registered format
    pub fn all() -> &'static [FormatTag] {
        &[
            FormatTag::Xyz,
            FormatTag::Xyzn,
            FormatTag::Xyzrgb,
            FormatTag::Xyznrgb,
        ]
    }

    /// The bare tag, without the memory prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Xyz => "xyz",
            FormatTag::Xyzn => "xyzn",
            FormatTag::Xyzrgb => "xyzrgb",
            FormatTag::Xyznrgb => "xyznrgb",
        }
    }

    pub fn descriptor(&self) -> &'static FormatDescriptor {
        match self {
            FormatTag::Xyz => &XYZ,
            FormatTag::Xyzn => &XYZN,
            FormatTag::Xyzrgb => &XYZRGB,
            FormatTag::Xyznrgb => &XYZNRGB,
        }
    }
}

impl FromStr for FormatTag {
    type Err = AsciiError;

    /// Parses a format tag. A leading [`MEMORY_PREFIX`] is ignored, matching is case-sensitive
    fn from_str(tag: &str) -> Result<Self> {
        let bare_tag = tag.strip_prefix(MEMORY_PREFIX).unwrap_or(tag);
        FormatTag::all()
            .iter()
            .copied()
            .find(|format| format.as_str() == bare_tag)
            .ok_or_else(|| AsciiError::UnsupportedFormat(tag.to_string()))
    }
}

impl Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The column layout of a text format
#[derive(Debug, PartialEq, Eq)]
pub struct FormatDescriptor {
    tag: FormatTag,
    columns: &'static [ColumnType],
}

impl FormatDescriptor {
    pub fn tag(&self) -> FormatTag {
        self.tag
    }

    /// The columns of a single line, in order
    pub fn columns(&self) -> &'static [ColumnType] {
        self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if any column of this format stores the given attribute
    pub fn has_attribute(&self, attribute: PointAttribute) -> bool {
        self.columns
            .iter()
            .any(|column| column.attribute() == attribute)
    }

    /// The optional attributes (everything except positions) that this format stores
    pub fn optional_attributes(&self) -> impl Iterator<Item = PointAttribute> + '_ {
        OPTIONAL_ATTRIBUTES
            .iter()
            .copied()
            .filter(move |attribute| self.has_attribute(*attribute))
    }
}

/// Looks up the column layout for the given format tag. The tag may carry the [`MEMORY_PREFIX`]
/// ```
/// # use paddock_io::ascii::{resolve, FormatTag};
/// assert_eq!(resolve("mem::xyzn").unwrap().tag(), FormatTag::Xyzn);
/// assert_eq!(resolve("xyzrgb").unwrap().column_count(), 6);
/// assert!(resolve("xyzzy").is_err());
/// ```
pub fn resolve(tag: &str) -> Result<&'static FormatDescriptor> {
    Ok(tag.parse::<FormatTag>()?.descriptor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_all_tags_with_and_without_prefix() -> anyhow::Result<()> {
        for format in FormatTag::all() {
            assert_eq!(resolve(format.as_str())?.tag(), *format);
            let prefixed = format!("{}{}", MEMORY_PREFIX, format);
            assert_eq!(resolve(&prefixed)?.tag(), *format);
        }
        Ok(())
    }

    #[test]
    fn test_resolve_unknown_tag() {
        for tag in &["xyzzy", "", "mem::", "XYZ", "mem::mem::xyz", "pts"] {
            match resolve(tag) {
                Err(AsciiError::UnsupportedFormat(reported)) => assert_eq!(reported, *tag),
                other => panic!("Expected UnsupportedFormat for '{}', got {:?}", tag, other),
            }
        }
    }

    #[test]
    fn test_descriptors_share_count_but_not_semantics() -> anyhow::Result<()> {
        let xyzn = resolve("xyzn")?;
        let xyzrgb = resolve("xyzrgb")?;
        assert_eq!(xyzn.column_count(), xyzrgb.column_count());
        assert_ne!(xyzn.columns(), xyzrgb.columns());

        assert!(xyzn.has_attribute(attributes::NORMAL));
        assert!(!xyzn.has_attribute(attributes::COLOR_RGB));
        assert!(xyzrgb.has_attribute(attributes::COLOR_RGB));
        assert!(!xyzrgb.has_attribute(attributes::NORMAL));
        assert_eq!(resolve("xyz")?.optional_attributes().count(), 0);
        assert_eq!(resolve("xyznrgb")?.optional_attributes().count(), 2);
        Ok(())
    }

    #[test]
    fn test_column_encoding() {
        assert_eq!(ColumnType::PositionY.encoding(), ColumnEncoding::FixedPoint);
        assert_eq!(ColumnType::NormalZ.encoding(), ColumnEncoding::FixedPoint);
        assert_eq!(ColumnType::ColorG.encoding(), ColumnEncoding::Byte);
        assert_eq!(ColumnType::ColorB.component(), 2);
    }
}
