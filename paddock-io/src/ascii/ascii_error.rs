use paddock_core::containers::CloudError;
use paddock_core::layout::PointAttribute;
use thiserror::Error;

/// Result type for reading and writing text point clouds
pub type Result<T> = std::result::Result<T, AsciiError>;

/// Errors produced by the text point cloud codec. Line and column indices are zero-based.
#[derive(Error, Debug)]
pub enum AsciiError {
    /// The format tag is not registered
    #[error("Unsupported point cloud format '{0}'")]
    UnsupportedFormat(String),

    /// A line has a different number of columns than the format requires
    #[error("Expected {expected} columns but found {actual} in line {line}")]
    ColumnCountMismatch {
        expected: usize,
        actual: usize,
        line: usize,
    },

    /// An empty line where a record was expected
    #[error("Empty record in line {line}")]
    MalformedRecord { line: usize },

    /// A position or normal column does not hold a decimal number
    #[error("Expected a decimal number in line {line}, column {column}, found '{token}'")]
    NumericParseError {
        line: usize,
        column: usize,
        token: String,
    },

    /// A color column does not hold an integer in `[0, 255]`
    #[error("Expected a color value in [0, 255] in line {line}, column {column}, found '{token}'")]
    ColorRangeError {
        line: usize,
        column: usize,
        token: String,
    },

    /// The format requires an attribute that the point cloud does not have
    #[error("Format requires attribute {0} which the point cloud does not have")]
    AttributeMissing(PointAttribute),

    /// An attribute of the point cloud has a different length than its positions
    #[error("Attribute {attribute} has {actual} entries but the point cloud has {expected} points")]
    AttributeLengthMismatch {
        attribute: PointAttribute,
        expected: usize,
        actual: usize,
    },

    /// [std::io::Error] of the underlying writer
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CloudError> for AsciiError {
    fn from(err: CloudError) -> Self {
        match err {
            CloudError::LengthMismatch {
                attribute,
                expected,
                actual,
            } => AsciiError::AttributeLengthMismatch {
                attribute,
                expected,
                actual,
            },
            CloudError::AttributePresenceMismatch { attribute, .. } => {
                AsciiError::AttributeMissing(attribute)
            }
        }
    }
}
