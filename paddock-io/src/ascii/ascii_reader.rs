use paddock_core::containers::PointCloud;
use paddock_core::meta::Metadata;
use std::io::SeekFrom;

use crate::ascii::{resolve, FormatDescriptor, RawAsciiReader, Result};
use crate::base::{PointReader, SeekToPoint};

/// `PointReader` implementation for text point clouds held in memory
pub struct AsciiReader<'a> {
    raw_reader: RawAsciiReader<'a>,
}

impl<'a> AsciiReader<'a> {
    /// Creates a new `AsciiReader` over the given `buffer`. The `format` tag selects the column layout
    /// of each line and may carry the `mem::` prefix. The following tags are known:
    /// - xyz → `X Y Z`
    /// - xyzn → `X Y Z NX NY NZ`
    /// - xyzrgb → `X Y Z R G B`, colors as integers in `[0, 255]`
    /// - xyznrgb → `X Y Z NX NY NZ R G B`
    ///
    /// # Examples
    ///
    /// ```
    /// use paddock_io::ascii::AsciiReader;
    /// use paddock_io::base::PointReader;
    /// # fn main() -> paddock_io::Result<()> {
    /// let mut reader = AsciiReader::from_bytes(b"1.0 2.0 3.0 255 0 0\n", "mem::xyzrgb")?;
    /// let cloud = reader.read(reader.remaining_points())?;
    /// assert_eq!(cloud.colors()[0].x, 1.0);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// If `format` is not a known tag, an `UnsupportedFormat` error is returned.
    pub fn from_bytes(buffer: &'a [u8], format: &str) -> Result<Self> {
        let format = resolve(format)?;
        Ok(Self {
            raw_reader: RawAsciiReader::from_bytes(buffer, format),
        })
    }

    /// The column layout this reader parses
    pub fn format(&self) -> &'static FormatDescriptor {
        self.raw_reader.format()
    }

    /// Number of points that have not been read yet
    pub fn remaining_points(&self) -> usize {
        self.raw_reader.remaining_points()
    }
}

impl<'a> PointReader for AsciiReader<'a> {
    fn read_into(&mut self, point_cloud: &mut PointCloud, count: usize) -> Result<usize> {
        self.raw_reader.read_into(point_cloud, count)
    }

    fn get_metadata(&self) -> &dyn Metadata {
        self.raw_reader.get_metadata()
    }
}

impl<'a> SeekToPoint for AsciiReader<'a> {
    fn seek_point(&mut self, position: SeekFrom) -> Result<usize> {
        self.raw_reader.seek_point(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{AsciiError, FormatTag, XYZRGB_BYTES};
    use anyhow::Result;

    #[test]
    fn test_metadata() -> Result<()> {
        let reader = AsciiReader::from_bytes(XYZRGB_BYTES, "mem::xyzrgb")?;
        let metadata = reader.get_metadata();
        assert_eq!(metadata.number_of_points(), Some(3));
        assert!(metadata.bounds().is_none());
        let format = metadata
            .get_named_field("format")
            .and_then(|field| field.downcast::<FormatTag>().ok())
            .ok_or_else(|| anyhow::anyhow!("Missing format field"))?;
        assert_eq!(*format, FormatTag::Xyzrgb);
        assert!(metadata.to_string().contains("xyzrgb"));
        Ok(())
    }

    #[test]
    fn test_unsupported_format() {
        let reader = AsciiReader::from_bytes(XYZRGB_BYTES, "xyzzy");
        assert!(matches!(reader, Err(AsciiError::UnsupportedFormat(_))));
    }
}
