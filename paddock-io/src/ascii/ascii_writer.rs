use std::io::Write;

use paddock_core::containers::PointCloud;

use crate::base::PointWriter;

use super::{resolve, AsciiFormat, FormatDescriptor, RawAsciiWriter, Result};

/// `PointWriter` implementation for text point clouds
pub struct AsciiWriter<T: Write> {
    raw_writer: RawAsciiWriter<T>,
}

impl<T: Write> AsciiWriter<T> {
    /// Creates a new `AsciiWriter` from the given `write`.
    /// The `format` tag selects the columns of each line, see [`AsciiReader::from_bytes`](super::AsciiReader::from_bytes)
    /// for the known tags. Positions and normals are written with 10 digits after the decimal point unless
    /// changed through [`AsciiFormat::set_precision`].
    ///
    /// # Examples
    ///
    /// ```
    /// use paddock_core::{containers::PointCloud, nalgebra::Vector3};
    /// use paddock_io::ascii::AsciiWriter;
    /// use paddock_io::base::PointWriter;
    /// # fn main() -> paddock_io::Result<()> {
    /// let mut writer = AsciiWriter::from_write(Vec::new(), "mem::xyz")?;
    /// writer.write(&PointCloud::from_positions(vec![Vector3::new(1.0, 2.0, 3.0)]))?;
    /// assert_eq!(writer.into_inner()?, b"1.0000000000 2.0000000000 3.0000000000\n");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// If `format` is not a known tag, an `UnsupportedFormat` error is returned.
    pub fn from_write(write: T, format: &str) -> Result<Self> {
        let format = resolve(format)?;
        Ok(Self {
            raw_writer: RawAsciiWriter::from_write(write, format),
        })
    }

    /// The column layout this writer produces
    pub fn format(&self) -> &'static FormatDescriptor {
        self.raw_writer.format()
    }

    /// Flushes this writer and returns the underlying `Write`
    pub fn into_inner(self) -> Result<T> {
        self.raw_writer.into_inner()
    }
}

impl<T: Write> PointWriter for AsciiWriter<T> {
    fn write(&mut self, points: &PointCloud) -> Result<()> {
        self.raw_writer.write(points)
    }

    fn flush(&mut self) -> Result<()> {
        self.raw_writer.flush()
    }
}

impl<T: Write> AsciiFormat for AsciiWriter<T> {
    fn set_precision(&mut self, precision: usize) {
        self.raw_writer.set_precision(precision);
    }
}
