use std::io::Write;

use log::{debug, trace};
use paddock_core::containers::PointCloud;
use paddock_core::layout::PointAttribute;

use super::{AsciiError, ColumnEncoding, FormatDescriptor, Result, DEFAULT_PRECISION};
use crate::base::PointWriter;

/// Output settings of text writers
pub trait AsciiFormat {
    /// Number of digits after the decimal point for position and normal columns
    fn set_precision(&mut self, precision: usize);
}

pub(crate) struct RawAsciiWriter<T: Write> {
    writer: T,
    precision: usize,
    format: &'static FormatDescriptor,
}

impl<T: Write> RawAsciiWriter<T> {
    pub fn from_write(write: T, format: &'static FormatDescriptor) -> Self {
        Self {
            writer: write,
            precision: DEFAULT_PRECISION,
            format,
        }
    }

    pub fn format(&self) -> &'static FormatDescriptor {
        self.format
    }

    pub fn into_inner(mut self) -> Result<T> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Every attribute of the format has to be present with one entry per point, even if there are no
    /// points. Attributes of the point cloud that the format does not store are ignored
    fn check_attributes(&self, points: &PointCloud) -> Result<()> {
        for attribute in self.format.optional_attributes() {
            check_attribute_length(attribute, points.len(), points.attribute(attribute).len())?;
        }
        Ok(())
    }

    fn write_point(&mut self, points: &PointCloud, index: usize) -> Result<()> {
        for (column_index, column) in self.format.columns().iter().enumerate() {
            if column_index > 0 {
                self.writer.write_all(b" ")?;
            }
            let value = points.attribute(column.attribute())[index][column.component()];
            match column.encoding() {
                ColumnEncoding::FixedPoint => write!(self.writer, "{:.*}", self.precision, value)?,
                ColumnEncoding::Byte => write!(self.writer, "{}", color_channel_to_byte(value))?,
            }
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

fn check_attribute_length(attribute: PointAttribute, expected: usize, actual: usize) -> Result<()> {
    if actual == 0 {
        return Err(AsciiError::AttributeMissing(attribute));
    }
    if actual != expected {
        return Err(AsciiError::AttributeLengthMismatch {
            attribute,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Maps a normalized color channel to `[0, 255]`, rounding to the nearest integer
fn color_channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

impl<T: Write> AsciiFormat for RawAsciiWriter<T> {
    fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
    }
}

impl<T: Write> PointWriter for RawAsciiWriter<T> {
    fn write(&mut self, points: &PointCloud) -> Result<()> {
        self.check_attributes(points)?;
        debug!(
            "Writing {} points in format '{}'",
            points.len(),
            self.format.tag()
        );
        for index in 0..points.len() {
            self.write_point(points, index)?;
        }
        trace!("Wrote {} points", points.len());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(AsciiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{
        resolve, test_data_colors, test_data_normals, test_data_positions, XYZN_BYTES,
        XYZRGB_BYTES, XYZ_BYTES,
    };
    use anyhow::Result;
    use paddock_core::layout::attributes;
    use paddock_core::nalgebra::Vector3;

    fn write_to_vec(points: &PointCloud, tag: &str) -> Result<Vec<u8>> {
        let mut writer = RawAsciiWriter::from_write(Vec::new(), resolve(tag)?);
        writer.write(points)?;
        Ok(writer.into_inner()?)
    }

    #[test]
    fn test_write_xyz() -> Result<()> {
        let points = PointCloud::from_positions(test_data_positions());
        assert_eq!(write_to_vec(&points, "xyz")?, XYZ_BYTES);
        Ok(())
    }

    #[test]
    fn test_write_xyzn() -> Result<()> {
        let points =
            PointCloud::from_attributes(test_data_positions(), test_data_normals(), vec![])?;
        assert_eq!(write_to_vec(&points, "xyzn")?, XYZN_BYTES);
        Ok(())
    }

    #[test]
    fn test_write_xyzrgb() -> Result<()> {
        let points = PointCloud::from_attributes(test_data_positions(), vec![], test_data_colors())?;
        assert_eq!(write_to_vec(&points, "xyzrgb")?, XYZRGB_BYTES);
        Ok(())
    }

    #[test]
    fn test_write_ignores_extra_attributes() -> Result<()> {
        let points = PointCloud::from_attributes(
            test_data_positions(),
            test_data_normals(),
            test_data_colors(),
        )?;
        assert_eq!(write_to_vec(&points, "xyz")?, XYZ_BYTES);
        Ok(())
    }

    #[test]
    fn test_fixed_width_independent_of_magnitude() -> Result<()> {
        let points = PointCloud::from_positions(vec![
            Vector3::new(0.0, -0.5, 1234.5),
            Vector3::new(1.0 / 3.0, 2.0, 1e-12),
        ]);
        let text = String::from_utf8(write_to_vec(&points, "xyz")?)?;
        assert_eq!(
            text,
            "0.0000000000 -0.5000000000 1234.5000000000\n0.3333333333 2.0000000000 0.0000000000\n"
        );
        Ok(())
    }

    #[test]
    fn test_color_rounding() {
        assert_eq!(color_channel_to_byte(1.0), 255);
        assert_eq!(color_channel_to_byte(0.0), 0);
        assert_eq!(color_channel_to_byte(0.5), 128);
        assert_eq!(color_channel_to_byte(128.0 / 255.0), 128);
        assert_eq!(color_channel_to_byte(1.5), 255);
        assert_eq!(color_channel_to_byte(-0.2), 0);
    }

    #[test]
    fn test_set_precision() -> Result<()> {
        let mut writer = RawAsciiWriter::from_write(Vec::new(), resolve("xyz")?);
        writer.set_precision(2);
        writer.write(&PointCloud::from_positions(vec![Vector3::new(1.0, 2.126, -3.0)]))?;
        assert_eq!(writer.into_inner()?, b"1.00 2.13 -3.00\n");
        Ok(())
    }

    #[test]
    fn test_attribute_missing() -> Result<()> {
        let points = PointCloud::from_positions(test_data_positions());
        let mut writer = RawAsciiWriter::from_write(Vec::new(), resolve("xyzn")?);
        assert!(matches!(
            writer.write(&points),
            Err(AsciiError::AttributeMissing(attributes::NORMAL))
        ));
        let mut writer = RawAsciiWriter::from_write(Vec::new(), resolve("xyzrgb")?);
        assert!(matches!(
            writer.write(&points),
            Err(AsciiError::AttributeMissing(attributes::COLOR_RGB))
        ));
        assert!(writer.into_inner()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_cloud() -> Result<()> {
        assert!(write_to_vec(&PointCloud::new(), "xyz")?.is_empty());
        for tag in &["xyzn", "xyzrgb", "xyznrgb"] {
            let mut writer = RawAsciiWriter::from_write(Vec::new(), resolve(tag)?);
            assert!(matches!(
                writer.write(&PointCloud::new()),
                Err(AsciiError::AttributeMissing(_))
            ));
        }
        Ok(())
    }

    #[test]
    fn test_attribute_length_mismatch() {
        assert!(check_attribute_length(attributes::NORMAL, 3, 3).is_ok());
        match check_attribute_length(attributes::NORMAL, 3, 2) {
            Err(AsciiError::AttributeLengthMismatch {
                attribute,
                expected,
                actual,
            }) => {
                assert_eq!(attribute, attributes::NORMAL);
                assert_eq!((expected, actual), (3, 2));
            }
            other => panic!("Expected AttributeLengthMismatch, got {:?}", other),
        }
        assert!(matches!(
            check_attribute_length(attributes::COLOR_RGB, 0, 0),
            Err(AsciiError::AttributeMissing(attributes::COLOR_RGB))
        ));
    }
}
