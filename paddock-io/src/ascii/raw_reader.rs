use std::convert::TryFrom;
use std::io::SeekFrom;

use log::{debug, trace};
use paddock_core::containers::PointCloud;
use paddock_core::layout::PointAttribute;
use paddock_core::meta::Metadata;
use paddock_core::nalgebra::Vector3;

use super::{AsciiError, AsciiMetadata, ColumnEncoding, FormatDescriptor, Result};
use crate::base::{PointReader, SeekToPoint};

const RECORD_DELIMITER: u8 = b'\n';
const COLUMN_DELIMITER: u8 = b' ';

/// Decodes line-based text point clouds from an in-memory buffer. The buffer is split into records
/// once on construction, parsing happens in `read_into`.
pub(crate) struct RawAsciiReader<'a> {
    records: Vec<&'a [u8]>,
    current_record: usize,
    format: &'static FormatDescriptor,
    metadata: AsciiMetadata,
}

impl<'a> RawAsciiReader<'a> {
    pub fn from_bytes(buffer: &'a [u8], format: &'static FormatDescriptor) -> Self {
        let mut records = buffer.split(|byte| *byte == RECORD_DELIMITER).collect::<Vec<_>>();
        // The final newline terminates the last record instead of starting an empty one
        if records.last().map_or(false, |record| record.is_empty()) {
            records.pop();
        }
        debug!(
            "Found {} records of format '{}' in {} bytes",
            records.len(),
            format.tag(),
            buffer.len()
        );
        let metadata = AsciiMetadata::new(format.tag(), records.len());
        Self {
            records,
            current_record: 0,
            format,
            metadata,
        }
    }

    pub fn format(&self) -> &'static FormatDescriptor {
        self.format
    }

    pub fn remaining_points(&self) -> usize {
        self.records.len() - self.current_record
    }

    /// Parses a single record into one value per attribute slot (position, normal, color)
    fn parse_record(
        record: &[u8],
        line: usize,
        format: &FormatDescriptor,
    ) -> Result<[Vector3<f64>; 3]> {
        if record.is_empty() {
            return Err(AsciiError::MalformedRecord { line });
        }
        let expected = format.column_count();
        let actual = record.split(|byte| *byte == COLUMN_DELIMITER).count();
        if actual != expected {
            return Err(AsciiError::ColumnCountMismatch {
                expected,
                actual,
                line,
            });
        }

        let mut values = [Vector3::zeros(); 3];
        for (column, (token, column_type)) in record
            .split(|byte| *byte == COLUMN_DELIMITER)
            .zip(format.columns())
            .enumerate()
        {
            let value = match column_type.encoding() {
                ColumnEncoding::FixedPoint => parse_decimal(token, line, column)?,
                ColumnEncoding::Byte => parse_color_channel(token, line, column)?,
            };
            values[attribute_slot(column_type.attribute())][column_type.component()] = value;
        }
        Ok(values)
    }
}

fn attribute_slot(attribute: PointAttribute) -> usize {
    match attribute {
        PointAttribute::Position3D => 0,
        PointAttribute::Normal3D => 1,
        PointAttribute::ColorRgb => 2,
    }
}

fn token_to_string(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into_owned()
}

fn parse_decimal(token: &[u8], line: usize, column: usize) -> Result<f64> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or_else(|| AsciiError::NumericParseError {
            line,
            column,
            token: token_to_string(token),
        })
}

/// Color channels are unsigned digit sequences in `[0, 255]`, without sign
fn parse_color_channel(token: &[u8], line: usize, column: usize) -> Result<f64> {
    Some(token)
        .filter(|token| !token.is_empty() && token.iter().all(u8::is_ascii_digit))
        .and_then(|token| std::str::from_utf8(token).ok())
        .and_then(|text| text.parse::<u16>().ok())
        .filter(|channel| (0..=255).contains(channel))
        .map(|channel| channel as f64 / 255.0)
        .ok_or_else(|| AsciiError::ColorRangeError {
            line,
            column,
            token: token_to_string(token),
        })
}

impl<'a> PointReader for RawAsciiReader<'a> {
    fn read_into(&mut self, point_cloud: &mut PointCloud, count: usize) -> Result<usize> {
        let first_record = self.current_record;
        let num_points = usize::min(count, self.remaining_points());
        let with_normals = self.format.has_attribute(PointAttribute::Normal3D);
        let with_colors = self.format.has_attribute(PointAttribute::ColorRgb);

        let mut positions = Vec::with_capacity(num_points);
        let mut normals = Vec::with_capacity(if with_normals { num_points } else { 0 });
        let mut colors = Vec::with_capacity(if with_colors { num_points } else { 0 });
        for (offset, record) in self.records[first_record..first_record + num_points]
            .iter()
            .enumerate()
        {
            let [position, normal, color] =
                Self::parse_record(record, first_record + offset, self.format)?;
            positions.push(position);
            if with_normals {
                normals.push(normal);
            }
            if with_colors {
                colors.push(color);
            }
        }
        let mut chunk = PointCloud::from_attributes(positions, normals, colors)?;
        point_cloud.append(&mut chunk)?;

        self.current_record += num_points;
        trace!(
            "Read records {}..{} of {}",
            first_record,
            self.current_record,
            self.records.len()
        );
        Ok(num_points)
    }

    fn get_metadata(&self) -> &dyn Metadata {
        &self.metadata
    }
}

impl<'a> SeekToPoint for RawAsciiReader<'a> {
    fn seek_point(&mut self, position: SeekFrom) -> Result<usize> {
        let index_from_start = match position {
            SeekFrom::Current(offset_from_current) => {
                i64::try_from(self.current_record)
                    .unwrap_or(i64::MAX)
                    .saturating_add(offset_from_current)
            }
            SeekFrom::End(offset_from_end) => i64::try_from(self.records.len())
                .unwrap_or(i64::MAX)
                .saturating_add(offset_from_end),
            SeekFrom::Start(offset_from_start) => {
                i64::try_from(offset_from_start).unwrap_or(i64::MAX)
            }
        };

        if index_from_start < 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Cannot seek before point index 0!",
            )
            .into());
        }

        self.current_record = usize::try_from(index_from_start)
            .unwrap_or(usize::MAX)
            .min(self.records.len());
        Ok(self.current_record)
    }
}
