use log::debug;
use paddock_core::containers::PointCloud;

use crate::ascii::{AsciiReader, AsciiWriter, Result};

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;

mod seek;
pub use self::seek::*;

/// Decodes all points in the given in-memory `buffer`. The `tag` selects the text format (`xyz`, `xyzn`,
/// `xyzrgb` or `xyznrgb`) and may carry the `mem::` prefix.
/// ```
/// # use paddock_io::read_point_cloud_from_bytes;
/// let cloud = read_point_cloud_from_bytes(b"1.0 2.0 3.0\n4.0 5.0 6.0\n", "mem::xyz").unwrap();
/// assert_eq!(cloud.len(), 2);
/// ```
pub fn read_point_cloud_from_bytes(buffer: &[u8], tag: &str) -> Result<PointCloud> {
    let mut reader = AsciiReader::from_bytes(buffer, tag)?;
    let num_points = reader.remaining_points();
    let point_cloud = reader.read(num_points)?;
    debug!("Read {} points from {} bytes", point_cloud.len(), buffer.len());
    Ok(point_cloud)
}

/// Encodes all points of `point_cloud` in the text format given by `tag`. Every line, including the last
/// one, is terminated by `\n`.
/// ```
/// # use paddock_io::write_point_cloud_to_bytes;
/// # use paddock_core::{containers::PointCloud, nalgebra::Vector3};
/// let cloud = PointCloud::from_positions(vec![Vector3::new(1.0, 2.0, 3.0)]);
/// let bytes = write_point_cloud_to_bytes(&cloud, "mem::xyz").unwrap();
/// assert_eq!(bytes, b"1.0000000000 2.0000000000 3.0000000000\n");
/// ```
pub fn write_point_cloud_to_bytes(point_cloud: &PointCloud, tag: &str) -> Result<Vec<u8>> {
    let mut writer = AsciiWriter::from_write(Vec::new(), tag)?;
    writer.write(point_cloud)?;
    let buffer = writer.into_inner()?;
    debug!("Wrote {} points into {} bytes", point_cloud.len(), buffer.len());
    Ok(buffer)
}
