use paddock_core::containers::PointCloud;

use crate::ascii::Result;

/// Base trait for all types that support writing point data
pub trait PointWriter {
    /// Write the points in the given `PointCloud` to the associated `PointWriter`. Repeated calls append.
    fn write(&mut self, points: &PointCloud) -> Result<()>;
    /// Flush this `PointWriter`, ensuring that all points are written to their destination
    fn flush(&mut self) -> Result<()>;
}
