use paddock_core::containers::PointCloud;
use paddock_core::meta::Metadata;

use crate::ascii::Result;

/// Base trait for all types that support reading point data
pub trait PointReader {
    /// Read `count` points from this `PointReader`. Returns a new `PointCloud` with the attributes that
    /// the underlying format stores. Fewer than `count` points are returned once the end of the data
    /// is reached.
    fn read(&mut self, count: usize) -> Result<PointCloud> {
        let mut point_cloud = PointCloud::new();
        self.read_into(&mut point_cloud, count)?;
        Ok(point_cloud)
    }
    /// Read `count` points from this `PointReader` and append them to the given `PointCloud`. On success,
    /// returns the number of points that were read. On failure, `point_cloud` is left unchanged.
    fn read_into(&mut self, point_cloud: &mut PointCloud, count: usize) -> Result<usize>;

    /// Returns the `Metadata` of the associated `PointReader`
    fn get_metadata(&self) -> &dyn Metadata;
}
