//! Containers for point cloud data.
//!
//! Paddock stores point data column-wise: every attribute lives in its own `Vec<Vector3<f64>>`. This
//! matches how text formats are read and written, one attribute group after another per line.

mod point_cloud;
pub use self::point_cloud::*;
