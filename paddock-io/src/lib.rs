#![warn(clippy::all)]

//! Reading and writing point clouds in line-based text formats
//!
//! Every format stores one point per line with space-separated columns: `xyz` holds only positions,
//! `xyzn` adds normals, `xyzrgb` adds colors as integers in `[0, 255]` and `xyznrgb` holds both. The
//! entry points [read_point_cloud_from_bytes] and [write_point_cloud_to_bytes] work on in-memory buffers.
//! For more control, use [AsciiReader](crate::ascii::AsciiReader) and [AsciiWriter](crate::ascii::AsciiWriter).

/// Format registry, reader and writer for text point clouds
pub mod ascii;
/// Common traits for reading and writing point data
pub mod base;

pub use ascii::{AsciiError, Result};
pub use base::{read_point_cloud_from_bytes, write_point_cloud_to_bytes};
