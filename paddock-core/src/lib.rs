#![warn(clippy::all)]

//! Core data structures for working with text point cloud data
//!
//! The central type is [PointCloud](crate::containers::PointCloud), an owning container with one
//! growable array per point attribute. Attributes other than positions are optional: an empty array
//! means the attribute is absent, a non-empty array must match the number of positions.

pub extern crate nalgebra;

pub mod containers;
/// Defines the attributes a point can carry
pub mod layout;
/// Bounding boxes over point positions
pub mod math;
/// Data structures for handling point cloud metadata
pub mod meta;
