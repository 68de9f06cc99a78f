//! Voxel data structures

pub mod voxel;
pub mod grid;

pub use voxel::{ObjectId, VoxelState};
pub use grid::{CoordSet, VoxelGrid};
