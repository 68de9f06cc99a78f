//! Core type aliases and re-exports

pub use glam::IVec3;

/// Integer voxel coordinate: x = length axis, y = height axis, z = width axis
pub type VoxelCoords = IVec3;

/// The six axis neighbours in x, y, z order, negative side first
pub const NEIGHBOR_DIRECTIONS: [IVec3; 6] = [
    IVec3::NEG_X,
    IVec3::X,
    IVec3::NEG_Y,
    IVec3::Y,
    IVec3::NEG_Z,
    IVec3::Z,
];

/// Standard Result type for the generator
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
