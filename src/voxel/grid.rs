//! Sparse voxel grid backing a generated level

use std::collections::{HashMap, HashSet};
use std::collections::hash_map::DefaultHasher;
use std::hash::BuildHasherDefault;

use super::voxel::VoxelState;
use crate::core::types::VoxelCoords;

/// Fixed-key hasher so iteration order only depends on insertion history
pub type GridHasher = BuildHasherDefault<DefaultHasher>;

/// Set of voxel coordinates with the same deterministic hashing as the grid
pub type CoordSet = HashSet<VoxelCoords, GridHasher>;

/// Sparse mapping from voxel coordinates to voxel state
///
/// Missing entries are empty and non-solid. Empty, unoccupied states are
/// never stored. No bounds checking is done; callers stay inside the
/// dimensions of the layout that painted the grid.
#[derive(Clone, Debug, Default)]
pub struct VoxelGrid {
    voxels: HashMap<VoxelCoords, VoxelState, GridHasher>,
}

impl VoxelGrid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the state at a coordinate, `None` if empty
    pub fn get(&self, coord: VoxelCoords) -> Option<&VoxelState> {
        self.voxels.get(&coord)
    }

    /// Insert or overwrite a voxel
    ///
    /// Setting an empty, unoccupied state removes the entry.
    pub fn set(&mut self, coord: VoxelCoords, state: VoxelState) {
        if state.is_empty() {
            self.voxels.remove(&coord);
        } else {
            self.voxels.insert(coord, state);
        }
    }

    /// Mark a voxel as a solid block
    pub fn set_solid(&mut self, coord: VoxelCoords) {
        self.set(coord, VoxelState::SOLID);
    }

    /// Check whether the voxel at a coordinate is solid
    pub fn is_solid(&self, coord: VoxelCoords) -> bool {
        self.voxels.get(&coord).is_some_and(|v| v.solid)
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.voxels.clear();
    }

    /// Number of materialized voxels
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// True when nothing is materialized
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Number of solid voxels
    pub fn solid_count(&self) -> usize {
        self.voxels.values().filter(|v| v.solid).count()
    }

    /// Iterate over all materialized (coord, state) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (VoxelCoords, &VoxelState)> {
        self.voxels.iter().map(|(c, v)| (*c, v))
    }
}
