//! Voxel state stored in the layout grid

use serde::{Deserialize, Serialize};

/// Handle to a movable object owned by an external object table
///
/// The grid never owns the object; the id is only meaningful to whoever
/// instantiated the objects from the spawn list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

/// State of a single materialized voxel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelState {
    /// Structural block (floor, wall, obstacle)
    pub solid: bool,
    /// Movable object visually occupying this cell; does not make it solid
    pub occupant: Option<ObjectId>,
}

impl VoxelState {
    /// Empty, unoccupied voxel
    pub const EMPTY: VoxelState = VoxelState {
        solid: false,
        occupant: None,
    };

    /// Solid structural block
    pub const SOLID: VoxelState = VoxelState {
        solid: true,
        occupant: None,
    };

    /// Non-solid voxel holding a movable object
    pub fn occupied(id: ObjectId) -> Self {
        Self {
            solid: false,
            occupant: Some(id),
        }
    }

    /// Check if voxel carries no information and need not be stored
    pub fn is_empty(&self) -> bool {
        !self.solid && self.occupant.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(VoxelState::EMPTY.is_empty());
        assert!(VoxelState::default().is_empty());
        assert!(!VoxelState::SOLID.is_empty());
    }

    #[test]
    fn test_occupied_is_not_solid() {
        let v = VoxelState::occupied(ObjectId(4));
        assert!(!v.solid);
        assert!(!v.is_empty());
        assert_eq!(v.occupant, Some(ObjectId(4)));
    }
}
