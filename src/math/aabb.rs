//! Inclusive integer axis-aligned bounding box

use serde::{Deserialize, Serialize};

use crate::core::types::{IVec3, VoxelCoords};

/// Axis-aligned box over voxel coordinates, inclusive on both ends
///
/// Used for merged solid blocks as well as goal regions. The all-zero box is
/// the sentinel for "no such region".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: VoxelCoords,
    pub max: VoxelCoords,
}

impl BoundingBox {
    /// Sentinel for a region that does not exist in this layout
    pub const ZERO: BoundingBox = BoundingBox {
        min: IVec3::ZERO,
        max: IVec3::ZERO,
    };

    /// Create box from min and max corners
    pub fn new(min: VoxelCoords, max: VoxelCoords) -> Self {
        debug_assert!(min.cmple(max).all(), "malformed box {min} .. {max}");
        Self { min, max }
    }

    /// Single-voxel box
    pub fn point(p: VoxelCoords) -> Self {
        Self { min: p, max: p }
    }

    /// True for the "does not exist" sentinel
    pub fn is_sentinel(&self) -> bool {
        *self == Self::ZERO
    }

    /// min <= max on every axis
    pub fn is_well_formed(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Number of voxels along each axis
    pub fn extent(&self) -> IVec3 {
        self.max - self.min + IVec3::ONE
    }

    /// Number of voxels covered
    pub fn volume(&self) -> i64 {
        let e = self.extent();
        e.x as i64 * e.y as i64 * e.z as i64
    }

    /// Check if point is inside the box (inclusive)
    pub fn contains_point(&self, p: VoxelCoords) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Check if two boxes share at least one voxel
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Expand box to include point
    pub fn expand(&mut self, point: VoxelCoords) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Return merged box containing both
    pub fn merged(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Iterate every voxel inside the box in x, y, z order
    pub fn voxels(&self) -> impl Iterator<Item = VoxelCoords> + '_ {
        (self.min.x..=self.max.x).flat_map(move |x| {
            (self.min.y..=self.max.y).flat_map(move |y| {
                (self.min.z..=self.max.z).map(move |z| IVec3::new(x, y, z))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_box() {
        let b = BoundingBox::point(IVec3::new(3, 1, 3));
        assert_eq!(b.extent(), IVec3::ONE);
        assert_eq!(b.volume(), 1);
        assert!(b.contains_point(IVec3::new(3, 1, 3)));
        assert!(!b.contains_point(IVec3::new(3, 2, 3)));
    }

    #[test]
    fn test_sentinel() {
        assert!(BoundingBox::ZERO.is_sentinel());
        assert!(BoundingBox::default().is_sentinel());
        assert!(!BoundingBox::point(IVec3::ONE).is_sentinel());
    }

    #[test]
    fn test_contains_point_inclusive() {
        let b = BoundingBox::new(IVec3::ZERO, IVec3::new(2, 2, 2));
        assert!(b.contains_point(IVec3::ZERO));
        assert!(b.contains_point(IVec3::new(2, 2, 2)));
        assert!(!b.contains_point(IVec3::new(3, 0, 0)));
    }

    #[test]
    fn test_intersects() {
        let a = BoundingBox::new(IVec3::ZERO, IVec3::ONE);
        let b = BoundingBox::new(IVec3::ONE, IVec3::splat(2));
        let c = BoundingBox::new(IVec3::splat(2), IVec3::splat(3));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_expand_and_voxels() {
        let mut b = BoundingBox::point(IVec3::new(1, 1, 1));
        b.expand(IVec3::new(2, 1, 3));
        assert_eq!(b.min, IVec3::new(1, 1, 1));
        assert_eq!(b.max, IVec3::new(2, 1, 3));
        assert_eq!(b.volume(), 6);
        assert_eq!(b.voxels().count(), 6);
        assert!(b.is_well_formed());
    }
}
