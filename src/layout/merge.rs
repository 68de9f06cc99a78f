//! Greedy box extraction: compress the solid voxels of a grid into a small
//! set of non-overlapping axis-aligned boxes.
//!
//! Every unvisited solid voxel seeds a unit box, which is then grown one slab
//! at a time in each of the six directions (x, y, z; negative side first)
//! until the next slab contains a voxel that is missing, non-solid or already
//! claimed. The resulting boxes depend on direction order and grid iteration
//! order, but always cover each solid voxel exactly once.

use crate::core::types::{IVec3, NEIGHBOR_DIRECTIONS};
use crate::math::BoundingBox;
use crate::voxel::{CoordSet, VoxelGrid};

/// Slab of voxels just outside `bbox` on the side given by `dir`.
fn next_slab(bbox: &BoundingBox, dir: IVec3) -> BoundingBox {
    let pick = |min: i32, max: i32, d: i32| match d {
        1 => (max + 1, max + 1),
        -1 => (min - 1, min - 1),
        _ => (min, max),
    };

    let (x0, x1) = pick(bbox.min.x, bbox.max.x, dir.x);
    let (y0, y1) = pick(bbox.min.y, bbox.max.y, dir.y);
    let (z0, z1) = pick(bbox.min.z, bbox.max.z, dir.z);

    BoundingBox::new(IVec3::new(x0, y0, z0), IVec3::new(x1, y1, z1))
}

/// Merge solid voxels into boxes. See the module docs for the algorithm.
pub fn extract_boxes(grid: &VoxelGrid) -> Vec<BoundingBox> {
    let mut visited = CoordSet::default();
    let mut boxes = Vec::new();

    for (coord, voxel) in grid.iter() {
        if !voxel.solid || visited.contains(&coord) {
            continue;
        }
        visited.insert(coord);

        let mut bbox = BoundingBox::point(coord);

        for dir in NEIGHBOR_DIRECTIONS {
            loop {
                let slab = next_slab(&bbox, dir);
                let can_expand = slab
                    .voxels()
                    .all(|c| grid.is_solid(c) && !visited.contains(&c));
                if !can_expand {
                    break;
                }

                visited.extend(slab.voxels());
                bbox = bbox.merged(&slab);
            }
        }

        boxes.push(bbox);
    }

    log::trace!("Merged {} solid voxels into {} boxes", visited.len(), boxes.len());
    boxes
}
