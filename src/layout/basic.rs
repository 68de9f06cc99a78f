//! Empty layout: floor and perimeter walls, plus the helpers every other
//! strategy builds on.

use crate::core::types::{IVec3, VoxelCoords};
use crate::core::{Rng, rand_range};
use crate::math::BoundingBox;
use crate::voxel::VoxelGrid;

use super::config::LayoutConfig;
use super::{Dimensions, LayoutGenerator, exit_pad_width};

/// Paint the solid floor (y = 0) and the perimeter walls up to `dims.height`.
pub fn generate_floor_and_walls(grid: &mut VoxelGrid, dims: Dimensions) {
    let Dimensions { length, height, width } = dims;

    for x in 0..length {
        for z in 0..width {
            grid.set_solid(IVec3::new(x, 0, z));
        }
    }

    for x in [0, length - 1] {
        for y in 0..height {
            for z in 0..width {
                grid.set_solid(IVec3::new(x, y, z));
            }
        }
    }

    for x in 0..length {
        for y in 0..height {
            for z in [0, width - 1] {
                grid.set_solid(IVec3::new(x, y, z));
            }
        }
    }
}

/// Exit pad with its corner at `(x, 1, z)`, `pad_width` wide along z.
pub(crate) fn exit_pad_at(x: i32, z: i32, pad_width: i32) -> BoundingBox {
    BoundingBox::new(IVec3::new(x, 1, z), IVec3::new(x + 1, 2, z + pad_width))
}

/// Floor and perimeter only; agents spawn anywhere on the floor.
pub struct EmptyLayout {
    pub(crate) num_agents: i32,
    pub(crate) dims: Dimensions,
    pub(crate) config: LayoutConfig,
}

impl EmptyLayout {
    pub fn new(num_agents: i32, config: LayoutConfig) -> Self {
        Self {
            num_agents,
            dims: Dimensions::default(),
            config,
        }
    }

    pub(crate) fn pad_width(&self) -> i32 {
        exit_pad_width(&self.config, self.num_agents)
    }
}

impl LayoutGenerator for EmptyLayout {
    fn init(&mut self, rng: &mut Rng) {
        let c = &self.config;
        self.dims.length = rand_range(c.length.min, c.length.max, rng);
        self.dims.width = rand_range(c.width.min, c.width.max, rng);
        self.dims.height = rand_range(c.height.min, c.height.max, rng);
    }

    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn exit_pad_width(&self) -> Option<i32> {
        Some(self.pad_width())
    }

    fn generate(&mut self, grid: &mut VoxelGrid, _rng: &mut Rng) {
        generate_floor_and_walls(grid, self.dims);
    }

    fn level_exit(&self, _grid: &VoxelGrid, rng: &mut Rng) -> BoundingBox {
        let pad_width = self.pad_width();
        debug_assert!(self.dims.width - 2 >= pad_width);

        let Dimensions { length, width, .. } = self.dims;
        let x = rand_range(length - 2, length - 1, rng);
        let z = rand_range(1, width - 1 - pad_width, rng);
        exit_pad_at(x, z, pad_width)
    }

    fn starting_positions(&self, _grid: &VoxelGrid, rng: &mut Rng) -> Vec<VoxelCoords> {
        let Dimensions { length, width, .. } = self.dims;
        let mut positions: Vec<VoxelCoords> = Vec::with_capacity(self.num_agents as usize);

        for _ in 0..self.num_agents {
            for _ in 0..self.config.spawn_attempts {
                let pos = IVec3::new(rand_range(1, length - 1, rng), 1, rand_range(1, width - 1, rng));
                if !positions.contains(&pos) {
                    positions.push(pos);
                    break;
                }
            }
        }

        if positions.len() < self.num_agents as usize {
            log::warn!(
                "Placed only {} of {} agents after {} attempts each",
                positions.len(), self.num_agents, self.config.spawn_attempts
            );
        }
        positions
    }
}
