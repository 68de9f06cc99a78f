//! Cave layout: a closed cavity carved by probabilistic region growth below a
//! solid ceiling.
//!
//! Growth is breadth-first from a handful of seed points. Each accepted
//! neighbour multiplies the growth probability by a decay factor, which keeps
//! the cavity (and the queue) bounded.

use std::collections::VecDeque;

use crate::core::types::{IVec3, NEIGHBOR_DIRECTIONS, VoxelCoords};
use crate::core::{Rng, frand, rand_range, shuffle};
use crate::math::BoundingBox;
use crate::voxel::{CoordSet, VoxelGrid};

use super::basic::{EmptyLayout, generate_floor_and_walls};
use super::config::LayoutConfig;
use super::{Dimensions, LayoutGenerator};

/// Standable cells: empty space directly above a solid voxel.
///
/// For every interior `(x, z)` column, scans down from `start_y` and reports
/// the cell above the first solid voxel found.
pub fn free_voxels(grid: &VoxelGrid, length: i32, width: i32, start_y: i32) -> Vec<VoxelCoords> {
    let mut free = Vec::new();

    for x in 1..length - 1 {
        for z in 1..width - 1 {
            for y in (1..=start_y).rev() {
                if grid.is_solid(IVec3::new(x, y - 1, z)) {
                    free.push(IVec3::new(x, y, z));
                    break;
                }
            }
        }
    }

    free
}

/// Region-growth carver for a single cavity.
#[derive(Clone, Debug)]
pub struct CaveCarver {
    pub length: i32,
    pub width: i32,
    /// Ceiling level; the cavity occupies `1..=cave_height`.
    pub cave_height: i32,
    pub growth_prob: f32,
    pub growth_decay: f32,
}

impl CaveCarver {
    pub fn new(length: i32, width: i32, cave_height: i32, config: &LayoutConfig) -> Self {
        Self {
            length,
            width,
            cave_height,
            growth_prob: config.growth_prob,
            growth_decay: config.growth_decay,
        }
    }

    /// Whether the cavity may extend into `p`.
    pub fn in_bounds(&self, p: VoxelCoords) -> bool {
        p.x >= 2 && p.x < self.length - 2 &&
        p.z >= 1 && p.z < self.width - 1 &&
        p.y >= 1 && p.y <= self.cave_height
    }

    /// Random seed points at ceiling level, one per ~7 units of the longer side.
    pub fn seed_points(&self, rng: &mut Rng) -> Vec<VoxelCoords> {
        let num_seeds = (self.length.max(self.width) / 7 + 1).max(1);

        (0..num_seeds)
            .map(|_| {
                let x = rand_range(2, self.length - 2, rng);
                let z = rand_range(2, self.width - 2, rng);
                IVec3::new(x, self.cave_height, z)
            })
            .collect()
    }

    /// Grow the cavity from `seeds`.
    ///
    /// One uniform draw is made per offered neighbour, before any other check,
    /// so the result is a pure function of the seeds and the generator state.
    pub fn grow(&self, seeds: &[VoxelCoords], rng: &mut Rng) -> CoordSet {
        let mut growth_prob = self.growth_prob;
        let mut cave = CoordSet::default();
        let mut queue = VecDeque::new();

        for &seed in seeds {
            if cave.insert(seed) {
                queue.push_back(seed);
            }
        }

        while let Some(curr) = queue.pop_front() {
            for dir in NEIGHBOR_DIRECTIONS {
                let next = curr + dir;

                if frand(rng) >= growth_prob {
                    continue;
                }
                if cave.contains(&next) || !self.in_bounds(next) {
                    continue;
                }

                queue.push_back(next);
                cave.insert(next);
                growth_prob *= self.growth_decay;
            }
        }

        cave
    }

    /// Close the cavity: solid ceiling outside the cave, solid shell around it.
    pub fn paint(&self, cave: &CoordSet, grid: &mut VoxelGrid) {
        for x in 1..self.length - 1 {
            for z in 1..self.width - 1 {
                let coord = IVec3::new(x, self.cave_height, z);
                if !cave.contains(&coord) {
                    grid.set_solid(coord);
                }
            }
        }

        for &coord in cave {
            for dir in NEIGHBOR_DIRECTIONS {
                let adjacent = coord + dir;
                if adjacent.y > self.cave_height || cave.contains(&adjacent) {
                    continue;
                }
                grid.set_solid(adjacent);
            }
        }
    }

    /// Seed, grow and paint in one go; returns the cavity.
    pub fn carve(&self, grid: &mut VoxelGrid, rng: &mut Rng) -> CoordSet {
        let seeds = self.seed_points(rng);
        let cave = self.grow(&seeds, rng);
        self.paint(&cave, grid);
        cave
    }
}

pub struct CaveLayout {
    base: EmptyLayout,
    cave_height: i32,
    cave: CoordSet,
    free_voxels: Vec<VoxelCoords>,
}

impl CaveLayout {
    pub fn new(num_agents: i32, config: LayoutConfig) -> Self {
        Self {
            base: EmptyLayout::new(num_agents, config),
            cave_height: 0,
            cave: CoordSet::default(),
            free_voxels: Vec::new(),
        }
    }

    pub fn cave_height(&self) -> i32 {
        self.cave_height
    }

    /// Cavity carved by the last `generate`.
    pub fn cave(&self) -> &CoordSet {
        &self.cave
    }

    /// Shuffled standable cells found after carving.
    pub fn free_voxels(&self) -> &[VoxelCoords] {
        &self.free_voxels
    }
}

impl LayoutGenerator for CaveLayout {
    fn init(&mut self, rng: &mut Rng) {
        self.base.init(rng);

        let c = &self.base.config;
        self.cave_height = rand_range(c.cave_height.min, c.cave_height.max, rng);
        self.base.dims.height = rand_range(c.height.min, c.height.max, rng) + self.cave_height;
    }

    fn dimensions(&self) -> Dimensions {
        self.base.dims
    }

    fn exit_pad_width(&self) -> Option<i32> {
        Some(self.base.pad_width())
    }

    fn generate(&mut self, grid: &mut VoxelGrid, rng: &mut Rng) {
        let dims = self.base.dims;
        generate_floor_and_walls(grid, dims);

        let carver = CaveCarver::new(dims.length, dims.width, self.cave_height, &self.base.config);
        self.cave = carver.carve(grid, rng);

        self.free_voxels = free_voxels(grid, dims.length, dims.width, self.cave_height + 1);
        shuffle(&mut self.free_voxels, rng);

        log::debug!(
            "Cave layout: {} cave voxels, {} free voxels",
            self.cave.len(), self.free_voxels.len()
        );
    }

    fn level_exit(&self, grid: &VoxelGrid, _rng: &mut Rng) -> BoundingBox {
        let pad_width = self.base.pad_width();
        debug_assert!(self.base.dims.width - 2 >= pad_width);

        let fits = |v: &VoxelCoords| {
            (v.z..v.z + pad_width).all(|z| !grid.is_solid(IVec3::new(v.x, v.y, z)))
        };

        match self.free_voxels.iter().rev().find(|v| fits(v)) {
            Some(&v) => BoundingBox::new(v, IVec3::new(v.x + 1, v.y + 1, v.z + pad_width)),
            None => {
                log::warn!("No room for the exit pad, using the default location");
                BoundingBox::new(IVec3::ONE, IVec3::splat(2))
            }
        }
    }

    fn starting_positions(&self, _grid: &VoxelGrid, _rng: &mut Rng) -> Vec<VoxelCoords> {
        let num_agents = self.base.num_agents as usize;
        if self.free_voxels.len() < num_agents {
            log::warn!("Only {} free voxels for {} agents", self.free_voxels.len(), num_agents);
        }
        self.free_voxels.iter().take(num_agents).copied().collect()
    }
}
