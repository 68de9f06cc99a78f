//! Walls layout: a run of full-width walls the agents must climb over using
//! movable objects stacked from the spawn area.

use crate::core::types::{IVec3, VoxelCoords};
use crate::core::{Rng, rand_range, shuffle};
use crate::math::BoundingBox;
use crate::voxel::VoxelGrid;

use super::basic::{EmptyLayout, exit_pad_at, generate_floor_and_walls};
use super::config::LayoutConfig;
use super::{Dimensions, LayoutGenerator};

/// Floor units required between consecutive walls.
const WALL_SPACING: i32 = 2;
/// Floor units kept free after the last wall.
const END_CLEARANCE: i32 = 3;

/// A single wall spanning the level width at `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    pub x: i32,
    pub height: i32,
}

pub struct WallsLayout {
    base: EmptyLayout,
    walls: Vec<Wall>,
    first_wall_x: i32,
    max_wall_x: i32,
    max_wall_height: i32,
    agent_spawns: Vec<VoxelCoords>,
    object_spawns: Vec<VoxelCoords>,
}

impl WallsLayout {
    pub fn new(num_agents: i32, config: LayoutConfig) -> Self {
        Self {
            base: EmptyLayout::new(num_agents, config),
            walls: Vec::new(),
            first_wall_x: 3,
            max_wall_x: 0,
            max_wall_height: 0,
            agent_spawns: Vec::new(),
            object_spawns: Vec::new(),
        }
    }

    /// Walls placed by `init`, in increasing x order.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Objects needed to build a staircase over every wall.
    pub fn min_num_objects(&self) -> i32 {
        self.walls.iter().map(|w| 2 * (w.height - 1)).sum()
    }

    fn place_walls(&mut self, rng: &mut Rng) {
        let c = &self.base.config;
        let num_walls = rand_range(0, c.max_num_walls + 1, rng);
        let min_length = num_walls * WALL_SPACING + 4 + END_CLEARANCE;
        let length = rand_range(min_length, c.walls_max_length, rng);
        self.base.dims.length = length;

        if num_walls <= 0 {
            return;
        }

        let tallest = c.tallest_wall;
        let first_x = rand_range(4, 4 + 1 + length - min_length, rng);
        let first_height = rand_range(1, tallest + 1, rng);
        self.first_wall_x = first_x;
        self.max_wall_x = first_x;
        self.max_wall_height = first_height;
        self.walls.push(Wall { x: first_x, height: first_height });

        let mut prev_x = first_x;
        for i in 1..num_walls {
            let height = rand_range(1, tallest + 1, rng);
            let remaining = END_CLEARANCE + (num_walls - i - 1) * WALL_SPACING;

            if prev_x + WALL_SPACING >= length - remaining {
                log::warn!("Could not generate wall {}, not enough space", i);
                break;
            }

            let x = rand_range(prev_x + WALL_SPACING, length - remaining, rng);
            prev_x = x;

            self.walls.push(Wall { x, height });
            self.max_wall_height = self.max_wall_height.max(height);
            self.max_wall_x = self.max_wall_x.max(x);
        }
    }

    fn pick_spawns(&mut self, rng: &mut Rng) {
        let num_agents = self.base.num_agents as usize;
        let width = self.base.dims.width;

        let mut candidates: Vec<VoxelCoords> = (1..self.first_wall_x)
            .flat_map(|x| (1..width - 1).map(move |z| IVec3::new(x, 1, z)))
            .collect();
        shuffle(&mut candidates, rng);

        let num_agent_spawns = num_agents.min(candidates.len());
        if num_agent_spawns < num_agents {
            log::warn!("Only {} spawn candidates for {} agents", candidates.len(), num_agents);
        }
        self.agent_spawns = candidates[..num_agent_spawns].to_vec();

        let min_objects = self.min_num_objects();
        let wanted = rand_range(min_objects, min_objects + 4, rng).max(0) as usize;
        let available = candidates.len() - num_agent_spawns;
        let num_objects = wanted.min(available);
        if num_objects < wanted {
            log::warn!("Spawning {} objects, {} requested", num_objects, wanted);
        }
        self.object_spawns = candidates[num_agent_spawns..num_agent_spawns + num_objects].to_vec();
    }
}

impl LayoutGenerator for WallsLayout {
    fn init(&mut self, rng: &mut Rng) {
        self.base.init(rng);
        self.walls.clear();
        self.first_wall_x = 3;
        self.max_wall_x = 0;
        self.max_wall_height = 0;
        self.place_walls(rng);

        let c = &self.base.config;
        self.base.dims.height = rand_range(c.height.min, c.height.max, rng) + self.max_wall_height;

        self.pick_spawns(rng);

        log::debug!(
            "Walls layout: {} walls at {:?}, {} objects",
            self.walls.len(),
            self.walls.iter().map(|w| w.x).collect::<Vec<_>>(),
            self.object_spawns.len()
        );
    }

    fn dimensions(&self) -> Dimensions {
        self.base.dims
    }

    fn exit_pad_width(&self) -> Option<i32> {
        Some(self.base.pad_width())
    }

    fn generate(&mut self, grid: &mut VoxelGrid, _rng: &mut Rng) {
        generate_floor_and_walls(grid, self.base.dims);

        let width = self.base.dims.width;
        for wall in &self.walls {
            for y in 1..1 + wall.height {
                for z in 1..width - 1 {
                    grid.set_solid(IVec3::new(wall.x, y, z));
                }
            }
        }
    }

    fn level_exit(&self, _grid: &VoxelGrid, rng: &mut Rng) -> BoundingBox {
        let pad_width = self.base.pad_width();
        debug_assert!(self.base.dims.width - 2 >= pad_width);

        let Dimensions { length, width, .. } = self.base.dims;
        let x = rand_range(self.max_wall_x + 1, length - 1, rng);
        let z = rand_range(1, width - 1 - pad_width, rng);
        exit_pad_at(x, z, pad_width)
    }

    fn starting_positions(&self, _grid: &VoxelGrid, _rng: &mut Rng) -> Vec<VoxelCoords> {
        self.agent_spawns.clone()
    }

    fn object_spawn_positions(&self, _grid: &VoxelGrid) -> Vec<VoxelCoords> {
        self.object_spawns.clone()
    }
}
