//! Level session: owns the random stream, the voxel grid and the active
//! layout, and rebuilds all three on every reset.

use serde::{Deserialize, Serialize};

use crate::core::types::VoxelCoords;
use crate::core::{Result, Rng, rand_range, rng_from_seed};
use crate::layout::{Dimensions, GridLayout, LayoutConfig, LayoutType};
use crate::math::BoundingBox;
use crate::voxel::{ObjectId, VoxelGrid, VoxelState};

/// Episode seeds are drawn from `[0, MAX_EPISODE_SEED)`.
pub const MAX_EPISODE_SEED: i32 = 10000;

/// Everything a simulation needs to instantiate one generated level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Seed the generator was reset to for this level.
    pub seed: u64,
    pub layout_type: LayoutType,
    pub dimensions: Dimensions,
    /// Merged static geometry.
    pub boxes: Vec<BoundingBox>,
    /// `BoundingBox::ZERO` when the layout has no exit pad.
    pub exit_pad: BoundingBox,
    /// `BoundingBox::ZERO` when the layout has no building zone.
    pub building_zone: BoundingBox,
    pub agent_positions: Vec<VoxelCoords>,
    /// Object `i` spawns at `object_positions[i]` and is `ObjectId(i)` in the grid.
    pub object_positions: Vec<VoxelCoords>,
}

impl Level {
    /// Whether an agent standing at `pos` is on the exit pad.
    pub fn agent_at_exit(&self, pos: VoxelCoords) -> bool {
        !self.exit_pad.is_sentinel() && self.exit_pad.contains_point(pos)
    }

    /// Whether `pos` lies in the building zone.
    pub fn agent_in_building_zone(&self, pos: VoxelCoords) -> bool {
        !self.building_zone.is_sentinel() && self.building_zone.contains_point(pos)
    }

    /// Number of agents from `positions` standing on the exit pad.
    pub fn agents_at_exit(&self, positions: &[VoxelCoords]) -> usize {
        positions.iter().filter(|&&p| self.agent_at_exit(p)).count()
    }
}

/// Generates one level at a time from a single seeded stream.
pub struct LevelSession {
    num_agents: i32,
    layout_type: LayoutType,
    rng: Rng,
    grid: VoxelGrid,
    layout: GridLayout,
}

impl LevelSession {
    pub fn new(num_agents: i32, layout_type: LayoutType, config: LayoutConfig) -> Self {
        Self {
            num_agents,
            layout_type,
            rng: rng_from_seed(0),
            grid: VoxelGrid::new(),
            layout: GridLayout::new(config),
        }
    }

    /// Reseed the stream; the next `reset` derives its episode seed from it.
    pub fn seed(&mut self, seed: u64) {
        self.rng = rng_from_seed(seed);
    }

    pub fn num_agents(&self) -> i32 {
        self.num_agents
    }

    pub fn layout_type(&self) -> LayoutType {
        self.layout_type
    }

    /// Switch strategy for subsequent resets.
    pub fn set_layout_type(&mut self, layout_type: LayoutType) {
        self.layout_type = layout_type;
    }

    /// Grid of the most recent level, with movable objects marked as occupants.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Build a fresh level.
    ///
    /// A new episode seed is drawn from the current stream, logged, and used
    /// to reseed the stream before anything else is generated, so any level
    /// can be replayed from the logged value alone.
    pub fn reset(&mut self) -> Result<Level> {
        let seed = rand_range(0, MAX_EPISODE_SEED, &mut self.rng) as u64;
        self.rng = rng_from_seed(seed);
        log::info!("Using seed {}", seed);

        self.grid.clear();

        self.layout.init(self.num_agents, self.layout_type, &mut self.rng)?;
        self.layout.generate(&mut self.grid, &mut self.rng)?;

        let boxes = self.layout.extract_primitives(&self.grid)?;
        let exit_pad = self.layout.level_exit(&self.grid, &mut self.rng)?;
        let building_zone = self.layout.building_zone(&self.grid)?;
        let agent_positions = self.layout.starting_positions(&self.grid, &mut self.rng)?;
        let object_positions = self.layout.object_spawn_positions(&self.grid)?;

        for (i, &pos) in object_positions.iter().enumerate() {
            self.grid.set(pos, VoxelState::occupied(ObjectId(i as u32)));
        }

        let dimensions = self.layout.dimensions()?;
        log::info!(
            "Generated {} level {}x{}x{}: {} boxes, {} agents, {} objects",
            self.layout_type,
            dimensions.length, dimensions.height, dimensions.width,
            boxes.len(), agent_positions.len(), object_positions.len()
        );

        Ok(Level {
            seed,
            layout_type: self.layout_type,
            dimensions,
            boxes,
            exit_pad,
            building_zone,
            agent_positions,
            object_positions,
        })
    }
}
