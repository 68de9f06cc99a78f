//! Layout strategies — procedural level generators sharing one contract.
//!
//! A level is produced in two steps:
//! 1. `init` draws the randomized dimensions and strategy features
//! 2. `generate` paints floors, walls and obstacles into a `VoxelGrid`
//!
//! Afterwards the grid can be compressed into boxes with `extract_primitives`
//! and the goal regions and spawn lists can be queried.

pub mod config;
pub mod basic;
pub mod walls;
pub mod cave;
pub mod towers;
pub mod merge;

pub use config::{IntRange, LayoutConfig};
pub use basic::EmptyLayout;
pub use walls::WallsLayout;
pub use cave::{CaveCarver, CaveLayout, free_voxels};
pub use towers::TowersLayout;
pub use merge::extract_boxes;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::types::{IVec3, VoxelCoords};
use crate::core::{Error, Result, Rng};
use crate::math::BoundingBox;
use crate::voxel::VoxelGrid;

/// Level extents: length = x, height = y, width = z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: i32,
    pub height: i32,
    pub width: i32,
}

impl Dimensions {
    pub fn new(length: i32, height: i32, width: i32) -> Self {
        Self { length, height, width }
    }

    /// Check if a coordinate lies in `[0,length) x [0,height) x [0,width)`.
    pub fn contains(&self, p: VoxelCoords) -> bool {
        p.x >= 0 && p.x < self.length &&
        p.y >= 0 && p.y < self.height &&
        p.z >= 0 && p.z < self.width
    }

    /// Check if a whole box lies inside the level.
    pub fn contains_box(&self, b: &BoundingBox) -> bool {
        self.contains(b.min) && self.contains(b.max)
    }

    pub fn as_ivec3(&self) -> IVec3 {
        IVec3::new(self.length, self.height, self.width)
    }
}

/// Available generation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    Empty,
    Walls,
    Cave,
    Towers,
}

impl LayoutType {
    pub const ALL: [LayoutType; 4] = [
        LayoutType::Empty,
        LayoutType::Walls,
        LayoutType::Cave,
        LayoutType::Towers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LayoutType::Empty => "empty",
            LayoutType::Walls => "walls",
            LayoutType::Cave => "cave",
            LayoutType::Towers => "towers",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LayoutType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLayout(s.to_string()))
    }
}

impl TryFrom<i32> for LayoutType {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| LayoutType::ALL.get(i).copied())
            .ok_or_else(|| Error::UnknownLayout(value.to_string()))
    }
}

/// Contract implemented by every layout strategy.
///
/// The generator is passed explicitly to every call that draws randomness so
/// that a level is reproducible from the session seed alone.
pub trait LayoutGenerator {
    /// Draw dimensions and strategy features.
    fn init(&mut self, rng: &mut Rng);

    /// Level extents decided by `init`.
    fn dimensions(&self) -> Dimensions;

    /// Width of the exit pad, `None` for layouts without one.
    fn exit_pad_width(&self) -> Option<i32>;

    /// Paint the level into the grid.
    fn generate(&mut self, grid: &mut VoxelGrid, rng: &mut Rng);

    /// Merged-box representation of the solid voxels.
    fn extract_primitives(&self, grid: &VoxelGrid) -> Vec<BoundingBox> {
        extract_boxes(grid)
    }

    /// Exit pad, or `BoundingBox::ZERO` when the layout has none.
    fn level_exit(&self, grid: &VoxelGrid, rng: &mut Rng) -> BoundingBox;

    /// Building zone, or `BoundingBox::ZERO` when the layout has none.
    fn building_zone(&self, _grid: &VoxelGrid) -> BoundingBox {
        BoundingBox::ZERO
    }

    /// Agent spawn coordinates, at most one per agent.
    fn starting_positions(&self, grid: &VoxelGrid, rng: &mut Rng) -> Vec<VoxelCoords>;

    /// Movable object spawn coordinates.
    fn object_spawn_positions(&self, _grid: &VoxelGrid) -> Vec<VoxelCoords> {
        Vec::new()
    }
}

/// Exit pad width for a given number of agents.
pub(crate) fn exit_pad_width(config: &LayoutConfig, num_agents: i32) -> i32 {
    config.max_exit_pad_width.min(num_agents)
}

/// Selects a strategy by `LayoutType` and forwards the contract to it.
pub struct GridLayout {
    config: LayoutConfig,
    generator: Option<Box<dyn LayoutGenerator>>,
    layout_type: Option<LayoutType>,
}

impl GridLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            generator: None,
            layout_type: None,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Strategy selected by the last successful `init`.
    pub fn layout_type(&self) -> Option<LayoutType> {
        self.layout_type
    }

    /// Select and parameterize a strategy.
    ///
    /// Fails if `num_agents` is not positive or if the exit pad cannot fit in
    /// the drawn level width. Nothing is generated on failure.
    pub fn init(&mut self, num_agents: i32, layout_type: LayoutType, rng: &mut Rng) -> Result<()> {
        self.generator = None;
        self.layout_type = None;

        if num_agents < 1 {
            return Err(Error::InvalidAgentCount(num_agents));
        }

        let config = self.config.clone();
        let mut generator: Box<dyn LayoutGenerator> = match layout_type {
            LayoutType::Empty => Box::new(EmptyLayout::new(num_agents, config)),
            LayoutType::Walls => Box::new(WallsLayout::new(num_agents, config)),
            LayoutType::Cave => Box::new(CaveLayout::new(num_agents, config)),
            LayoutType::Towers => Box::new(TowersLayout::new(num_agents, config)),
        };
        generator.init(rng);

        let dims = generator.dimensions();
        if let Some(pad_width) = generator.exit_pad_width() {
            if dims.width - 2 < pad_width {
                return Err(Error::ExitPadTooWide { pad_width, width: dims.width });
            }
        }

        log::debug!(
            "Initialized {} layout: {}x{}x{} for {} agents",
            layout_type, dims.length, dims.height, dims.width, num_agents
        );

        self.generator = Some(generator);
        self.layout_type = Some(layout_type);
        Ok(())
    }

    fn generator(&self) -> Result<&dyn LayoutGenerator> {
        self.generator.as_deref().ok_or(Error::NotInitialized)
    }

    pub fn dimensions(&self) -> Result<Dimensions> {
        Ok(self.generator()?.dimensions())
    }

    pub fn generate(&mut self, grid: &mut VoxelGrid, rng: &mut Rng) -> Result<()> {
        let generator = self.generator.as_deref_mut().ok_or(Error::NotInitialized)?;
        generator.generate(grid, rng);
        Ok(())
    }

    pub fn extract_primitives(&self, grid: &VoxelGrid) -> Result<Vec<BoundingBox>> {
        Ok(self.generator()?.extract_primitives(grid))
    }

    pub fn level_exit(&self, grid: &VoxelGrid, rng: &mut Rng) -> Result<BoundingBox> {
        Ok(self.generator()?.level_exit(grid, rng))
    }

    pub fn building_zone(&self, grid: &VoxelGrid) -> Result<BoundingBox> {
        Ok(self.generator()?.building_zone(grid))
    }

    pub fn starting_positions(&self, grid: &VoxelGrid, rng: &mut Rng) -> Result<Vec<VoxelCoords>> {
        Ok(self.generator()?.starting_positions(grid, rng))
    }

    pub fn object_spawn_positions(&self, grid: &VoxelGrid) -> Result<Vec<VoxelCoords>> {
        Ok(self.generator()?.object_spawn_positions(grid))
    }
}
