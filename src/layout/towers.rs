//! Towers layout: an open arena with a building zone to construct on and a
//! materials zone stacked with movable blocks.

use crate::core::types::{IVec3, VoxelCoords};
use crate::core::{Rng, rand_range, shuffle};
use crate::math::BoundingBox;
use crate::voxel::VoxelGrid;

use super::basic::generate_floor_and_walls;
use super::config::LayoutConfig;
use super::{Dimensions, LayoutGenerator};

/// Rectangular footprint on the floor: `[x, x + length) x [z, z + width)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zone {
    pub x: i32,
    pub z: i32,
    pub length: i32,
    pub width: i32,
}

impl Zone {
    fn contains_xz(&self, p: VoxelCoords) -> bool {
        p.x >= self.x && p.x < self.x + self.length &&
        p.z >= self.z && p.z < self.z + self.width
    }
}

pub struct TowersLayout {
    num_agents: i32,
    config: LayoutConfig,
    dims: Dimensions,
    building: Zone,
    materials: Zone,
    agent_spawns: Vec<VoxelCoords>,
    object_spawns: Vec<VoxelCoords>,
}

impl TowersLayout {
    pub fn new(num_agents: i32, config: LayoutConfig) -> Self {
        Self {
            num_agents,
            config,
            dims: Dimensions::default(),
            building: Zone::default(),
            materials: Zone::default(),
            agent_spawns: Vec::new(),
            object_spawns: Vec::new(),
        }
    }

    /// Footprint of the stacked materials at floor level, inclusive.
    pub fn materials_zone(&self) -> BoundingBox {
        let m = self.materials;
        BoundingBox::new(
            IVec3::new(m.x, 1, m.z),
            IVec3::new(m.x + m.length - 1, 1, m.z + m.width - 1),
        )
    }

    fn draw_zones(&mut self, rng: &mut Rng) {
        let c = &self.config;
        self.dims.height = rand_range(c.tower_height.min, c.tower_height.max, rng);
        self.dims.length = rand_range(c.tower_length.min, c.tower_length.max, rng);
        self.dims.width = rand_range(c.tower_width.min, c.tower_width.max, rng);

        let b = &c.building_zone_size;
        self.building.length = rand_range(b.min, b.max, rng);
        self.building.width = rand_range(b.min, b.max, rng);

        let m = &c.materials_zone_size;
        self.materials.length = rand_range(m.min, m.max, rng);
        self.materials.width = rand_range(m.min, m.max, rng);

        self.dims.length = self.dims.length.max(self.building.length + self.materials.length + 3);
        self.dims.width = self.dims.width.max(self.building.width + self.materials.width + 3);

        let Dimensions { length, width, .. } = self.dims;
        self.building.x = rand_range(1, length - self.building.length - 1, rng);
        self.building.z = rand_range(1, width - self.building.width - 1, rng);
        self.materials.x = rand_range(1, length - self.materials.length - 1, rng);
        self.materials.z = rand_range(1, width - self.materials.width - 1, rng);
    }

    fn pick_spawns(&mut self, rng: &mut Rng) {
        let Dimensions { length, width, .. } = self.dims;

        let mut candidates: Vec<VoxelCoords> = (1..length - 1)
            .flat_map(|x| (1..width - 1).map(move |z| IVec3::new(x, 2, z)))
            .collect();
        shuffle(&mut candidates, rng);

        let num_agent_spawns = (self.num_agents as usize).min(candidates.len());
        self.agent_spawns = candidates[..num_agent_spawns].to_vec();

        let max_random = (candidates.len() as i32 - self.num_agents).min(self.config.max_random_objects);
        let num_random = rand_range(0, max_random.max(1), rng) as usize;
        let end = (num_agent_spawns + num_random).min(candidates.len());

        self.object_spawns = candidates[num_agent_spawns..end]
            .iter()
            .map(|&c| {
                if self.materials.contains_xz(c) {
                    c
                } else {
                    c - IVec3::Y
                }
            })
            .collect();

        let m = self.materials;
        for x in m.x..m.x + m.length {
            for z in m.z..m.z + m.width {
                self.object_spawns.push(IVec3::new(x, 1, z));
            }
        }

        if let Some(&first) = self.agent_spawns.first() {
            if self.agent_spawns.len() < self.num_agents as usize {
                log::warn!(
                    "Only {} spawn candidates for {} agents, duplicating the first",
                    self.agent_spawns.len(), self.num_agents
                );
            }
            self.agent_spawns.resize(self.num_agents as usize, first);
        }
    }
}

impl LayoutGenerator for TowersLayout {
    fn init(&mut self, rng: &mut Rng) {
        self.draw_zones(rng);
        self.pick_spawns(rng);

        log::debug!(
            "Towers layout: building zone {:?}, materials zone {:?}, {} objects",
            self.building, self.materials, self.object_spawns.len()
        );
    }

    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn exit_pad_width(&self) -> Option<i32> {
        None
    }

    fn generate(&mut self, grid: &mut VoxelGrid, _rng: &mut Rng) {
        generate_floor_and_walls(grid, self.dims);
    }

    fn level_exit(&self, _grid: &VoxelGrid, _rng: &mut Rng) -> BoundingBox {
        BoundingBox::ZERO
    }

    fn building_zone(&self, _grid: &VoxelGrid) -> BoundingBox {
        let b = self.building;
        BoundingBox::new(
            IVec3::new(b.x, 1, b.z),
            IVec3::new(b.x + b.length, 1, b.z + b.width),
        )
    }

    fn starting_positions(&self, _grid: &VoxelGrid, _rng: &mut Rng) -> Vec<VoxelCoords> {
        self.agent_spawns.clone()
    }

    fn object_spawn_positions(&self, _grid: &VoxelGrid) -> Vec<VoxelCoords> {
        self.object_spawns.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng_from_seed;
    use crate::layout::IntRange;

    fn init_towers(seed: u64, num_agents: i32, config: LayoutConfig) -> (TowersLayout, VoxelGrid, Rng) {
        let mut rng = rng_from_seed(seed);
        let mut layout = TowersLayout::new(num_agents, config);
        layout.init(&mut rng);
        let mut grid = VoxelGrid::new();
        layout.generate(&mut grid, &mut rng);
        (layout, grid, rng)
    }

    #[test]
    fn test_zones_inside_interior() {
        for seed in 0..100 {
            let (layout, grid, _) = init_towers(seed, 2, LayoutConfig::default());
            let Dimensions { length, width, .. } = layout.dimensions();

            for zone in [layout.building_zone(&grid), layout.materials_zone()] {
                assert!(zone.is_well_formed());
                assert!(zone.min.x >= 1 && zone.max.x < length - 1, "seed {seed}: {zone:?}");
                assert!(zone.min.z >= 1 && zone.max.z < width - 1, "seed {seed}: {zone:?}");
            }
        }
    }

    #[test]
    fn test_no_exit_pad() {
        let (layout, grid, mut rng) = init_towers(1, 2, LayoutConfig::default());
        assert!(layout.level_exit(&grid, &mut rng).is_sentinel());
        assert!(!layout.building_zone(&grid).is_sentinel());
        assert_eq!(layout.exit_pad_width(), None);
    }

    #[test]
    fn test_materials_stack_filled() {
        let (layout, grid, _) = init_towers(7, 2, LayoutConfig::default());
        let objects = layout.object_spawn_positions(&grid);
        let zone = layout.materials_zone();

        for p in zone.voxels() {
            assert!(objects.contains(&p), "missing material at {p}");
        }
        for p in &objects {
            assert!(p.y == 1 || (p.y == 2 && zone.contains_point(*p - IVec3::Y)));
        }
    }

    #[test]
    fn test_agents_padded_when_scarce() {
        // Empty and Walls may return fewer positions; Towers always fills up.
        let config = LayoutConfig {
            tower_length: IntRange::new(3, 4),
            tower_width: IntRange::new(3, 4),
            building_zone_size: IntRange::new(1, 2),
            materials_zone_size: IntRange::new(1, 2),
            ..Default::default()
        };
        let (layout, grid, mut rng) = init_towers(3, 50, config);
        let agents = layout.starting_positions(&grid, &mut rng);
        let candidates = (layout.dimensions().length - 2) * (layout.dimensions().width - 2);

        assert!(candidates < 50);
        assert_eq!(agents.len(), 50);
        assert!(agents[candidates as usize..].iter().all(|&p| p == agents[0]));
    }

    #[test]
    fn test_agents_exact_count() {
        for seed in 0..20 {
            let (layout, grid, mut rng) = init_towers(seed, 4, LayoutConfig::default());
            let agents = layout.starting_positions(&grid, &mut rng);
            assert_eq!(agents.len(), 4);
            assert!(agents.iter().all(|p| p.y == 2));
        }
    }
}
