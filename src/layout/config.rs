//! Tuning parameters for the layout strategies.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Half-open integer range `[min, max)` drawn with `rand_range`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Configuration shared by all layout strategies.
///
/// Defaults reproduce the stock level distribution. Any subset of fields can
/// be overridden from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Level length (x) for Empty/Walls/Cave.
    pub length: IntRange,
    /// Level width (z) for Empty/Walls/Cave.
    pub width: IntRange,
    /// Headroom above the tallest feature.
    pub height: IntRange,
    /// Widest exit pad, further capped by the number of agents.
    pub max_exit_pad_width: i32,
    /// Sampling attempts per agent in the Empty layout.
    pub spawn_attempts: u32,

    /// Walls: number of walls is drawn from `[0, max_num_walls]`.
    pub max_num_walls: i32,
    /// Walls: wall heights are drawn from `[1, tallest_wall]`.
    pub tallest_wall: i32,
    /// Walls: exclusive upper bound on level length.
    pub walls_max_length: i32,

    /// Cave: ceiling height of the carved cavity.
    pub cave_height: IntRange,
    /// Cave: initial growth probability.
    pub growth_prob: f32,
    /// Cave: multiplier applied to the growth probability after each growth.
    pub growth_decay: f32,

    /// Towers: level height.
    pub tower_height: IntRange,
    /// Towers: level length before zone fitting.
    pub tower_length: IntRange,
    /// Towers: level width before zone fitting.
    pub tower_width: IntRange,
    /// Towers: building zone side lengths.
    pub building_zone_size: IntRange,
    /// Towers: materials zone side lengths.
    pub materials_zone_size: IntRange,
    /// Towers: cap on randomly scattered objects.
    pub max_random_objects: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            length: IntRange::new(8, 30),
            width: IntRange::new(7, 25),
            height: IntRange::new(3, 5),
            max_exit_pad_width: 3,
            spawn_attempts: 10,
            max_num_walls: 4,
            tallest_wall: 4,
            walls_max_length: 35,
            cave_height: IntRange::new(2, 5),
            growth_prob: 0.8,
            growth_decay: 0.995,
            tower_height: IntRange::new(5, 7),
            tower_length: IntRange::new(12, 30),
            tower_width: IntRange::new(12, 25),
            building_zone_size: IntRange::new(3, 9),
            materials_zone_size: IntRange::new(2, 8),
            max_random_objects: 25,
        }
    }
}

impl LayoutConfig {
    /// Parse a (possibly partial) JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
