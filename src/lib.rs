//! voxel_layout - Procedural voxel level layouts for multi-agent simulations

pub mod core;
pub mod math;
pub mod voxel;
pub mod layout;
pub mod session;

pub use layout::{GridLayout, LayoutConfig, LayoutGenerator, LayoutType};
pub use session::{Level, LevelSession};
