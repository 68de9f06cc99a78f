//! Core types and utilities

pub mod types;
pub mod error;
pub mod logging;
pub mod random;

pub use types::*;
pub use error::Error;
pub use random::{Rng, rng_from_seed, rand_range, frand, shuffle};
