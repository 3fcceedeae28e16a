//! Particle field simulation
//!
//! Everything that moves lives here. This module must stay deterministic:
//! - Seeded RNG only
//! - Stable iteration order (collection index)
//! - Drawing only through the `Surface` trait

pub mod link;
pub mod particle;
pub mod state;
pub mod tick;

pub use link::{Link, find_links, link_alpha};
pub use particle::{Particle, Span};
pub use state::ParticleField;
pub use tick::{FrameStats, tick};
