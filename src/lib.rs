//! Neon Field - drifting particle background for a portfolio page
//!
//! Core modules:
//! - `field`: Particle simulation (seeding, motion, wraparound, proximity links)
//! - `render`: Drawing surface abstraction (canvas on web, recording for headless)
//! - `settings`: Tunable field constants, loaded from JSON / LocalStorage
//! - `contact`: Contact form validation
//! - `projects`: Project catalog shown in the detail modal

pub mod contact;
pub mod error;
pub mod field;
pub mod projects;
pub mod render;
pub mod settings;

pub use error::SettingsError;
pub use field::{ParticleField, tick};
pub use render::{Rgb, Surface, Viewport};
pub use settings::FieldSettings;

/// Field configuration constants
pub mod consts {
    /// Hard cap on particle count regardless of surface area
    pub const MAX_PARTICLES: usize = 100;
    /// Largest `max_particles` accepted from settings (link pass is O(n²))
    pub const PARTICLE_CEILING: usize = 500;
    /// Surface area (px²) that "buys" one particle
    pub const AREA_PER_PARTICLE: f64 = 10_000.0;

    /// Pairs closer than this (px) get a connecting line
    pub const LINK_DISTANCE: f64 = 100.0;
    /// Link alpha at zero distance, fading linearly to 0 at `LINK_DISTANCE`
    pub const LINK_ALPHA: f64 = 0.1;
    /// Stroke width of connecting lines
    pub const LINK_WIDTH: f64 = 0.5;

    /// Particle radius range [min, max)
    pub const RADIUS_MIN: f64 = 0.5;
    pub const RADIUS_MAX: f64 = 2.5;
    /// Per-axis speed; velocity components are drawn from [-SPEED, SPEED)
    pub const SPEED: f64 = 0.5;
    /// Fill opacity range [min, max)
    pub const OPACITY_MIN: f64 = 0.2;
    pub const OPACITY_MAX: f64 = 0.7;

    /// DOM id of the background canvas
    pub const CANVAS_ID: &str = "particle-canvas";
}

/// Wrap a coordinate back onto [0, max].
///
/// Past the far edge jumps to 0, below zero jumps to `max`. Values exactly on
/// an edge are left alone.
#[inline]
pub fn wrap_coord(v: f64, max: f64) -> f64 {
    if v > max {
        0.0
    } else if v < 0.0 {
        max
    } else {
        v
    }
}
