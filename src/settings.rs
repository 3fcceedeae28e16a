//! Field settings
//!
//! Read from LocalStorage on the web; every value defaults to the stock
//! background look.

use serde::{Deserialize, Serialize};

use crate::SettingsError;
use crate::consts::*;
use crate::field::Span;
use crate::render::Rgb;

/// Tunable constants of the particle field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    // === Population ===
    /// Hard cap on particle count
    pub max_particles: usize,
    /// Surface area (px²) per particle
    pub area_per_particle: f64,

    // === Particle sampling ===
    /// Radius range
    pub radius: Span,
    /// Per-axis speed; velocity components are drawn from [-speed, speed)
    pub speed: f64,
    /// Fill opacity range
    pub opacity: Span,
    /// The two accent colors particles pick from
    pub palette: [Rgb; 2],

    // === Links ===
    /// Max distance (px) at which two particles are linked
    pub link_distance: f64,
    /// Link alpha at zero distance
    pub link_alpha: f64,
    /// Link stroke width
    pub link_width: f64,

    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            area_per_particle: AREA_PER_PARTICLE,

            radius: Span::new(RADIUS_MIN, RADIUS_MAX),
            speed: SPEED,
            opacity: Span::new(OPACITY_MIN, OPACITY_MAX),
            palette: [Rgb::CYAN, Rgb::MAGENTA],

            link_distance: LINK_DISTANCE,
            link_alpha: LINK_ALPHA,
            link_width: LINK_WIDTH,

            seed: None,
        }
    }
}

impl FieldSettings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "neon_field_settings";

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject settings that would produce a broken field
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_particles > PARTICLE_CEILING {
            return Err(SettingsError::Invalid(format!(
                "max_particles must be at most {}, got {}",
                PARTICLE_CEILING, self.max_particles
            )));
        }
        if !(self.area_per_particle > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "area_per_particle must be positive, got {}",
                self.area_per_particle
            )));
        }
        if !(self.link_distance > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "link_distance must be positive, got {}",
                self.link_distance
            )));
        }
        if !(0.0..=1.0).contains(&self.link_alpha) {
            return Err(SettingsError::Invalid(format!(
                "link_alpha must be in [0, 1], got {}",
                self.link_alpha
            )));
        }
        if !(self.speed >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "speed must be non-negative, got {}",
                self.speed
            )));
        }
        if !self.radius.is_valid() || self.radius.min <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "radius range {:?} must be positive and ordered",
                self.radius
            )));
        }
        if !self.opacity.is_valid() || self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(SettingsError::Invalid(format!(
                "opacity range {:?} must lie in [0, 1] and be ordered",
                self.opacity
            )));
        }
        Ok(())
    }

    /// Velocity component range
    pub fn velocity(&self) -> Span {
        Span::new(-self.speed, self.speed)
    }

    /// Target particle count for a surface of the given size
    pub fn particle_count(&self, width: u32, height: u32) -> usize {
        let area = width as f64 * height as f64;
        let by_area = (area / self.area_per_particle).floor() as usize;
        by_area.min(self.max_particles)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded field settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("{}", e),
                }
            }
        }

        log::info!("Using default field settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
