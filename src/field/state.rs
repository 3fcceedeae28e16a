//! Particle field state
//!
//! Owns the particle collection and the RNG that seeds it. The drawing
//! surface is borrowed per call; its size drives seeding and wraparound.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::Particle;
use crate::render::{Surface, Viewport};
use crate::settings::FieldSettings;

/// The particle collection plus everything needed to (re)seed it
#[derive(Debug, Clone)]
pub struct ParticleField {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Field constants
    pub settings: FieldSettings,
    /// Particles in draw order
    pub particles: Vec<Particle>,
    /// Frames ticked since the last seeding
    pub frame: u64,
    rng: Pcg32,
}

impl ParticleField {
    /// Empty field with the given seed. Call `init_particles` to populate.
    pub fn new(seed: u64, settings: FieldSettings) -> Self {
        Self {
            seed,
            settings,
            particles: Vec::new(),
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Empty field seeded from `settings.seed`, or `fallback_seed` if unset
    pub fn from_settings(settings: FieldSettings, fallback_seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(fallback_seed);
        Self::new(seed, settings)
    }

    /// Match the surface's pixel size to the viewport.
    ///
    /// Particles are left untouched; the new size only affects wraparound
    /// from the next tick on.
    pub fn resize_surface<S: Surface, V: Viewport>(&self, surface: &mut S, viewport: &V) {
        let (width, height) = viewport.size();
        if (width, height) != (surface.width(), surface.height()) {
            log::debug!("Resizing surface to {}x{}", width, height);
        }
        surface.resize(width, height);
    }

    /// Replace the collection with a fresh batch sized to the surface area
    pub fn init_particles<S: Surface>(&mut self, surface: &S) {
        let (width, height) = (surface.width(), surface.height());
        let count = self.settings.particle_count(width, height);
        let (w, h) = (width as f64, height as f64);

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::random(&mut self.rng, w, h, &self.settings);
            self.particles.push(p);
        }
        self.frame = 0;

        log::info!(
            "Seeded {} particles for {}x{} surface",
            self.particles.len(),
            width,
            height
        );
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
