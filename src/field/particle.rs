//! Particle type and sampling helpers

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::render::Rgb;
use crate::settings::FieldSettings;

/// Half-open sampling range [min, max)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both ends finite and `min <= max`
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Uniform sample in [min, max). A degenerate span always yields `min`.
    #[inline]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.min + rng.random::<f64>() * (self.max - self.min)
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && (v < self.max || self.min == self.max)
    }
}

/// A drifting background particle.
///
/// Velocity, radius, color and opacity are fixed at construction; only the
/// position moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pos: DVec2,
    vel: DVec2,
    radius: f64,
    color: Rgb,
    opacity: f64,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Rgb, opacity: f64) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            opacity,
        }
    }

    /// Sample a particle anywhere on a `width` x `height` surface
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        settings: &FieldSettings,
    ) -> Self {
        let x = rng.random::<f64>() * width;
        let y = rng.random::<f64>() * height;
        let radius = settings.radius.sample(rng);
        let velocity = settings.velocity();
        let vx = velocity.sample(rng);
        let vy = velocity.sample(rng);
        let color = if rng.random::<f64>() > 0.5 {
            settings.palette[0]
        } else {
            settings.palette[1]
        };
        let opacity = settings.opacity.sample(rng);

        Self::new(DVec2::new(x, y), DVec2::new(vx, vy), radius, color, opacity)
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn vel(&self) -> DVec2 {
        self.vel
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Advance one frame and wrap around the surface edges
    pub fn update(&mut self, width: f64, height: f64) {
        self.pos += self.vel;
        self.pos.x = crate::wrap_coord(self.pos.x, width);
        self.pos.y = crate::wrap_coord(self.pos.y, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_update_wraps_past_far_edge() {
        let mut p = Particle::new(
            DVec2::new(500.0 - 0.3, 10.0),
            DVec2::new(0.5, 0.0),
            1.0,
            Rgb::CYAN,
            0.5,
        );
        p.update(500.0, 500.0);
        assert_eq!(p.pos().x, 0.0);
        assert_eq!(p.pos().y, 10.0);
    }

    #[test]
    fn test_update_wraps_below_zero() {
        let mut p = Particle::new(
            DVec2::new(0.2, 0.1),
            DVec2::new(-0.4, -0.3),
            1.0,
            Rgb::CYAN,
            0.5,
        );
        p.update(300.0, 200.0);
        assert_eq!(p.pos(), DVec2::new(300.0, 200.0));
    }

    #[test]
    fn test_update_landing_on_edge_does_not_wrap() {
        let mut p = Particle::new(
            DVec2::new(99.5, 0.5),
            DVec2::new(0.5, -0.5),
            1.0,
            Rgb::CYAN,
            0.5,
        );
        p.update(100.0, 100.0);
        assert_eq!(p.pos(), DVec2::new(100.0, 0.0));
    }

    #[test]
    fn test_random_within_ranges() {
        let settings = FieldSettings::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0, &settings);
            assert!((0.0..800.0).contains(&p.pos().x));
            assert!((0.0..600.0).contains(&p.pos().y));
            assert!(settings.radius.contains(p.radius()));
            assert!(settings.opacity.contains(p.opacity()));
            assert!(settings.velocity().contains(p.vel().x));
            assert!(settings.velocity().contains(p.vel().y));
            assert!(settings.palette.contains(&p.color()));
        }
    }

    #[test]
    fn test_random_uses_both_colors() {
        let settings = FieldSettings::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let cyan = (0..200)
            .map(|_| Particle::random(&mut rng, 100.0, 100.0, &settings))
            .filter(|p| p.color() == Rgb::CYAN)
            .count();
        assert!(cyan > 50 && cyan < 150, "cyan picked {} of 200", cyan);
    }

    #[test]
    fn test_degenerate_span() {
        let span = Span::new(1.0, 1.0);
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(span.sample(&mut rng), 1.0);
        assert!(span.contains(1.0));
    }
}
