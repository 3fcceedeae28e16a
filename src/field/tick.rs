//! Per-frame update
//!
//! One tick clears the surface, moves and draws every particle, then links
//! close pairs. Scheduling the next frame is the caller's job.

use glam::DVec2;

use super::link::find_links;
use super::state::ParticleField;
use crate::render::Surface;

/// Summary of what one tick drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct FrameStats {
    pub frame: u64,
    pub discs: usize,
    pub links: usize,
}

/// Advance the field by one frame and draw it
pub fn tick<S: Surface>(field: &mut ParticleField, surface: &mut S) -> FrameStats {
    let width = surface.width() as f64;
    let height = surface.height() as f64;

    surface.clear();

    // Move and draw
    for p in &mut field.particles {
        p.update(width, height);

        surface.set_fill_style(p.color());
        surface.set_global_alpha(p.opacity());
        surface.fill_circle(p.pos(), p.radius());
        surface.set_global_alpha(1.0);
    }

    // Link close pairs, colored by the lower-index particle
    let positions: Vec<DVec2> = field.particles.iter().map(|p| p.pos()).collect();
    let settings = &field.settings;
    let mut links = 0;
    surface.set_line_width(settings.link_width);
    for link in find_links(&positions, settings.link_distance, settings.link_alpha) {
        surface.set_stroke_style(field.particles[link.i].color());
        surface.set_global_alpha(link.alpha);
        surface.stroke_line(positions[link.i], positions[link.j]);
        surface.set_global_alpha(1.0);
        links += 1;
    }

    field.frame += 1;
    FrameStats {
        frame: field.frame,
        discs: field.particles.len(),
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Particle;
    use crate::render::{DrawCommand, RecordingSurface, Rgb};
    use crate::settings::FieldSettings;
    use proptest::prelude::*;

    fn still(x: f64, y: f64, color: Rgb) -> Particle {
        Particle::new(DVec2::new(x, y), DVec2::ZERO, 1.5, color, 0.4)
    }

    #[test]
    fn test_two_particles_one_link() {
        let mut field = ParticleField::new(0, FieldSettings::default());
        field.particles = vec![still(0.0, 0.0, Rgb::MAGENTA), still(10.0, 0.0, Rgb::CYAN)];
        let mut surface = RecordingSurface::new(500, 500);

        let stats = tick(&mut field, &mut surface);
        assert_eq!(stats, FrameStats { frame: 1, discs: 2, links: 1 });
        assert_eq!(surface.disc_count(), 2);
        assert_eq!(surface.line_count(), 1);

        match surface.commands().last() {
            Some(DrawCommand::Line {
                from,
                to,
                color,
                alpha,
                width,
            }) => {
                assert_eq!(*from, DVec2::new(0.0, 0.0));
                assert_eq!(*to, DVec2::new(10.0, 0.0));
                // Lower-index particle's color
                assert_eq!(*color, Rgb::MAGENTA);
                assert!((alpha - 0.09).abs() < 1e-12);
                assert_eq!(*width, 0.5);
            }
            other => panic!("expected a line, got {:?}", other),
        }
        // Line alpha is reset too
        assert_eq!(surface.global_alpha(), 1.0);
    }

    #[test]
    fn test_frame_order_clear_discs_lines() {
        let mut field = ParticleField::new(0, FieldSettings::default());
        field.particles = vec![
            still(0.0, 0.0, Rgb::CYAN),
            still(20.0, 0.0, Rgb::CYAN),
            still(40.0, 0.0, Rgb::CYAN),
        ];
        let mut surface = RecordingSurface::new(500, 500);
        tick(&mut field, &mut surface);

        let kinds: Vec<&str> = surface
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Clear => "clear",
                DrawCommand::Disc { .. } => "disc",
                DrawCommand::Line { .. } => "line",
            })
            .collect();
        assert_eq!(
            kinds,
            ["clear", "disc", "disc", "disc", "line", "line", "line"]
        );
    }

    #[test]
    fn test_disc_alpha_does_not_leak() {
        let mut field = ParticleField::new(0, FieldSettings::default());
        field.particles = vec![still(0.0, 0.0, Rgb::CYAN), still(300.0, 300.0, Rgb::CYAN)];
        let mut surface = RecordingSurface::new(500, 500);
        tick(&mut field, &mut surface);

        for cmd in surface.commands() {
            if let DrawCommand::Disc { alpha, .. } = cmd {
                assert_eq!(*alpha, 0.4);
            }
        }
        assert_eq!(surface.line_count(), 0);
        assert_eq!(surface.global_alpha(), 1.0);

        // Linked pair: disc alphas stay per-particle, line alpha stays per-link
        field.particles = vec![still(0.0, 0.0, Rgb::CYAN), still(50.0, 0.0, Rgb::CYAN)];
        tick(&mut field, &mut surface);
        for cmd in surface.commands() {
            match cmd {
                DrawCommand::Disc { alpha, .. } => assert_eq!(*alpha, 0.4),
                DrawCommand::Line { alpha, .. } => assert!((alpha - 0.05).abs() < 1e-12),
                DrawCommand::Clear => {}
            }
        }
        assert_eq!(surface.line_count(), 1);
        assert_eq!(surface.global_alpha(), 1.0);
    }

    #[test]
    fn test_exactly_link_distance_not_linked() {
        let mut field = ParticleField::new(0, FieldSettings::default());
        field.particles = vec![still(100.0, 100.0, Rgb::CYAN), still(200.0, 100.0, Rgb::CYAN)];
        let mut surface = RecordingSurface::new(500, 500);
        assert_eq!(tick(&mut field, &mut surface).links, 0);
    }

    #[test]
    fn test_links_use_post_update_positions() {
        // 100.4 apart before moving, 99.4 after
        let mut field = ParticleField::new(0, FieldSettings::default());
        field.particles = vec![
            Particle::new(DVec2::new(100.0, 50.0), DVec2::new(0.5, 0.0), 1.0, Rgb::CYAN, 0.5),
            Particle::new(DVec2::new(200.4, 50.0), DVec2::new(-0.5, 0.0), 1.0, Rgb::CYAN, 0.5),
        ];
        let mut surface = RecordingSurface::new(500, 500);
        assert_eq!(tick(&mut field, &mut surface).links, 1);
    }

    #[test]
    fn test_empty_field_ticks() {
        let mut field = ParticleField::new(0, FieldSettings::default());
        let mut surface = RecordingSurface::new(0, 0);
        field.init_particles(&surface);

        let stats = tick(&mut field, &mut surface);
        assert_eq!(stats.discs, 0);
        assert_eq!(stats.links, 0);
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_shrink_wraps_outside_particles() {
        let mut field = ParticleField::new(0, FieldSettings::default());
        field.particles = vec![still(900.0, 50.0, Rgb::CYAN)];
        let mut surface = RecordingSurface::new(1000, 1000);

        field.resize_surface(&mut surface, &(500, 500));
        tick(&mut field, &mut surface);
        assert_eq!(field.particles[0].pos(), DVec2::new(0.0, 50.0));
    }

    #[test]
    fn test_determinism_over_frames() {
        let run = |seed| {
            let mut field = ParticleField::new(seed, FieldSettings::default());
            let mut surface = RecordingSurface::new(640, 480);
            field.init_particles(&surface);
            for _ in 0..120 {
                tick(&mut field, &mut surface);
            }
            (field.particles, surface.commands().to_vec())
        };
        assert_eq!(run(2024), run(2024));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_particles_stay_on_surface(
            seed in any::<u64>(),
            width in 0u32..1500,
            height in 0u32..1500,
            frames in 1usize..120,
        ) {
            let mut field = ParticleField::new(seed, FieldSettings::default());
            let mut surface = RecordingSurface::new(width, height);
            field.init_particles(&surface);

            for _ in 0..frames {
                tick(&mut field, &mut surface);
                for p in &field.particles {
                    let pos = p.pos();
                    prop_assert!(pos.x >= 0.0 && pos.x <= width as f64);
                    prop_assert!(pos.y >= 0.0 && pos.y <= height as f64);
                }
            }
        }

        #[test]
        fn prop_tick_never_mutates_fixed_attributes(seed in any::<u64>()) {
            let mut field = ParticleField::new(seed, FieldSettings::default());
            let mut surface = RecordingSurface::new(800, 600);
            field.init_particles(&surface);
            let before: Vec<_> = field
                .particles
                .iter()
                .map(|p| (p.vel(), p.radius(), p.color(), p.opacity()))
                .collect();

            for _ in 0..50 {
                tick(&mut field, &mut surface);
            }
            let after: Vec<_> = field
                .particles
                .iter()
                .map(|p| (p.vel(), p.radius(), p.color(), p.opacity()))
                .collect();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_count_matches_area(width in 0u32..5000, height in 0u32..5000) {
            let mut field = ParticleField::new(1, FieldSettings::default());
            let surface = RecordingSurface::new(width, height);
            field.init_particles(&surface);
            let expected = ((width as f64 * height as f64) / 10_000.0).floor() as usize;
            prop_assert_eq!(field.len(), expected.min(100));
        }
    }
}
