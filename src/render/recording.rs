//! Headless surface that records draw calls
//!
//! Used by the native runner and tests. Every primitive is logged with the
//! style and alpha in effect when it was drawn.

use glam::DVec2;
use serde::Serialize;

use super::{Rgb, Surface};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear,
    Disc {
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
        color: Rgb,
        alpha: f64,
        width: f64,
    },
}

/// Surface that keeps a log of everything drawn since the last `clear`
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    fill: Rgb,
    stroke: Rgb,
    alpha: f64,
    line_width: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill: Rgb::new(0, 0, 0),
            stroke: Rgb::new(0, 0, 0),
            alpha: 1.0,
            line_width: 1.0,
            commands: Vec::new(),
        }
    }

    /// Commands drawn since the last clear (the clear itself included)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current global alpha
    pub fn global_alpha(&self) -> f64 {
        self.alpha
    }

    pub fn disc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn set_fill_style(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn set_stroke_style(&mut self, color: Rgb) {
        self.stroke = color;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color: self.fill,
            alpha: self.alpha,
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: self.stroke,
            alpha: self.alpha,
            width: self.line_width,
        });
    }
}
