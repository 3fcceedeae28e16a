//! Drawing surface abstraction
//!
//! The field draws through the `Surface` trait so the same tick runs against
//! a browser canvas or a headless recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, WindowViewport};
pub use recording::{DrawCommand, RecordingSurface};

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Opaque sRGB color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Accent cyan `#00f3ff`
    pub const CYAN: Rgb = Rgb::new(0x00, 0xf3, 0xff);
    /// Accent magenta `#ff00ff`
    pub const MAGENTA: Rgb = Rgb::new(0xff, 0x00, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (case-insensitive, leading `#` required)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s).ok_or_else(|| format!("expected #rrggbb color, got {:?}", s))
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

/// A 2D drawing surface with canvas-like state (fill/stroke style, global alpha)
pub trait Surface {
    /// Current pixel width
    fn width(&self) -> u32;
    /// Current pixel height
    fn height(&self) -> u32;
    /// Change the pixel size (clears the surface)
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the whole surface
    fn clear(&mut self);

    fn set_fill_style(&mut self, color: Rgb);
    fn set_stroke_style(&mut self, color: Rgb);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_line_width(&mut self, width: f64);

    /// Fill a disc with the current fill style and global alpha
    fn fill_circle(&mut self, center: DVec2, radius: f64);
    /// Stroke a segment with the current stroke style, line width and global alpha
    fn stroke_line(&mut self, from: DVec2, to: DVec2);
}

/// Source of the current viewport size in pixels
pub trait Viewport {
    fn size(&self) -> (u32, u32);
}

/// Fixed-size viewport
impl Viewport for (u32, u32) {
    fn size(&self) -> (u32, u32) {
        *self
    }
}
