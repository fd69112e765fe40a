use crate::foundation::error::{IconError, IconResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// Edge length of the coordinate space every reference shape is authored in.
pub const REFERENCE_SIZE: u32 = 192;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Uniform scale from the 192px reference design to a concrete target size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    size: u32,
    factor: f64,
}

impl Scale {
    /// Build the scale for a `size x size` icon.
    ///
    /// The rasterizer addresses pixels with `u16`, so sizes above `u16::MAX` are rejected
    /// alongside zero.
    pub fn new(size: u32) -> IconResult<Self> {
        if size == 0 {
            return Err(IconError::validation("icon size must be > 0"));
        }
        if size > u32::from(u16::MAX) {
            return Err(IconError::validation(format!(
                "icon size {size} exceeds {}",
                u16::MAX
            )));
        }
        Ok(Self {
            size,
            factor: f64::from(size) / f64::from(REFERENCE_SIZE),
        })
    }

    pub fn size(self) -> u32 {
        self.size
    }

    pub fn factor(self) -> f64 {
        self.factor
    }

    /// Scaled length, position or radius: `max(1, round(v * factor))`.
    pub fn px(self, v: f64) -> i32 {
        ((v * self.factor).round() as i32).max(1)
    }

    /// Scaled polygon vertex, truncated toward zero per component.
    pub fn vertex(self, x: f64, y: f64) -> Point {
        Point::new((x * self.factor).trunc(), (y * self.factor).trunc())
    }

    /// Scaled font size in pixels, never below `floor`.
    pub fn font_px(self, v: f64, floor: u32) -> u32 {
        ((v * self.factor).round() as u32).max(floor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
