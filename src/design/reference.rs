//! The launcher icon, authored once in a 192x192 coordinate space and instanced per size.

use crate::{
    foundation::core::{Point, Rgba8, Scale},
    foundation::error::IconResult,
    text::fonts::FontSlot,
};

pub const BACKGROUND_RADIUS: f64 = 90.0;

pub const SHIELD_POINTS: [(f64, f64); 8] = [
    (96.0, 28.0),
    (152.0, 52.0),
    (152.0, 100.0),
    (125.0, 145.0),
    (96.0, 168.0),
    (67.0, 145.0),
    (40.0, 100.0),
    (40.0, 52.0),
];
pub const SHIELD_COLOR: Rgba8 = Rgba8::new(79, 195, 247, 230);

/// `(x, y, w, h, corner_radius)`
pub const CAMERA_BODY: (f64, f64, f64, f64, f64) = (60.0, 70.0, 50.0, 38.0, 6.0);

pub const LENS_CENTER: (f64, f64) = (85.0, 89.0);
pub const LENS_RADIUS: f64 = 10.0;
pub const LENS_DOT_RADIUS: f64 = 5.0;
pub const LENS_COLOR: Rgba8 = Rgba8::opaque(26, 115, 232);

pub const ACCENT_POINTS: [(f64, f64); 4] = [
    (110.0, 78.0),
    (130.0, 68.0),
    (130.0, 110.0),
    (110.0, 100.0),
];

pub const AI_BADGE_CENTER: (f64, f64) = (130.0, 140.0);
pub const AI_BADGE_RADIUS: f64 = 18.0;
pub const AI_BADGE_COLOR: Rgba8 = Rgba8::opaque(255, 152, 0);
pub const AI_TEXT: &str = "AI";
pub const AI_FONT_SIZE: f64 = 14.0;
pub const AI_FONT_FLOOR: u32 = 8;

/// `(x, y, w, h, corner_radius)`
pub const FREE_LABEL_BOX: (f64, f64, f64, f64, f64) = (20.0, 145.0, 45.0, 22.0, 4.0);
pub const FREE_LABEL_COLOR: Rgba8 = Rgba8::opaque(76, 175, 80);
pub const FREE_LABEL_TEXT: &str = "免费";
pub const FREE_LABEL_FONT_SIZE: f64 = 12.0;
pub const FREE_LABEL_FONT_FLOOR: u32 = 6;

/// Filled disc in pixel coordinates. Covers the inclusive box `[cx - r, cx + r]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disc {
    pub cx: i32,
    pub cy: i32,
    pub r: i32,
}

/// Rounded box in pixel coordinates. Covers the inclusive box `[x, x + w] x [y, y + h]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundedBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub radius: i32,
}

impl RoundedBox {
    fn scaled(scale: Scale, (x, y, w, h, r): (f64, f64, f64, f64, f64)) -> Self {
        Self {
            x: scale.px(x),
            y: scale.px(y),
            w: scale.px(w),
            h: scale.px(h),
            radius: scale.px(r),
        }
    }
}

/// Text centered on a badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeText {
    pub text: &'static str,
    pub slot: FontSlot,
    pub size_px: u32,
    pub color: Rgba8,
}

/// The reference design instanced for a single target size.
#[derive(Clone, Debug, PartialEq)]
pub struct IconDesign {
    pub scale: Scale,
    pub background: Disc,
    pub shield: Vec<Point>,
    pub camera_body: RoundedBox,
    pub lens_ring: Disc,
    pub lens_dot: Disc,
    pub accent: Vec<Point>,
    pub ai_badge: Disc,
    pub ai_text: BadgeText,
    pub free_label: RoundedBox,
    pub free_label_text: BadgeText,
}

impl IconDesign {
    /// Scale every reference shape to a `size x size` canvas.
    pub fn at_size(size: u32) -> IconResult<Self> {
        let scale = Scale::new(size)?;
        let center = (size / 2) as i32;
        let lens = (scale.px(LENS_CENTER.0), scale.px(LENS_CENTER.1));

        Ok(Self {
            scale,
            background: Disc {
                cx: center,
                cy: center,
                r: scale.px(BACKGROUND_RADIUS),
            },
            shield: scale_points(scale, &SHIELD_POINTS),
            camera_body: RoundedBox::scaled(scale, CAMERA_BODY),
            lens_ring: Disc {
                cx: lens.0,
                cy: lens.1,
                r: scale.px(LENS_RADIUS),
            },
            lens_dot: Disc {
                cx: lens.0,
                cy: lens.1,
                r: scale.px(LENS_DOT_RADIUS),
            },
            accent: scale_points(scale, &ACCENT_POINTS),
            ai_badge: Disc {
                cx: scale.px(AI_BADGE_CENTER.0),
                cy: scale.px(AI_BADGE_CENTER.1),
                r: scale.px(AI_BADGE_RADIUS),
            },
            ai_text: BadgeText {
                text: AI_TEXT,
                slot: FontSlot::AiBadge,
                size_px: scale.font_px(AI_FONT_SIZE, AI_FONT_FLOOR),
                color: Rgba8::WHITE,
            },
            free_label: RoundedBox::scaled(scale, FREE_LABEL_BOX),
            free_label_text: BadgeText {
                text: FREE_LABEL_TEXT,
                slot: FontSlot::FreeLabel,
                size_px: scale.font_px(FREE_LABEL_FONT_SIZE, FREE_LABEL_FONT_FLOOR),
                color: Rgba8::WHITE,
            },
        })
    }

    pub fn size(&self) -> u32 {
        self.scale.size()
    }
}

fn scale_points(scale: Scale, points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| scale.vertex(x, y)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/design/reference.rs"]
mod tests;
