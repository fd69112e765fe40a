use crate::{
    design::gradient::gradient_color,
    design::reference::{
        AI_BADGE_COLOR, BadgeText, Disc, FREE_LABEL_COLOR, IconDesign, LENS_COLOR, RoundedBox,
        SHIELD_COLOR,
    },
    foundation::core::{Point, Rgba8},
};

/// Logical part of the icon a draw op belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    Shield,
    CameraBody,
    Lens,
    Accent,
    AiBadge,
    FreeLabel,
}

/// Where a text block is anchored, given its measured box `(w, h)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Box center on this point.
    Center { cx: i32, cy: i32 },
    /// Box centered inside this rectangle.
    Within(RoundedBox),
}

impl TextAnchor {
    /// Top-left origin for a text box of `w x h` pixels, nudged one pixel up.
    pub fn origin(self, w: i32, h: i32) -> (i32, i32) {
        match self {
            Self::Center { cx, cy } => (cx - w.div_euclid(2), cy - h.div_euclid(2) - 1),
            Self::Within(b) => (
                b.x + (b.w - w).div_euclid(2),
                b.y + (b.h - h).div_euclid(2) - 1,
            ),
        }
    }
}

/// Single painter's-algorithm step. Shape fills replace the pixels they cover, alpha
/// included; text is blended over what is already there.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillDisc {
        layer: Layer,
        disc: Disc,
        color: Rgba8,
    },
    FillPolygon {
        layer: Layer,
        points: Vec<Point>,
        color: Rgba8,
    },
    FillRoundedBox {
        layer: Layer,
        rect: RoundedBox,
        color: Rgba8,
    },
    Text {
        layer: Layer,
        text: BadgeText,
        anchor: TextAnchor,
    },
}

impl DrawOp {
    pub fn layer(&self) -> Layer {
        match self {
            Self::FillDisc { layer, .. }
            | Self::FillPolygon { layer, .. }
            | Self::FillRoundedBox { layer, .. }
            | Self::Text { layer, .. } => *layer,
        }
    }
}

/// Lower a sized design into its ordered display list.
///
/// The background is emitted as concentric discs from the rim inward, each one a shade
/// closer to the center color.
pub fn compile_design(design: &IconDesign) -> Vec<DrawOp> {
    let bg = design.background;
    let max_r = bg.r.max(1);
    let mut ops = Vec::with_capacity(max_r as usize + 10);

    for r in (1..=max_r).rev() {
        ops.push(DrawOp::FillDisc {
            layer: Layer::Background,
            disc: Disc { r, ..bg },
            color: gradient_color(r as u32, max_r as u32),
        });
    }

    ops.push(DrawOp::FillPolygon {
        layer: Layer::Shield,
        points: design.shield.clone(),
        color: SHIELD_COLOR,
    });
    ops.push(DrawOp::FillRoundedBox {
        layer: Layer::CameraBody,
        rect: design.camera_body,
        color: Rgba8::WHITE,
    });
    ops.push(DrawOp::FillDisc {
        layer: Layer::Lens,
        disc: design.lens_ring,
        color: LENS_COLOR,
    });
    ops.push(DrawOp::FillDisc {
        layer: Layer::Lens,
        disc: design.lens_dot,
        color: Rgba8::WHITE,
    });
    ops.push(DrawOp::FillPolygon {
        layer: Layer::Accent,
        points: design.accent.clone(),
        color: Rgba8::WHITE,
    });
    ops.push(DrawOp::FillDisc {
        layer: Layer::AiBadge,
        disc: design.ai_badge,
        color: AI_BADGE_COLOR,
    });
    ops.push(DrawOp::Text {
        layer: Layer::AiBadge,
        text: design.ai_text.clone(),
        anchor: TextAnchor::Center {
            cx: design.ai_badge.cx,
            cy: design.ai_badge.cy,
        },
    });
    ops.push(DrawOp::FillRoundedBox {
        layer: Layer::FreeLabel,
        rect: design.free_label,
        color: FREE_LABEL_COLOR,
    });
    ops.push(DrawOp::Text {
        layer: Layer::FreeLabel,
        text: design.free_label_text.clone(),
        anchor: TextAnchor::Within(design.free_label),
    });

    ops
}

#[cfg(test)]
#[path = "../../tests/unit/design/plan.rs"]
mod tests;
