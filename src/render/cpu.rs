use std::collections::HashMap;

use kurbo::Shape;

use crate::{
    design::plan::{DrawOp, TextAnchor, compile_design},
    design::reference::{BadgeText, Disc, IconDesign, RoundedBox},
    foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Scale},
    foundation::error::{IconError, IconResult},
    render::icon::RenderedIcon,
    text::fonts::{FontSet, FontSlot, LoadedFontSet, ResolvedFont},
    text::layout::{TextBrushRgba8, TextLayoutEngine, text_box},
};

const PATH_TOLERANCE: f64 = 0.1;

/// Shapes overwrite the pixels they cover, alpha included; only antialiased edges mix.
const SHAPE_BLEND: vello_cpu::peniko::BlendMode = vello_cpu::peniko::BlendMode::new(
    vello_cpu::peniko::Mix::Normal,
    vello_cpu::peniko::Compose::Copy,
);

/// Draws the launcher icon onto a transparent canvas with the `vello_cpu` rasterizer.
///
/// Font files are read once in [`IconRenderer::new`]; `render` itself does no IO and holds
/// no state between calls, so one renderer can be shared across threads.
#[derive(Clone, Debug)]
pub struct IconRenderer {
    fonts: LoadedFontSet,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new(&FontSet::default())
    }
}

impl IconRenderer {
    pub fn new(fonts: &FontSet) -> Self {
        Self {
            fonts: fonts.load(),
        }
    }

    /// Render the full icon at `size x size` pixels.
    #[tracing::instrument(skip(self))]
    pub fn render(&self, size: u32) -> IconResult<RenderedIcon> {
        let design = IconDesign::at_size(size)?;
        let ops = compile_design(&design);
        self.render_ops(size, &ops)
    }

    /// Execute an arbitrary display list on a fresh `size x size` transparent canvas.
    pub fn render_ops(&self, size: u32, ops: &[DrawOp]) -> IconResult<RenderedIcon> {
        let side: u16 = Scale::new(size)?
            .size()
            .try_into()
            .map_err(|_| IconError::render("icon size exceeds u16"))?;

        let mut frame = Frame {
            ctx: vello_cpu::RenderContext::new(side, side),
            text: TextLayoutEngine::new(),
            fonts: &self.fonts,
            resolved: HashMap::new(),
            glyph_fonts: HashMap::new(),
        };
        for op in ops {
            frame.draw(op)?;
        }

        let mut pixmap = vello_cpu::Pixmap::new(side, side);
        frame.ctx.flush();
        frame.ctx.render_to_pixmap(&mut pixmap);

        Ok(RenderedIcon {
            width: size,
            height: size,
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }

    /// Resolve both font slots the way a render would, for diagnostics.
    pub fn resolve_fonts(&self) -> Vec<(FontSlot, ResolvedFont)> {
        let mut engine = TextLayoutEngine::new();
        FontSlot::ALL
            .into_iter()
            .map(|slot| (slot, engine.resolve(slot, self.fonts.chain(slot))))
            .collect()
    }
}

/// Per-call drawing state.
struct Frame<'a> {
    ctx: vello_cpu::RenderContext,
    text: TextLayoutEngine,
    fonts: &'a LoadedFontSet,
    resolved: HashMap<FontSlot, ResolvedFont>,
    glyph_fonts: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
}

impl Frame<'_> {
    fn draw(&mut self, op: &DrawOp) -> IconResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillDisc { disc, color, .. } => {
                self.fill(&disc_path(*disc), *color);
                Ok(())
            }
            DrawOp::FillPolygon { points, color, .. } => {
                self.fill(&polygon_path(points), *color);
                Ok(())
            }
            DrawOp::FillRoundedBox { rect, color, .. } => {
                self.fill(&rounded_box_path(*rect), *color);
                Ok(())
            }
            DrawOp::Text { text, anchor, .. } => self.draw_text(text, *anchor),
        }
    }

    fn fill(&mut self, path: &BezPath, color: Rgba8) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.set_blend_mode(SHAPE_BLEND);
        self.ctx.fill_path(&bezpath_to_cpu(path));
        self.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    }

    fn draw_text(&mut self, text: &BadgeText, anchor: TextAnchor) -> IconResult<()> {
        let font = match self.resolved.get(&text.slot) {
            Some(f) => f.clone(),
            None => {
                let f = self.text.resolve(text.slot, self.fonts.chain(text.slot));
                self.resolved.insert(text.slot, f.clone());
                f
            }
        };

        let layout = self.text.layout_plain(
            text.text,
            &font,
            text.size_px as f32,
            TextBrushRgba8::from(text.color),
        )?;
        let (w, h) = text_box(&layout);
        let (x, y) = anchor.origin(w, h);
        self.ctx.set_transform(affine_to_cpu(Affine::translate((
            f64::from(x),
            f64::from(y),
        ))));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let face = run.run().font();
                let font = self.glyph_font(face.data.id(), face.data.data(), face.index);
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    /// Rasterizer handle for the face Parley picked, which may be a system fallback
    /// rather than the resolved slot font.
    fn glyph_font(
        &mut self,
        blob_id: u64,
        bytes: &[u8],
        index: u32,
    ) -> vello_cpu::peniko::FontData {
        self.glyph_fonts
            .entry((blob_id, index))
            .or_insert_with(|| {
                let blob = vello_cpu::peniko::Blob::from(bytes.to_vec());
                vello_cpu::peniko::FontData::new(blob, index)
            })
            .clone()
    }
}

/// Disc covering the inclusive pixel box `[cx - r, cx + r]`.
fn disc_path(d: Disc) -> BezPath {
    let rect = Rect::new(
        f64::from(d.cx - d.r),
        f64::from(d.cy - d.r),
        f64::from(d.cx + d.r + 1),
        f64::from(d.cy + d.r + 1),
    );
    kurbo::Ellipse::from_rect(rect).to_path(PATH_TOLERANCE)
}

fn rounded_box_path(b: RoundedBox) -> BezPath {
    kurbo::RoundedRect::new(
        f64::from(b.x),
        f64::from(b.y),
        f64::from(b.x + b.w + 1),
        f64::from(b.y + b.h + 1),
        f64::from(b.radius),
    )
    .to_path(PATH_TOLERANCE)
}

fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.iter();
    if let Some(&first) = it.next() {
        path.move_to(first);
        for &p in it {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
