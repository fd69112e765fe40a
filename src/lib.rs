//! Procedural launcher icon renderer for the QNVR Android app.
//!
//! The icon is authored once in a 192x192 reference space and re-instanced for every
//! Android density bucket. Rendering is a straight pipeline:
//!
//! 1. **Design**: `size -> IconDesign` (every reference shape scaled to the target size)
//! 2. **Compile**: `IconDesign -> Vec<DrawOp>` (fixed painter's-order display list)
//! 3. **Render**: `Vec<DrawOp> -> RenderedIcon` (CPU rasterizer, premultiplied RGBA8)
//! 4. **Write**: `RenderedIcon -> PNG` via an [`IconSink`]
//!
//! Rendering is pure for a given size and font set: no state survives a call, and font
//! files are read once when the [`IconRenderer`] is built.
#![forbid(unsafe_code)]

pub mod config;
mod design;
mod foundation;
mod output;
mod render;
mod text;

pub use config::{DEFAULT_RES_DIR, IconSetConfig};
pub use design::gradient::gradient_color;
pub use design::plan::{DrawOp, Layer, TextAnchor, compile_design};
pub use design::reference::{BadgeText, Disc, IconDesign, RoundedBox};
pub use foundation::core::{Point, REFERENCE_SIZE, Rgba8, Scale};
pub use foundation::error::{IconError, IconResult};
pub use output::plan::{DensityBucket, IconTarget, IconVariant, OutputPlan};
pub use output::sink::{IconSink, InMemorySink, PngFileSink};
pub use render::cpu::IconRenderer;
pub use render::icon::{RenderedIcon, decode_png};
pub use render::pipeline::{GenerateStats, RenderThreading, generate_icon_set};
pub use text::fonts::{
    FontChain, FontSet, FontSlot, FontSource, LoadedFontChain, LoadedFontFile, LoadedFontSet,
    ResolvedFont,
};
pub use text::layout::{TextBrushRgba8, TextLayoutEngine, text_box};

/// Render the launcher icon at `size x size` with the default font chains.
pub fn render(size: u32) -> IconResult<RenderedIcon> {
    IconRenderer::default().render(size)
}

/// Reference-design constants, in 192px coordinates.
pub mod reference {
    pub use crate::design::gradient::{INNER as GRADIENT_INNER, OUTER as GRADIENT_OUTER};
    pub use crate::design::reference::*;
}
