use std::borrow::Cow;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{IconError, IconResult},
    text::fonts::{FontSlot, FontSource, LoadedFontChain, ResolvedFont},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Stateful helper for resolving fonts and building Parley layouts.
///
/// One engine is created per render call so no font registrations leak between icons.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register raw font bytes and return the primary family name they provide.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> IconResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| IconError::font("no font families registered from font bytes"))?;

        Ok(self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| IconError::font("registered font family has no name"))?
            .to_string())
    }

    /// Walk `chain` in order and settle on the first face that registers.
    ///
    /// Never fails: an exhausted chain resolves to the system `sans-serif` family.
    #[tracing::instrument(skip(self, chain), fields(candidates = chain.faces.len()))]
    pub fn resolve(&mut self, slot: FontSlot, chain: &LoadedFontChain) -> ResolvedFont {
        for face in &chain.faces {
            match self.register_font(&face.bytes) {
                Ok(family) => {
                    tracing::debug!(path = %face.path.display(), %family, "font resolved");
                    return ResolvedFont {
                        source: FontSource::File(face.path.clone()),
                        family,
                        bytes: Some(face.bytes.clone()),
                    };
                }
                Err(e) => {
                    tracing::debug!(
                        path = %face.path.display(),
                        error = %e,
                        "font candidate rejected"
                    );
                }
            }
        }

        tracing::debug!(slot = slot.name(), "using system default font");
        ResolvedFont::system_default()
    }

    /// Shape a single unwrapped line of text.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font: &ResolvedFont,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> IconResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(IconError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let family = match font.source {
            FontSource::File(_) => {
                parley::style::FontFamily::Named(Cow::Owned(font.family.clone()))
            }
            FontSource::SystemDefault => {
                parley::style::FontFamily::Generic(parley::fontique::GenericFamily::SansSerif)
            }
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Single(family),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Integer extent `(w, h)` of a laid out block, rounded up to whole pixels.
pub fn text_box(layout: &parley::Layout<TextBrushRgba8>) -> (i32, i32) {
    (layout.width().ceil() as i32, layout.height().ceil() as i32)
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
