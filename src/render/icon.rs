use std::io::Cursor;

use crate::foundation::error::{IconError, IconResult};

/// A finished icon raster.
///
/// `data` is row-major premultiplied RGBA8, exactly as the rasterizer produced it. Use
/// [`RenderedIcon::to_rgba_image`] or [`RenderedIcon::encode_png`] for straight alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedIcon {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RenderedIcon {
    /// Straight-alpha copy of the pixel buffer.
    pub fn straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_in_place(&mut out);
        out
    }

    /// Straight-alpha pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = ((y * self.width + x) * 4) as usize;
        let mut px = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        unpremultiply_in_place(&mut px);
        px
    }

    pub fn to_rgba_image(&self) -> IconResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.straight_rgba())
            .ok_or_else(|| IconError::render("invalid rgba buffer size"))
    }

    /// Lossless PNG, RGBA 8 bits per channel.
    pub fn encode_png(&self) -> IconResult<Vec<u8>> {
        let img = self.to_rgba_image()?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| IconError::render(format!("png encode failed: {e}")))?;
        Ok(out.into_inner())
    }
}

/// Decode PNG bytes back into straight RGBA8.
pub fn decode_png(bytes: &[u8]) -> IconResult<image::RgbaImage> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| IconError::render(format!("png decode failed: {e}")))?;
    Ok(img.to_rgba8())
}

pub(crate) fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/icon.rs"]
mod tests;
