use crate::foundation::core::Rgba8;

/// Background color at the rim of the disc.
pub const OUTER: Rgba8 = Rgba8::opaque(26, 115, 115);
/// Background color at the disc center.
pub const INNER: Rgba8 = Rgba8::opaque(13, 71, 71);

/// Color of the background ring with radius `r` inside a disc of radius `max_r`.
///
/// `channel = outer + (inner - outer) * (1 - r / max_r)`, truncated toward zero. `r` is
/// clamped into `1..=max_r`.
pub fn gradient_color(r: u32, max_r: u32) -> Rgba8 {
    let max_r = max_r.max(1);
    let r = r.clamp(1, max_r);
    let t = 1.0 - f64::from(r) / f64::from(max_r);
    let lerp = |outer: u8, inner: u8| -> u8 {
        let v = f64::from(outer) + (f64::from(inner) - f64::from(outer)) * t;
        v.trunc() as u8
    };
    Rgba8::opaque(
        lerp(OUTER.r, INNER.r),
        lerp(OUTER.g, INNER.g),
        lerp(OUTER.b, INNER.b),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/design/gradient.rs"]
mod tests;
