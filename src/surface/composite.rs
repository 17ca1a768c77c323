//! Straight-alpha export compositing
//!
//! The export path blends the committed layer directly over the untouched
//! source pixels instead of going through a premultiplied pixmap, so any
//! pixel without ink is returned bit-for-bit unchanged (even translucent
//! source pixels that would not survive a premultiply round trip).

use image::{Rgba, RgbaImage};
use tiny_skia::{Pixmap, PremultipliedColorU8};

/// Source-over blend of one premultiplied pixel onto a straight-alpha pixel
pub fn blend_over(dst: Rgba<u8>, src: PremultipliedColorU8) -> Rgba<u8> {
    match src.alpha() {
        0 => dst,
        255 => {
            let c = src.demultiply();
            Rgba([c.red(), c.green(), c.blue(), 255])
        }
        sa => {
            let sa = f32::from(sa) / 255.0;
            let da = f32::from(dst[3]) / 255.0;
            let out_a = sa + da * (1.0 - sa);
            let channel = |s: u8, d: u8| {
                let premul = f32::from(s) / 255.0 + f32::from(d) / 255.0 * da * (1.0 - sa);
                ((premul / out_a) * 255.0).round().clamp(0.0, 255.0) as u8
            };
            Rgba([
                channel(src.red(), dst[0]),
                channel(src.green(), dst[1]),
                channel(src.blue(), dst[2]),
                (out_a * 255.0).round() as u8,
            ])
        }
    }
}

/// Composite a premultiplied layer over a straight-alpha base of the same size
pub fn composite_over(base: &RgbaImage, layer: &Pixmap) -> RgbaImage {
    debug_assert_eq!(base.dimensions(), (layer.width(), layer.height()));
    let mut out = base.clone();
    for (dst, src) in out.pixels_mut().zip(layer.pixels()) {
        *dst = blend_over(*dst, *src);
    }
    out
}
