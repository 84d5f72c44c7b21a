use image::RgbaImage;

use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::foundation::math::{
    demultiply_rgba8_in_place, mul_div255_u16, premultiply_rgba8_in_place,
};

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

fn add_sat_u8(a: u16, b: u16) -> u8 {
    (a + b).min(255) as u8
}

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = add_sat_u8(u16::from(src[i]), mul_div255_u16(u16::from(dst[i]), inv));
    }
    out
}

/// Draw straight-alpha `src` over `dst` with its top-left corner at `(x, y)`.
///
/// Parts of `src` falling outside `dst` are clipped.
pub fn paste_over(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));
    let (x0, y0) = (x.max(0), y.max(0));
    let (x1, y1) = ((x + sw).min(dw), (y + sh).min(dh));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let mut src_premul = src.as_raw().clone();
    premultiply_rgba8_in_place(&mut src_premul);

    let dst_buf: &mut [u8] = dst;
    for dy in y0..y1 {
        for dx in x0..x1 {
            let si = (((dy - y) * sw + (dx - x)) * 4) as usize;
            let di = ((dy * dw + dx) * 4) as usize;
            let mut s = [0u8; 4];
            s.copy_from_slice(&src_premul[si..si + 4]);
            let mut d = [0u8; 4];
            d.copy_from_slice(&dst_buf[di..di + 4]);
            premultiply_rgba8_in_place(&mut d);

            let mut out = over(d, s);
            demultiply_rgba8_in_place(&mut out);
            dst_buf[di..di + 4].copy_from_slice(&out);
        }
    }
}

/// Draw `character` over `background`. Both must have the same size.
pub fn combine(character: &RgbaImage, background: &RgbaImage) -> DelicacyResult<RgbaImage> {
    if character.dimensions() != background.dimensions() {
        let (cw, ch) = character.dimensions();
        let (bw, bh) = background.dimensions();
        return Err(DelicacyError::dimension_mismatch(format!(
            "character is {cw}x{ch}, background is {bw}x{bh}"
        )));
    }
    let mut out = background.clone();
    paste_over(&mut out, character, 0, 0);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
