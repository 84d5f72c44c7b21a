use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::foundation::math::demultiply_rgba8_in_place;
use crate::render::color::Rgb8;
use crate::svg::scene::Scene;

/// Rasterize SVG `markup` into a straight-alpha `width × height` image.
///
/// The document is scaled to fill the target exactly. With a `background` the canvas is
/// filled with that opaque colour first; without one, uncovered pixels stay transparent.
pub fn rasterize(
    markup: &[u8],
    width: u32,
    height: u32,
    background: Option<Rgb8>,
) -> DelicacyResult<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(DelicacyError::invalid_input(format!(
            "raster size {width}x{height} must be positive"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(markup, &opts).context("parse svg tree")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("failed to allocate {width}x{height} pixmap"))?;
    if let Some(bg) = background {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    }

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba = pixmap.data().to_vec();
    demultiply_rgba8_in_place(&mut rgba);
    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| anyhow::anyhow!("pixmap buffer does not match {width}x{height}").into())
}

/// Rasterize `scene` at its own size, rounded to whole pixels.
pub fn rasterize_scene(scene: &Scene, background: Option<Rgb8>) -> DelicacyResult<RgbaImage> {
    let width = scene.width().round().max(0.0) as u32;
    let height = scene.height().round().max(0.0) as u32;
    rasterize(scene.to_markup().as_bytes(), width, height, background)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
