use std::io::Cursor;

use anyhow::Context;
use image::RgbaImage;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::character::generator::ImageGenerator;
use crate::color::palette::MAX_COLORS;
use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::pattern::background::BackgroundMaker;
use crate::registry::Registry;
use crate::render::color::{Rgb8, Theme};
use crate::render::composite::combine;
use crate::render::raster::rasterize;
use crate::seed::digest::HashFunction;
use crate::svg::scene::Scene;

/// Output options shared by every stage of one request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOpts {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Palette colours handed to the pattern maker, at most [`MAX_COLORS`].
    pub n_colors: usize,
    /// Character size relative to the frame, in `(0, 1]`.
    pub blend_factor: f64,
    /// Solid colour behind the pattern; `None` leaves it transparent.
    pub background: Option<Rgb8>,
}

impl Default for CreateOpts {
    fn default() -> Self {
        Self {
            width: 320,
            height: 320,
            n_colors: 4,
            blend_factor: 0.8,
            background: Some(Theme::Dark.color()),
        }
    }
}

impl CreateOpts {
    fn validate(&self) -> DelicacyResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DelicacyError::invalid_input(format!(
                "output size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if self.n_colors > MAX_COLORS {
            return Err(DelicacyError::invalid_input(format!(
                "n_colors {} exceeds {MAX_COLORS}",
                self.n_colors
            )));
        }
        Ok(())
    }
}

/// Background scene for `phrase`, before rasterization.
pub fn background_scene(
    registry: &Registry,
    phrase: &str,
    maker: &str,
    opts: &CreateOpts,
) -> DelicacyResult<Scene> {
    opts.validate()?;
    BackgroundMaker::from_phrase(registry, phrase, maker)?.generate(
        f64::from(opts.width),
        f64::from(opts.height),
        opts.n_colors,
    )
}

/// Rasterized background for `phrase` at the requested size.
#[tracing::instrument(skip(registry, opts), fields(width = opts.width, height = opts.height))]
pub fn make_background(
    registry: &Registry,
    phrase: &str,
    maker: &str,
    opts: &CreateOpts,
) -> DelicacyResult<RgbaImage> {
    let scene = background_scene(registry, phrase, maker, opts)?;
    rasterize(
        scene.to_markup().as_bytes(),
        opts.width,
        opts.height,
        opts.background,
    )
}

/// Character from `generator` composited over the background from `maker`, both for `phrase`.
#[tracing::instrument(skip(registry, generator, opts), fields(collection = %generator.collection().name()))]
pub fn create<H: HashFunction>(
    registry: &Registry,
    generator: &ImageGenerator<H>,
    phrase: &str,
    maker: &str,
    opts: &CreateOpts,
) -> DelicacyResult<RgbaImage> {
    opts.validate()?;
    let character = generator.generate(phrase, (opts.width, opts.height), opts.blend_factor)?;
    let background = make_background(registry, phrase, maker, opts)?;
    combine(&character, &background)
}

/// [`create`] for many phrases in parallel. Results keep the input order.
pub fn create_many<H: HashFunction>(
    registry: &Registry,
    generator: &ImageGenerator<H>,
    phrases: &[String],
    maker: &str,
    opts: &CreateOpts,
) -> Vec<DelicacyResult<RgbaImage>> {
    phrases
        .par_iter()
        .map(|phrase| create(registry, generator, phrase, maker, opts))
        .collect()
}

/// PNG bytes for `image`.
pub fn encode_png(image: &RgbaImage) -> DelicacyResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../tests/unit/create.rs"]
mod tests;
