use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::character::collection::Collection;
use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::render::composite::paste_over;
use crate::seed::digest::{Digest, HashFunction, derive_seed_with, keyed_hash};

/// Picks one asset per layer of a [`Collection`] from a phrase and stacks them.
///
/// Picks chain digests: the phrase digest is keyed with the collection name, that result with
/// each layer name, and the layer digest modulo the layer's asset count selects the asset. The
/// hash is a type parameter so tests can substitute a fixed one.
#[derive(Clone, Debug)]
pub struct ImageGenerator<H: HashFunction = sha3::Sha3_512> {
    collection: Collection,
    hash: PhantomData<fn() -> H>,
}

impl ImageGenerator {
    /// Generator over `collection` using SHA3-512.
    pub fn new(collection: Collection) -> Self {
        Self::with_hash(collection)
    }
}

impl<H: HashFunction> ImageGenerator<H> {
    /// Generator over `collection` using hash `H`.
    pub fn with_hash(collection: Collection) -> Self {
        Self {
            collection,
            hash: PhantomData,
        }
    }

    /// The collection being drawn from.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Asset index `layer_digest mod assets.len()` within `assets`.
    pub fn pick<'a>(layer_digest: &Digest, assets: &'a [PathBuf]) -> DelicacyResult<&'a Path> {
        let n = assets.len() as u64;
        let idx = layer_digest
            .checked_rem(n)
            .ok_or_else(|| DelicacyError::not_found("no assets to pick from"))?;
        assets
            .get(idx as usize)
            .map(PathBuf::as_path)
            .ok_or_else(|| DelicacyError::not_found(format!("asset index {idx} out of range")))
    }

    /// One asset per layer, bottom first.
    pub fn pick_layers(&self, seed_digest: &Digest) -> DelicacyResult<Vec<PathBuf>> {
        let base = keyed_hash::<H>(seed_digest.as_bytes(), self.collection.name());
        self.collection
            .layers()
            .iter()
            .map(|layer| -> DelicacyResult<PathBuf> {
                let assets = layer.assets()?;
                let digest = keyed_hash::<H>(base.as_bytes(), layer.name());
                let picked = Self::pick(&digest, &assets)?.to_path_buf();
                debug!(layer = layer.name(), asset = %picked.display(), "picked");
                Ok(picked)
            })
            .collect()
    }

    /// Character for `phrase` on a transparent `size` frame.
    #[tracing::instrument(skip(self), fields(collection = %self.collection.name()))]
    pub fn generate(
        &self,
        phrase: &str,
        size: (u32, u32),
        blend_factor: f64,
    ) -> DelicacyResult<RgbaImage> {
        let (digest, _) = derive_seed_with::<H>(phrase)?;
        let layers = self.pick_layers(&digest)?;
        assemble(&layers, size, blend_factor)
    }
}

fn open_rgba(path: &Path) -> DelicacyResult<RgbaImage> {
    let bytes = std::fs::read(path).with_context(|| format!("read asset {}", path.display()))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode asset {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Stack `layers` bottom first, shrink by `blend_factor` and place the result bottom-centre on
/// a transparent `size` frame.
///
/// Every layer is drawn at the origin of the first one, whose size sets the stack size.
pub fn assemble(
    layers: &[PathBuf],
    size: (u32, u32),
    blend_factor: f64,
) -> DelicacyResult<RgbaImage> {
    if !(blend_factor > 0.0 && blend_factor <= 1.0) {
        return Err(DelicacyError::invalid_input(format!(
            "blend factor {blend_factor} not in (0, 1]"
        )));
    }
    let (fw, fh) = size;
    if fw == 0 || fh == 0 {
        return Err(DelicacyError::invalid_input(format!(
            "frame size {fw}x{fh} must be positive"
        )));
    }

    let (first, rest) = layers
        .split_first()
        .ok_or_else(|| DelicacyError::not_found("no layers to assemble"))?;
    let mut stack = open_rgba(first)?;
    for path in rest {
        paste_over(&mut stack, &open_rgba(path)?, 0, 0);
    }

    let lw = ((f64::from(fw) * blend_factor).floor() as u32).max(1);
    let lh = ((f64::from(fh) * blend_factor).floor() as u32).max(1);
    let shrunk = imageops::resize(&stack, lw, lh, FilterType::CatmullRom);

    let mut frame = RgbaImage::new(fw, fh);
    paste_over(
        &mut frame,
        &shrunk,
        i64::from((fw - lw) / 2),
        i64::from(fh - lh),
    );
    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/character/generator.rs"]
mod tests;
