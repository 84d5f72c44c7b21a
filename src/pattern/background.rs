use tracing::debug;

use crate::color::palette::PaletteGenerator;
use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::pattern::makers::{Maker, MakerArgs};
use crate::registry::Registry;
use crate::seed::digest::{Seed, derive_seed};
use crate::seed::stream::{RandomStream, StreamDomain};
use crate::svg::scene::Scene;

/// One background: a maker, a palette and the seed driving both.
///
/// Single use. [`BackgroundMaker::generate`] consumes the maker because the pattern stream it
/// owns has advanced past the palette choice; generating again from the same state would not
/// reproduce the first result.
#[derive(Debug)]
pub struct BackgroundMaker {
    maker: Maker,
    palette: PaletteGenerator,
    rng: RandomStream,
}

impl BackgroundMaker {
    /// Resolve `maker` and `palette` in `registry`.
    ///
    /// A missing palette is chosen from the registry's preferred list with the
    /// [`StreamDomain::Pattern`] stream; a missing seed is drawn at random.
    pub fn new(
        registry: &Registry,
        maker: &str,
        palette: Option<&str>,
        seed: Option<Seed>,
    ) -> DelicacyResult<Self> {
        let maker = registry.makers().get(maker)?;
        let seed = seed.unwrap_or_else(Seed::random);
        let mut rng = seed.stream(StreamDomain::Pattern);

        let palette = match palette {
            Some(name) => registry.palettes().get(name)?,
            None => rng
                .choose(registry.palettes().preferred())
                .copied()
                .ok_or_else(|| DelicacyError::invalid_input("no preferred palettes registered"))?,
        };

        debug!(maker = maker.name(), palette = palette.name(), %seed, "background resolved");
        Ok(Self {
            maker,
            palette: PaletteGenerator::for_palette(palette, Some(seed)),
            rng,
        })
    }

    /// Seed from `phrase` and let the seed pick the palette.
    pub fn from_phrase(registry: &Registry, phrase: &str, maker: &str) -> DelicacyResult<Self> {
        let (_, seed) = derive_seed(phrase)?;
        Self::new(registry, maker, None, Some(seed))
    }

    /// The resolved maker.
    pub fn maker(&self) -> Maker {
        self.maker
    }

    /// The palette generator, seeded like the pattern.
    pub fn palette(&self) -> &PaletteGenerator {
        &self.palette
    }

    /// Draw a `width × height` scene with `n_colors` palette colours and default densities.
    pub fn generate(self, width: f64, height: f64, n_colors: usize) -> DelicacyResult<Scene> {
        self.generate_with(&MakerArgs::new(width, height), n_colors)
    }

    /// Draw with explicit maker arguments.
    pub fn generate_with(mut self, args: &MakerArgs, n_colors: usize) -> DelicacyResult<Scene> {
        let colors = self.palette.generate_hex(n_colors)?;
        let scene = self.maker.build(args, &colors, &mut self.rng)?;
        debug!(
            maker = self.maker.name(),
            elements = scene.len(),
            "background drawn"
        );
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/background.rs"]
mod tests;
