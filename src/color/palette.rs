use std::fmt;

use crate::color::hsv::{HUE_MAX, HsvColor, SAT_MAX, VAL_MAX};
use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::foundation::math::linspace;
use crate::seed::digest::Seed;
use crate::seed::stream::{RandomStream, StreamDomain};

/// Largest colour count a palette produces in one call.
pub const MAX_COLORS: usize = 4096;

/// A palette algorithm: `count` colours drawn from one stream.
///
/// Implementations must return exactly `count` colours and consume the stream in a fixed
/// order.
pub type PaletteFn = fn(usize, &mut RandomStream) -> DelicacyResult<Vec<HsvColor>>;

/// A named, registered palette algorithm.
#[derive(Clone, Copy)]
pub struct Palette {
    name: &'static str,
    func: PaletteFn,
}

impl Palette {
    /// Registered name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the algorithm against a caller-provided stream. `count` above [`MAX_COLORS`] is
    /// rejected.
    pub fn colors(&self, count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
        if count > MAX_COLORS {
            return Err(DelicacyError::invalid_input(format!(
                "colour count {count} exceeds {MAX_COLORS}"
            )));
        }
        (self.func)(count, rng)
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Palette").field(&self.name).finish()
    }
}

/// Default hue spread of [`analogous`], in degrees either side of the base hue.
pub const ANALOGOUS_HUE_VARIANCE: i64 = 25;
/// Default gap between the two saturation levels of [`analogous`].
pub const ANALOGOUS_SAT_VARIANCE: i64 = 25;

/// Adjacent hues around one base hue, alternating between two saturations, one shared value.
pub fn analogous(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    analogous_with(count, rng, ANALOGOUS_HUE_VARIANCE, ANALOGOUS_SAT_VARIANCE)
}

/// [`analogous`] with explicit spreads.
pub fn analogous_with(
    count: usize,
    rng: &mut RandomStream,
    hue_variance: i64,
    sat_variance: i64,
) -> DelicacyResult<Vec<HsvColor>> {
    if hue_variance < 0 || !(0..=i64::from(SAT_MAX) - 30).contains(&sat_variance) {
        return Err(DelicacyError::invalid_input(format!(
            "analogous variances out of range: hue {hue_variance}, sat {sat_variance}"
        )));
    }

    let base_hue = rng.int_in(0, i64::from(HUE_MAX) - 1);
    let hues = linspace(
        (base_hue - hue_variance) as f64,
        (base_hue + hue_variance) as f64,
        count,
    );

    let base_sat = rng.int_in(30, i64::from(SAT_MAX) - sat_variance);
    let high_sat = (base_sat + sat_variance).min(i64::from(SAT_MAX));
    let sats = [base_sat, high_sat].into_iter().cycle();

    let val = rng.int_in(50, i64::from(VAL_MAX));

    hues.into_iter()
        .zip(sats)
        .map(|(hue, sat)| HsvColor::new(hue, sat as f64, val as f64))
        .collect()
}

/// One hue; saturations and values drawn independently per colour.
pub fn monochromatic(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    let hue = rng.int_in(0, i64::from(HUE_MAX) - 1);
    let sats = rng.ints_below(0, i64::from(SAT_MAX) - 10, count);
    let vals = rng.ints_below(50, i64::from(VAL_MAX) + 1, count);

    sats.into_iter()
        .zip(vals)
        .map(|(sat, val)| HsvColor::new(hue as f64, sat as f64, val as f64))
        .collect()
}

/// One hue mixed with black: full saturation, values evenly spaced from 0 to 100.
pub fn shade(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    let hue = rng.int_in(0, i64::from(HUE_MAX) - 1);
    linspace(0.0, f64::from(VAL_MAX), count)
        .into_iter()
        .map(|val| HsvColor::new(hue as f64, f64::from(SAT_MAX), val))
        .collect()
}

/// One hue mixed with white: full value, saturations evenly spaced from 0 to 100.
pub fn tint(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    let hue = rng.int_in(0, i64::from(HUE_MAX) - 1);
    linspace(0.0, f64::from(SAT_MAX), count)
        .into_iter()
        .map(|sat| HsvColor::new(hue as f64, sat, f64::from(VAL_MAX)))
        .collect()
}

/// Split the colour wheel into `n_segments` equal steps starting at a random hue.
///
/// Colours walk the wheel one step at a time (wrapping), each with its own vivid
/// saturation and value.
pub fn segment(
    n_segments: i64,
    count: usize,
    rng: &mut RandomStream,
) -> DelicacyResult<Vec<HsvColor>> {
    if n_segments <= 0 {
        return Err(DelicacyError::invalid_input(format!(
            "segment count must be positive, got {n_segments}"
        )));
    }

    let base_hue = rng.int_in(0, i64::from(HUE_MAX) - 1);
    let step = i64::from(HUE_MAX) / n_segments;
    let sats = rng.ints_below(70, i64::from(SAT_MAX) - 10, count);
    let vals = rng.ints_below(70, i64::from(VAL_MAX) + 1, count);

    sats.into_iter()
        .zip(vals)
        .enumerate()
        .map(|(i, (sat, val))| {
            let hue = base_hue + step * i as i64;
            HsvColor::new(hue as f64, sat as f64, val as f64)
        })
        .collect()
}

/// Two opposite hues.
pub fn complementary(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    segment(2, count, rng)
}

/// Three hues 120° apart.
pub fn triad(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    segment(3, count, rng)
}

/// Four hues 90° apart.
pub fn square(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    segment(4, count, rng)
}

/// Saturation/value ranges (half-open) of a parametrized palette family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Family {
    /// Saturation range `[lo, hi)`.
    pub sat: (i64, i64),
    /// Value range `[lo, hi)`.
    pub val: (i64, i64),
}

/// Deep, saturated mid-value tones.
pub const JEWEL: Family = Family {
    sat: (73, 83),
    val: (56, 76),
};
/// Soft, light tones.
pub const PASTEL: Family = Family {
    sat: (25, 35),
    val: (85, 92),
};
/// Muted tones.
pub const EARTH: Family = Family {
    sat: (36, 41),
    val: (36, 77),
};
/// Bright, saturated tones.
pub const NEON: Family = Family {
    sat: (63, 100),
    val: (82, 100),
};

/// Independent random hues sharing one saturation and one value drawn from `family`.
pub fn family(
    family: Family,
    count: usize,
    rng: &mut RandomStream,
) -> DelicacyResult<Vec<HsvColor>> {
    let Family {
        sat: (sat_lo, sat_hi),
        val: (val_lo, val_hi),
    } = family;
    if sat_lo >= sat_hi || val_lo >= val_hi {
        return Err(DelicacyError::invalid_input("empty palette family range"));
    }

    let hues = rng.ints_below(0, i64::from(HUE_MAX), count);
    let sat = rng.int_in(sat_lo, sat_hi - 1);
    let val = rng.int_in(val_lo, val_hi - 1);

    hues.into_iter()
        .map(|hue| HsvColor::new(hue as f64, sat as f64, val as f64))
        .collect()
}

/// [`JEWEL`] family.
pub fn jewel(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    family(JEWEL, count, rng)
}

/// [`PASTEL`] family.
pub fn pastel(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    family(PASTEL, count, rng)
}

/// [`EARTH`] family.
pub fn earth(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    family(EARTH, count, rng)
}

/// [`NEON`] family.
pub fn neon(count: usize, rng: &mut RandomStream) -> DelicacyResult<Vec<HsvColor>> {
    family(NEON, count, rng)
}

/// Palettes eligible for random choice, in draw order.
///
/// A seed picks an index into this list, so reordering it changes existing outputs.
pub const PREFERRED_PALETTES: [&str; 7] = [
    "analogous",
    "tint",
    "shade",
    "square",
    "jewel",
    "pastel",
    "neon",
];

/// Immutable name → palette table.
///
/// Built once (usually via [`PaletteRegistry::builtin`]) and shared by reference; registration
/// happens only while building.
#[derive(Clone, Debug)]
pub struct PaletteRegistry {
    entries: Vec<Palette>,
    preferred: Vec<Palette>,
}

impl PaletteRegistry {
    /// Registry with no palettes.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            preferred: Vec::new(),
        }
    }

    /// Every built-in palette, with [`PREFERRED_PALETTES`] as the random-choice subset.
    pub fn builtin() -> Self {
        let table: [(&'static str, PaletteFn); 11] = [
            ("analogous", analogous),
            ("monochromatic", monochromatic),
            ("shade", shade),
            ("tint", tint),
            ("complementary", complementary),
            ("triad", triad),
            ("square", square),
            ("jewel", jewel),
            ("pastel", pastel),
            ("earth", earth),
            ("neon", neon),
        ];
        let entries: Vec<Palette> = table
            .into_iter()
            .map(|(name, func)| Palette { name, func })
            .collect();
        let preferred = PREFERRED_PALETTES
            .iter()
            .filter_map(|name| entries.iter().find(|p| p.name == *name).copied())
            .collect();
        Self { entries, preferred }
    }

    /// Add a palette. Names must be unique.
    pub fn register(
        &mut self,
        name: &'static str,
        func: PaletteFn,
        preferred: bool,
    ) -> DelicacyResult<()> {
        if self.entries.iter().any(|p| p.name == name) {
            return Err(DelicacyError::invalid_input(format!(
                "palette '{name}' is already registered"
            )));
        }
        let palette = Palette { name, func };
        self.entries.push(palette);
        if preferred {
            self.preferred.push(palette);
        }
        Ok(())
    }

    /// Look up a registered palette.
    pub fn get(&self, name: &str) -> DelicacyResult<Palette> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .copied()
            .ok_or_else(|| DelicacyError::invalid_input(format!("unknown palette '{name}'")))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|p| p.name)
    }

    /// Palettes eligible for random choice, in draw order.
    pub fn preferred(&self) -> &[Palette] {
        &self.preferred
    }
}

/// Seeded driver for one palette.
///
/// Every call to [`PaletteGenerator::generate`] opens a fresh [`StreamDomain::Palette`] stream
/// from the seed, so repeated calls return the same colours.
#[derive(Clone, Debug)]
pub struct PaletteGenerator {
    palette: Palette,
    seed: Seed,
}

impl PaletteGenerator {
    /// Generator for the registered palette `name`. A missing seed draws a random one.
    pub fn new(registry: &PaletteRegistry, name: &str, seed: Option<Seed>) -> DelicacyResult<Self> {
        let palette = registry.get(name)?;
        Ok(Self::for_palette(palette, seed))
    }

    pub(crate) fn for_palette(palette: Palette, seed: Option<Seed>) -> Self {
        Self {
            palette,
            seed: seed.unwrap_or_else(Seed::random),
        }
    }

    /// The palette being generated.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// The seed in use.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Exactly `count` colours; `count` above [`MAX_COLORS`] is rejected.
    pub fn generate(&self, count: usize) -> DelicacyResult<Vec<HsvColor>> {
        let mut rng = self.seed.stream(StreamDomain::Palette);
        let colors = self.palette.colors(count, &mut rng)?;
        if colors.len() != count {
            return Err(DelicacyError::invalid_input(format!(
                "palette '{}' produced {} colours, expected {count}",
                self.palette.name,
                colors.len()
            )));
        }
        Ok(colors)
    }

    /// Exactly `count` colours as `#rrggbb` strings.
    pub fn generate_hex(&self, count: usize) -> DelicacyResult<Vec<String>> {
        Ok(self
            .generate(count)?
            .into_iter()
            .map(HsvColor::to_hex)
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
