use crate::color::palette::PaletteRegistry;
use crate::pattern::makers::MakerRegistry;

/// Palettes and pattern makers available to a pipeline.
///
/// Build once, share by reference. Nothing mutates it after construction, so one registry can
/// serve concurrent requests.
#[derive(Clone, Debug)]
pub struct Registry {
    palettes: PaletteRegistry,
    makers: MakerRegistry,
}

impl Registry {
    /// Combine two tables.
    pub fn new(palettes: PaletteRegistry, makers: MakerRegistry) -> Self {
        Self { palettes, makers }
    }

    /// All built-in palettes and makers.
    pub fn builtin() -> Self {
        Self::new(PaletteRegistry::builtin(), MakerRegistry::builtin())
    }

    /// Palette table.
    pub fn palettes(&self) -> &PaletteRegistry {
        &self.palettes
    }

    /// Maker table.
    pub fn makers(&self) -> &MakerRegistry {
        &self.makers
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
