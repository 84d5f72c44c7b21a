//! HSV colours and the palette algorithms built on them.

/// [`HsvColor`](hsv::HsvColor) and RGB/hex conversion.
pub mod hsv;
/// Palette algorithms, their registry and [`PaletteGenerator`](palette::PaletteGenerator).
pub mod palette;
