//! Raster side of the pipeline: colours, SVG rasterization and alpha compositing.

/// Solid colours, hex parsing and background themes.
pub mod color;
/// Straight-alpha RGBA compositing.
pub mod composite;
/// SVG markup to RGBA pixels.
pub mod raster;
