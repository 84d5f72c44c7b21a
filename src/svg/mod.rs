//! Minimal SVG scene builder.
//!
//! The pattern makers only ever append into a [`Scene`](scene::Scene); the scene serializes to
//! markup that the rasterizer in [`crate::render`] consumes. Output is byte-stable: attribute
//! order is insertion order and numbers use a fixed format.

/// Elements, shape constructors and the root [`Scene`](scene::Scene).
pub mod scene;
/// Presentation (stroke/fill), transforms and path data.
pub mod style;
