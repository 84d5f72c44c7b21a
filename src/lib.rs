//! Delicacy turns a short phrase into a deterministic avatar.
//!
//! The phrase is hashed into a seed. The seed drives two independent halves:
//!
//! - a procedural background: a palette and a pattern maker produce an SVG [`Scene`], which is
//!   rasterized onto a solid colour
//! - a character: one asset per layer of a [`Collection`] is picked by hash chaining and the
//!   layers are stacked
//!
//! [`create()`] composites the character over the background. The same phrase always yields the
//! same pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod character;
pub mod color;
mod create;
pub mod pattern;
mod registry;
pub mod render;
pub mod seed;
pub mod svg;

pub use crate::foundation::error::{DelicacyError, DelicacyResult};
pub use crate::foundation::math::linspace;

pub use crate::character::collection::{Collection, Layer};
pub use crate::character::generator::ImageGenerator;
pub use crate::color::hsv::HsvColor;
pub use crate::color::palette::{PaletteGenerator, PaletteRegistry};
pub use crate::create::{
    CreateOpts, background_scene, create, create_many, encode_png, make_background,
};
pub use crate::pattern::background::BackgroundMaker;
pub use crate::pattern::makers::{MakerArgs, MakerRegistry};
pub use crate::registry::Registry;
pub use crate::render::color::{Rgb8, Theme, parse_background};
pub use crate::render::composite::combine;
pub use crate::render::raster::rasterize;
pub use crate::seed::digest::{Digest, HashFunction, Seed, derive_seed, keyed_hash};
pub use crate::svg::scene::{Element, Scene};
