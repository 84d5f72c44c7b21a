//! Layered character art picked deterministically from a phrase.

/// Collections of asset layers on disk.
pub mod collection;
/// Phrase → layer picks → assembled character image.
pub mod generator;
