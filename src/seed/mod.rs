//! Phrase-to-seed derivation and seeded random streams.

/// Digests, the hash-function seam, phrase normalisation and [`Seed`](digest::Seed).
pub mod digest;
/// The seeded pseudo-random stream consumed by palettes and makers.
pub mod stream;
