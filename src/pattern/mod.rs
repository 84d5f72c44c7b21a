//! Procedural background patterns.

/// The [`BackgroundMaker`](background::BackgroundMaker) orchestrator.
pub mod background;
/// Shared building blocks: spaced random draws, point planes, basic shapes and the fade effect.
pub mod helpers;
/// Registered pattern makers.
pub mod makers;
