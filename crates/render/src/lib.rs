#![deny(unsafe_code)]
//! Layer program compilation and the compositing pipeline.
//!
//! This crate sits between `texgen-core` (buffer, blending, noise) and
//! `texgen-algorithms` (the per-pixel registry). It provides the
//! [`Layer`]/[`CompiledLayer`] program model, the [`Compositor`] that
//! drives the per-layer pixel loop, and frame output (raw RGBA plus
//! feature-gated PNG).

pub mod compositor;
pub mod layer;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use compositor::Compositor;
pub use layer::{CompiledLayer, Layer, TintSpec};
