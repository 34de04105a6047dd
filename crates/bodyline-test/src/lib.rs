//! Bodyline Test Harness - Scripted camera sources and pose generation
//!
//! This crate provides:
//! - A `BodySource` that replays prepared frames
//! - A seeded pose generator with occlusion and jitter presets
//! - End-to-end pipeline tests over a scripted body stream

pub mod integration;
pub mod occlusion;
pub mod scripted;

pub use integration::*;
pub use occlusion::*;
pub use scripted::*;
