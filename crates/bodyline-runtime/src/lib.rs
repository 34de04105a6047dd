//! Bodyline Runtime - Body stream driver
//!
//! Polls a depth camera runtime through the `BodySource` trait and runs
//! each body frame through the skeleton geometry:
//! 1. Poll for a new body frame
//! 2. Pick the first tracked body
//! 3. Project joints to color space, draw observed bones, refresh bone lengths
//! 4. Convert joint orientations to Euler angles
//! 5. Append the angles to the session log (when recording)
//!
//! Everything is synchronous; the caller owns the polling loop.

pub mod config;
pub mod source;
pub mod stream;
pub mod telemetry;

pub use config::*;
pub use source::*;
pub use stream::*;
