//! Bodyline Core - Fundamental types and primitives
//!
//! This crate defines the types shared by every other Bodyline crate:
//! - Joint identifiers and tracking states (JointType, TrackingState)
//! - Plane and camera-space geometry (Point2, Position3D, LineSegment)
//! - Joint orientation and Euler conversion (Quaternion, EulerAngles, JointAngles)
//! - The error taxonomy

pub mod error;
pub mod geometry;
pub mod joint;
pub mod orientation;

pub use error::*;
pub use geometry::*;
pub use joint::*;
pub use orientation::*;
