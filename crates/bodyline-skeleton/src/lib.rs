//! Bodyline Skeleton - Joint hierarchy and skeleton geometry
//!
//! # Bone order
//!
//! The joint hierarchy is walked depth-first in a fixed order. The position
//! of a bone in that walk is its `BoneId`, and every per-bone table
//! (lengths, drawn segments) is indexed by it. `JointHierarchy::bones()` is
//! the single source of that order.
//!
//! # Two ways to draw a body
//!
//! - Observed: segments between the joints' projected pixel positions.
//!   Observing a body also refreshes the bone lengths.
//! - Projected: segments grown outward from a root point using each
//!   joint's angles and the last known bone lengths.

pub mod bones;
pub mod geometry;
pub mod hierarchy;
pub mod projection;

pub use bones::*;
pub use geometry::*;
pub use hierarchy::*;
pub use projection::*;
