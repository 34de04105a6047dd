//! Angle-driven skeleton projection
//!
//! A single-plane projection, not forward kinematics: pitch moves a child
//! joint vertically, yaw horizontally, roll is ignored.

use bodyline_core::{EulerAngles, JointAngles, LineSegment, Point2, JOINT_COUNT};

use crate::{BoneLengths, JointHierarchy, Traverse};

/// Bone length used when projecting a lone angle triple
pub const DEFAULT_PROJECTION_LENGTH: f32 = 15.0;

/// Place a child point `length` away from `start`. Angles in radians.
#[inline]
pub fn estimate_point(start: Point2, angles: EulerAngles, length: f32) -> Point2 {
    let y_offset = angles.pitch.sin() * length;
    let x_offset = angles.yaw.sin() * length;
    Point2::new(start.x + x_offset, start.y + y_offset)
}

/// Like `estimate_point`, for angles in degrees as recorded in session logs
pub fn project_euler(prev: Point2, degrees: EulerAngles, length: f32) -> Point2 {
    estimate_point(prev, degrees.to_radians(), length)
}

/// Grow the skeleton out of `root` one bone at a time.
///
/// Each child joint is placed from its parent using the child's angles
/// (radians) and the bone's length. Yields one segment per bone, in bone
/// order.
pub fn derive_skeleton_lines<'a>(
    hierarchy: &'a JointHierarchy,
    lengths: &'a BoneLengths,
    root: Point2,
    angles: &'a JointAngles,
) -> SkeletonLines<'a> {
    let mut coords = [None; JOINT_COUNT];
    coords[hierarchy.root().index()] = Some(root);
    SkeletonLines {
        bones: hierarchy.traverse(),
        lengths,
        angles,
        coords,
        next_bone: 0,
    }
}

/// Iterator returned by `derive_skeleton_lines`
pub struct SkeletonLines<'a> {
    bones: Traverse<'a>,
    lengths: &'a BoneLengths,
    angles: &'a JointAngles,
    /// Resolved joint coordinates so far
    coords: [Option<Point2>; JOINT_COUNT],
    next_bone: usize,
}

impl SkeletonLines<'_> {
    /// Coordinates of every joint resolved so far
    pub fn resolved(&self) -> &[Option<Point2>; JOINT_COUNT] {
        &self.coords
    }
}

impl Iterator for SkeletonLines<'_> {
    type Item = LineSegment;

    fn next(&mut self) -> Option<LineSegment> {
        let (parent, child) = self.bones.next()?;
        let length = self.lengths.as_slice()[self.next_bone];
        self.next_bone += 1;

        // Depth-first order resolves every parent before its children
        let start = self.coords[parent.index()]?;
        let end = estimate_point(start, self.angles[child], length);
        self.coords[child.index()] = Some(end);

        Some(LineSegment::new(start, end))
    }
}
