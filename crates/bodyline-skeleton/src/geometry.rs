//! Skeleton geometry for one tracked body

use bodyline_core::{JointAngles, LineSegment, Point2, TrackingState, JOINT_COUNT};

use crate::{derive_skeleton_lines, BoneId, BoneLengths, JointHierarchy, SkeletonLines, Traverse};

/// Owns the bone lengths of one tracked body and draws it
pub struct SkeletonGeometry {
    hierarchy: &'static JointHierarchy,
    lengths: BoneLengths,
}

impl Default for SkeletonGeometry {
    fn default() -> Self {
        Self::new(BoneLengths::default())
    }
}

impl SkeletonGeometry {
    pub fn new(lengths: BoneLengths) -> Self {
        Self {
            hierarchy: JointHierarchy::standard(),
            lengths,
        }
    }

    pub fn hierarchy(&self) -> &'static JointHierarchy {
        self.hierarchy
    }

    pub fn traverse(&self) -> Traverse<'static> {
        self.hierarchy.traverse()
    }

    pub fn bone_lengths(&self) -> &BoneLengths {
        &self.lengths
    }

    pub fn bone_length(&self, bone: BoneId) -> f32 {
        self.lengths.get(bone)
    }

    /// Re-measure bones from an observed frame; see `BoneLengths::observe`
    pub fn update_bone_lengths(
        &mut self,
        points: &[Point2; JOINT_COUNT],
        states: &[TrackingState; JOINT_COUNT],
    ) -> usize {
        self.lengths.update(self.hierarchy, points, states)
    }

    /// Segments between observed joint points, skipping unmeasurable bones.
    /// Also re-measures the bones it draws.
    pub fn observe(
        &mut self,
        points: &[Point2; JOINT_COUNT],
        states: &[TrackingState; JOINT_COUNT],
    ) -> Vec<LineSegment> {
        self.lengths.observe(self.hierarchy, points, states)
    }

    /// Segments projected from `root` using per-joint angles in radians
    pub fn derive_skeleton_lines<'a>(
        &'a self,
        root: Point2,
        angles: &'a JointAngles,
    ) -> SkeletonLines<'a> {
        derive_skeleton_lines(self.hierarchy, &self.lengths, root, angles)
    }
}
