//! Bone lengths estimated from observed frames

use bodyline_core::{LineSegment, Point2, TrackingState, JOINT_COUNT};

use crate::{BoneId, JointHierarchy, BONE_COUNT};

/// Length every bone starts with before a body has been observed
pub const DEFAULT_BONE_LENGTH: f32 = 100.0;

/// Whether a bone between joints in these states can be measured.
///
/// Rejected when either end is not tracked, or when both ends are only
/// inferred.
pub fn bone_observable(parent: TrackingState, child: TrackingState) -> bool {
    match (parent, child) {
        (TrackingState::NotTracked, _) | (_, TrackingState::NotTracked) => false,
        (TrackingState::Inferred, TrackingState::Inferred) => false,
        _ => true,
    }
}

/// Per-bone length table, indexed by `BoneId`
#[derive(Debug, Clone, PartialEq)]
pub struct BoneLengths {
    lengths: [f32; BONE_COUNT],
}

impl Default for BoneLengths {
    fn default() -> Self {
        Self::uniform(DEFAULT_BONE_LENGTH)
    }
}

impl BoneLengths {
    pub fn uniform(length: f32) -> Self {
        Self {
            lengths: [length; BONE_COUNT],
        }
    }

    pub fn get(&self, bone: BoneId) -> f32 {
        self.lengths[bone.index()]
    }

    pub fn set(&mut self, bone: BoneId, length: f32) {
        self.lengths[bone.index()] = length;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.lengths
    }

    /// Measure every observable bone from projected joint points.
    ///
    /// Bones that cannot be measured keep their previous length so a
    /// briefly occluded limb keeps its size. That covers bones rejected by
    /// `bone_observable` and bones with an endpoint the runtime could not
    /// map to color space (non-finite pixel). Returns the measured bones'
    /// segments in bone order.
    pub fn observe(
        &mut self,
        hierarchy: &JointHierarchy,
        points: &[Point2; JOINT_COUNT],
        states: &[TrackingState; JOINT_COUNT],
    ) -> Vec<LineSegment> {
        let mut segments = Vec::with_capacity(BONE_COUNT);

        for bone in hierarchy.bones() {
            let (p, c) = (bone.parent.index(), bone.child.index());
            if !bone_observable(states[p], states[c])
                || !points[p].is_finite()
                || !points[c].is_finite()
            {
                tracing::trace!(bone = bone.id.index(), parent = %bone.parent, child = %bone.child, "bone not observable, keeping length");
                continue;
            }

            let segment = LineSegment::new(points[p], points[c]);
            let length = segment.length();
            tracing::trace!(bone = bone.id.index(), length, "bone length updated");
            self.lengths[bone.id.index()] = length;
            segments.push(segment);
        }

        segments
    }

    /// Measure every observable bone, returning how many were updated
    pub fn update(
        &mut self,
        hierarchy: &JointHierarchy,
        points: &[Point2; JOINT_COUNT],
        states: &[TrackingState; JOINT_COUNT],
    ) -> usize {
        self.observe(hierarchy, points, states).len()
    }
}
