//! Joint hierarchy - the fixed parent/child tree of a tracked body
//!
//! Each edge means the child joint's rotation is expressed in the parent
//! joint's frame. The root is `SpineBase`.

use std::sync::OnceLock;

use bodyline_core::{JointType, JOINT_COUNT};

/// Number of bones (edges) in the hierarchy
pub const BONE_COUNT: usize = JOINT_COUNT - 1;

/// Children of each joint, in visitation order
const ADJACENCY: &[(JointType, &[JointType])] = {
    use JointType::*;
    &[
        (SpineBase, &[HipRight, HipLeft, SpineMid]),
        (HipRight, &[KneeRight]),
        (KneeRight, &[AnkleRight]),
        (AnkleRight, &[FootRight]),
        (HipLeft, &[KneeLeft]),
        (KneeLeft, &[AnkleLeft]),
        (AnkleLeft, &[FootLeft]),
        (SpineMid, &[SpineShoulder]),
        (SpineShoulder, &[Neck, ShoulderRight, ShoulderLeft]),
        (Neck, &[Head]),
        (ShoulderRight, &[ElbowRight]),
        (ElbowRight, &[WristRight]),
        (WristRight, &[HandRight, ThumbRight]),
        (HandRight, &[HandTipRight]),
        (ShoulderLeft, &[ElbowLeft]),
        (ElbowLeft, &[WristLeft]),
        (WristLeft, &[HandLeft, ThumbLeft]),
        (HandLeft, &[HandTipLeft]),
    ]
};

/// Position of a bone in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoneId(pub usize);

impl BoneId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A parent -> child edge of the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bone {
    pub id: BoneId,
    pub parent: JointType,
    pub child: JointType,
}

/// Tree-like structure of joints
pub struct JointHierarchy {
    root: JointType,
    children: [Vec<JointType>; JOINT_COUNT],
    parents: [Option<JointType>; JOINT_COUNT],
    /// Bones in traversal order
    bones: Box<[Bone]>,
    /// Bone whose child is the joint at this index
    bone_of: [Option<BoneId>; JOINT_COUNT],
}

impl JointHierarchy {
    /// The body hierarchy, built once per process
    pub fn standard() -> &'static JointHierarchy {
        static HIERARCHY: OnceLock<JointHierarchy> = OnceLock::new();
        HIERARCHY.get_or_init(|| JointHierarchy::build(JointType::SpineBase, ADJACENCY))
    }

    fn build(root: JointType, adjacency: &[(JointType, &[JointType])]) -> Self {
        let mut children: [Vec<JointType>; JOINT_COUNT] = std::array::from_fn(|_| Vec::new());
        let mut parents = [None; JOINT_COUNT];

        for (parent, kids) in adjacency {
            for &child in kids.iter() {
                debug_assert!(parents[child.index()].is_none(), "{child} has two parents");
                parents[child.index()] = Some(*parent);
                children[parent.index()].push(child);
            }
        }

        let mut hierarchy = JointHierarchy {
            root,
            children,
            parents,
            bones: Box::new([]),
            bone_of: [None; JOINT_COUNT],
        };

        let bones: Box<[Bone]> = hierarchy
            .traverse()
            .enumerate()
            .map(|(i, (parent, child))| Bone {
                id: BoneId(i),
                parent,
                child,
            })
            .collect();
        for bone in bones.iter() {
            hierarchy.bone_of[bone.child.index()] = Some(bone.id);
        }
        hierarchy.bones = bones;
        hierarchy
    }

    pub fn root(&self) -> JointType {
        self.root
    }

    /// Walk every (parent, child) edge depth-first.
    ///
    /// Each call starts a fresh walk; the order never changes.
    pub fn traverse(&self) -> Traverse<'_> {
        let mut stack = Vec::with_capacity(JOINT_COUNT);
        stack.extend(self.children[self.root.index()].iter().rev().copied());
        Traverse {
            hierarchy: self,
            stack,
        }
    }

    /// Bones in traversal order
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bone(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id.index())
    }

    /// The bone ending at `joint`. `None` for the root.
    pub fn bone_to(&self, joint: JointType) -> Option<BoneId> {
        self.bone_of[joint.index()]
    }

    pub fn parent(&self, joint: JointType) -> Option<JointType> {
        self.parents[joint.index()]
    }

    pub fn children(&self, joint: JointType) -> &[JointType] {
        &self.children[joint.index()]
    }
}

/// Depth-first walk over a `JointHierarchy`
pub struct Traverse<'a> {
    hierarchy: &'a JointHierarchy,
    /// Joints still to visit; the next one is on top
    stack: Vec<JointType>,
}

impl Iterator for Traverse<'_> {
    type Item = (JointType, JointType);

    fn next(&mut self) -> Option<Self::Item> {
        let child = self.stack.pop()?;
        let parent = self.hierarchy.parents[child.index()]?;
        self.stack
            .extend(self.hierarchy.children[child.index()].iter().rev().copied());
        Some((parent, child))
    }
}
