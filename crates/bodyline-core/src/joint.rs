//! Joint identifiers and tracking states
//!
//! Joint indices follow the depth camera runtime's enumeration, so a
//! `JointType` can index the per-joint arrays the runtime hands out
//! (positions, orientations, projected points) without translation.

use serde::{Deserialize, Serialize};

use crate::{BodylineError, BodylineResult};

/// Number of joints in a tracked body
pub const JOINT_COUNT: usize = 25;

/// Joint identifier for a tracked body skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum JointType {
    // Spine
    SpineBase = 0,
    SpineMid = 1,
    Neck = 2,
    Head = 3,

    // Left arm
    ShoulderLeft = 4,
    ElbowLeft = 5,
    WristLeft = 6,
    HandLeft = 7,

    // Right arm
    ShoulderRight = 8,
    ElbowRight = 9,
    WristRight = 10,
    HandRight = 11,

    // Left leg
    HipLeft = 12,
    KneeLeft = 13,
    AnkleLeft = 14,
    FootLeft = 15,

    // Right leg
    HipRight = 16,
    KneeRight = 17,
    AnkleRight = 18,
    FootRight = 19,

    SpineShoulder = 20,

    // Hand extremities
    HandTipLeft = 21,
    ThumbLeft = 22,
    HandTipRight = 23,
    ThumbRight = 24,
}

impl JointType {
    /// All joints in index order
    pub const ALL: [JointType; JOINT_COUNT] = [
        JointType::SpineBase,
        JointType::SpineMid,
        JointType::Neck,
        JointType::Head,
        JointType::ShoulderLeft,
        JointType::ElbowLeft,
        JointType::WristLeft,
        JointType::HandLeft,
        JointType::ShoulderRight,
        JointType::ElbowRight,
        JointType::WristRight,
        JointType::HandRight,
        JointType::HipLeft,
        JointType::KneeLeft,
        JointType::AnkleLeft,
        JointType::FootLeft,
        JointType::HipRight,
        JointType::KneeRight,
        JointType::AnkleRight,
        JointType::FootRight,
        JointType::SpineShoulder,
        JointType::HandTipLeft,
        JointType::ThumbLeft,
        JointType::HandTipRight,
        JointType::ThumbRight,
    ];

    /// Position of this joint in per-joint arrays
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            JointType::SpineBase => "SpineBase",
            JointType::SpineMid => "SpineMid",
            JointType::Neck => "Neck",
            JointType::Head => "Head",
            JointType::ShoulderLeft => "ShoulderLeft",
            JointType::ElbowLeft => "ElbowLeft",
            JointType::WristLeft => "WristLeft",
            JointType::HandLeft => "HandLeft",
            JointType::ShoulderRight => "ShoulderRight",
            JointType::ElbowRight => "ElbowRight",
            JointType::WristRight => "WristRight",
            JointType::HandRight => "HandRight",
            JointType::HipLeft => "HipLeft",
            JointType::KneeLeft => "KneeLeft",
            JointType::AnkleLeft => "AnkleLeft",
            JointType::FootLeft => "FootLeft",
            JointType::HipRight => "HipRight",
            JointType::KneeRight => "KneeRight",
            JointType::AnkleRight => "AnkleRight",
            JointType::FootRight => "FootRight",
            JointType::SpineShoulder => "SpineShoulder",
            JointType::HandTipLeft => "HandTipLeft",
            JointType::ThumbLeft => "ThumbLeft",
            JointType::HandTipRight => "HandTipRight",
            JointType::ThumbRight => "ThumbRight",
        }
    }
}

impl TryFrom<usize> for JointType {
    type Error = BodylineError;

    fn try_from(index: usize) -> BodylineResult<Self> {
        Self::from_index(index).ok_or(BodylineError::JointOutOfRange(index))
    }
}

impl std::fmt::Display for JointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How confidently the camera runtime located a joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TrackingState {
    #[default]
    NotTracked = 0,
    /// Position estimated from neighbouring joints
    Inferred = 1,
    Tracked = 2,
}

impl TrackingState {
    /// Decode the runtime's raw tracking state value.
    /// Unknown values are treated as not tracked.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => TrackingState::Inferred,
            2 => TrackingState::Tracked,
            _ => TrackingState::NotTracked,
        }
    }

    #[inline]
    pub fn is_tracked(self) -> bool {
        self != TrackingState::NotTracked
    }
}
