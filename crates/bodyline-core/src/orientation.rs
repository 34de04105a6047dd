//! Joint orientation - quaternions and Euler angles
//!
//! The camera runtime reports each joint's rotation as a quaternion in the
//! parent joint's frame. Bodyline records and projects those rotations as
//! (pitch, yaw, roll) triples.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{JointType, JOINT_COUNT};

/// Joint rotation (quaternion representation, runtime component order)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation of `angle` radians about a unit `axis`
    pub fn from_axis_angle(axis: [f32; 3], angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(axis[0] * s, axis[1] * s, axis[2] * s, c)
    }

    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    pub fn normalize(&self) -> Quaternion {
        let len = self.norm_squared().sqrt();
        if len < 0.0001 {
            return Quaternion::identity();
        }
        Quaternion::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }
}

/// (pitch, yaw, roll) triple.
///
/// The unit depends on where the triple came from: `orientation_to_euler`
/// produces degrees, the projection routines consume radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl EulerAngles {
    pub const ZERO: EulerAngles = EulerAngles {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn to_radians(self) -> Self {
        Self::new(
            self.pitch.to_radians(),
            self.yaw.to_radians(),
            self.roll.to_radians(),
        )
    }

    pub fn to_degrees(self) -> Self {
        Self::new(
            self.pitch.to_degrees(),
            self.yaw.to_degrees(),
            self.roll.to_degrees(),
        )
    }
}

/// Convert a joint orientation to (pitch, yaw, roll) in degrees.
///
/// The asin argument is clamped to [-1, 1]. Quaternions that drift off unit
/// length near gimbal lock report yaw as +/-90 degrees instead of NaN.
pub fn orientation_to_euler(q: &Quaternion) -> EulerAngles {
    let Quaternion { x, y, z, w } = *q;

    let pitch = f32::atan2(2.0 * (y * z + w * x), w * w - x * x - y * y + z * z);

    let sin_yaw = 2.0 * (w * y - x * z);
    let clamped = sin_yaw.clamp(-1.0, 1.0);
    if clamped != sin_yaw {
        tracing::debug!(sin_yaw, "clamped orientation yaw to asin domain");
    }
    let yaw = clamped.asin();

    let roll = f32::atan2(2.0 * (x * y + w * z), w * w + x * x - y * y - z * z);

    EulerAngles::new(pitch, yaw, roll).to_degrees()
}

/// One angle triple per joint, indexed by `JointType`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles([EulerAngles; JOINT_COUNT]);

impl JointAngles {
    pub fn zeroed() -> Self {
        Self([EulerAngles::ZERO; JOINT_COUNT])
    }

    pub fn from_array(angles: [EulerAngles; JOINT_COUNT]) -> Self {
        Self(angles)
    }

    /// Euler angles in degrees for every joint orientation
    pub fn from_orientations(orientations: &[Quaternion; JOINT_COUNT]) -> Self {
        Self(orientations.map(|q| orientation_to_euler(&q)))
    }

    pub fn get(&self, joint: JointType) -> EulerAngles {
        self.0[joint.index()]
    }

    pub fn set(&mut self, joint: JointType, angles: EulerAngles) {
        self.0[joint.index()] = angles;
    }

    pub fn iter(&self) -> impl Iterator<Item = &EulerAngles> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[EulerAngles] {
        &self.0
    }

    pub fn to_radians(&self) -> Self {
        Self(self.0.map(EulerAngles::to_radians))
    }
}

impl Index<JointType> for JointAngles {
    type Output = EulerAngles;

    fn index(&self, joint: JointType) -> &EulerAngles {
        &self.0[joint.index()]
    }
}

impl IndexMut<JointType> for JointAngles {
    fn index_mut(&mut self, joint: JointType) -> &mut EulerAngles {
        &mut self.0[joint.index()]
    }
}
