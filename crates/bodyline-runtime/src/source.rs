//! Depth camera runtime boundary
//!
//! Frame acquisition, body detection, joint tracking and color-space
//! mapping all happen behind `BodySource`. Bodyline only consumes their
//! results.

use bodyline_core::{JointAngles, Point2, Position3D, Quaternion, TrackingState, JOINT_COUNT};

/// Shape of the color stream's frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFrameDesc {
    pub width: u32,
    pub height: u32,
    pub bytes_per_pixel: u32,
}

impl ColorFrameDesc {
    /// Bytes in one frame
    pub fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * self.bytes_per_pixel as usize
    }
}

/// Raw color frame, row-major pixels
#[derive(Debug, Clone)]
pub struct ColorFrame {
    pub desc: ColorFrameDesc,
    pub data: Vec<u8>,
}

/// One joint as reported by the runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct JointSample {
    pub position: Position3D,
    pub tracking_state: TrackingState,
}

impl JointSample {
    pub fn new(position: Position3D, tracking_state: TrackingState) -> Self {
        Self {
            position,
            tracking_state,
        }
    }
}

/// A body slot of a body frame
#[derive(Debug, Clone)]
pub struct Body {
    /// Is a person occupying this slot?
    pub tracked: bool,
    pub joints: [JointSample; JOINT_COUNT],
    /// Per-joint rotation relative to the parent joint
    pub orientations: [Quaternion; JOINT_COUNT],
}

impl Body {
    /// Empty body slot
    pub fn untracked() -> Self {
        Self {
            tracked: false,
            joints: [JointSample::default(); JOINT_COUNT],
            orientations: [Quaternion::identity(); JOINT_COUNT],
        }
    }

    pub fn tracking_states(&self) -> [TrackingState; JOINT_COUNT] {
        self.joints.map(|j| j.tracking_state)
    }

    /// Joint orientations as Euler angles in degrees
    pub fn joint_angles(&self) -> JointAngles {
        JointAngles::from_orientations(&self.orientations)
    }
}

/// All body slots captured at one instant
#[derive(Debug, Clone, Default)]
pub struct BodyFrame {
    pub bodies: Vec<Body>,
}

impl BodyFrame {
    pub fn first_tracked(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.tracked)
    }
}

/// A depth camera runtime producing color and body frames
pub trait BodySource {
    fn color_frame_desc(&self) -> ColorFrameDesc;

    fn has_new_color_frame(&mut self) -> bool;

    /// Most recent color frame, if one has ever arrived
    fn last_color_frame(&mut self) -> Option<ColorFrame>;

    fn has_new_body_frame(&mut self) -> bool;

    /// Most recent body frame, if one has ever arrived
    fn last_body_frame(&mut self) -> Option<BodyFrame>;

    /// Map each joint's camera-space position to color-image pixels
    fn body_joints_to_color_space(&self, joints: &[JointSample; JOINT_COUNT]) -> [Point2; JOINT_COUNT];

    /// Release the device
    fn close(&mut self);
}
