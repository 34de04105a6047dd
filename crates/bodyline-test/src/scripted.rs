//! Scripted body source for driving a `BodyStream` without a device

use std::collections::VecDeque;

use bodyline_core::{Point2, JOINT_COUNT};
use bodyline_runtime::{BodyFrame, BodySource, ColorFrame, ColorFrameDesc, JointSample};

/// Pinhole projection from camera space to color pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinholeProjection {
    pub focal: f32,
    pub cx: f32,
    pub cy: f32,
}

impl Default for PinholeProjection {
    fn default() -> Self {
        // Roughly a 1080p color camera
        PinholeProjection {
            focal: 1050.0,
            cx: 960.0,
            cy: 540.0,
        }
    }
}

impl PinholeProjection {
    /// Joints at or behind the camera plane map to negative infinity,
    /// as the device runtime reports them.
    pub fn project(&self, joint: &JointSample) -> Point2 {
        let p = joint.position;
        if p.z <= 0.0 {
            return Point2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        }
        Point2::new(self.cx + self.focal * p.x / p.z, self.cy - self.focal * p.y / p.z)
    }
}

/// Replays queued frames in order.
///
/// `has_new_*` reports whether a queued frame is waiting; `last_*` consumes
/// it, or returns the previously consumed frame again once the queue is
/// empty, mirroring a device that always holds its latest frame.
pub struct ScriptedSource {
    desc: ColorFrameDesc,
    projection: PinholeProjection,
    body_frames: VecDeque<BodyFrame>,
    color_frames: VecDeque<ColorFrame>,
    last_body: Option<BodyFrame>,
    last_color: Option<ColorFrame>,
    closed: bool,
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new(PinholeProjection::default())
    }
}

impl ScriptedSource {
    pub fn new(projection: PinholeProjection) -> Self {
        ScriptedSource {
            desc: ColorFrameDesc {
                width: 1920,
                height: 1080,
                bytes_per_pixel: 4,
            },
            projection,
            body_frames: VecDeque::new(),
            color_frames: VecDeque::new(),
            last_body: None,
            last_color: None,
            closed: false,
        }
    }

    pub fn with_body_frames(mut self, frames: impl IntoIterator<Item = BodyFrame>) -> Self {
        self.body_frames.extend(frames);
        self
    }

    pub fn push_body_frame(&mut self, frame: BodyFrame) {
        self.body_frames.push_back(frame);
    }

    /// Queue a blank color frame of the source's size
    pub fn push_blank_color_frame(&mut self) {
        let data = vec![0; self.desc.frame_len()];
        self.color_frames.push_back(ColorFrame {
            desc: self.desc,
            data,
        });
    }

    pub fn pending_body_frames(&self) -> usize {
        self.body_frames.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl BodySource for ScriptedSource {
    fn color_frame_desc(&self) -> ColorFrameDesc {
        self.desc
    }

    fn has_new_color_frame(&mut self) -> bool {
        !self.color_frames.is_empty()
    }

    fn last_color_frame(&mut self) -> Option<ColorFrame> {
        if let Some(frame) = self.color_frames.pop_front() {
            self.last_color = Some(frame);
        }
        self.last_color.clone()
    }

    fn has_new_body_frame(&mut self) -> bool {
        !self.body_frames.is_empty()
    }

    fn last_body_frame(&mut self) -> Option<BodyFrame> {
        if let Some(frame) = self.body_frames.pop_front() {
            self.last_body = Some(frame);
        }
        self.last_body.clone()
    }

    fn body_joints_to_color_space(&self, joints: &[JointSample; JOINT_COUNT]) -> [Point2; JOINT_COUNT] {
        joints.map(|j| self.projection.project(&j))
    }

    fn close(&mut self) {
        self.closed = true;
        self.body_frames.clear();
        self.color_frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodyline_core::{Position3D, TrackingState};
    use bodyline_runtime::Body;

    #[test]
    fn test_projection() {
        let proj = PinholeProjection {
            focal: 100.0,
            cx: 50.0,
            cy: 50.0,
        };
        let joint = JointSample::new(Position3D::new(1.0, 1.0, 2.0), TrackingState::Tracked);
        assert_eq!(proj.project(&joint), Point2::new(100.0, 0.0));

        let behind = JointSample::new(Position3D::new(1.0, 1.0, 0.0), TrackingState::Tracked);
        assert!(!proj.project(&behind).is_finite());
    }

    #[test]
    fn test_latest_frame_is_held() {
        let mut body = Body::untracked();
        body.tracked = true;
        let mut source = ScriptedSource::default().with_body_frames([BodyFrame {
            bodies: vec![body],
        }]);

        assert!(source.last_body_frame().is_some());
        assert!(!source.has_new_body_frame());
        // The device keeps handing out its latest frame
        assert!(source.last_body_frame().is_some());
    }

    #[test]
    fn test_color_frames() {
        let mut source = ScriptedSource::default();
        assert!(source.last_color_frame().is_none());
        source.push_blank_color_frame();
        assert!(source.has_new_color_frame());
        let frame = source.last_color_frame().unwrap();
        assert_eq!(frame.data.len(), frame.desc.frame_len());
        assert!(!source.has_new_color_frame());
    }

    #[test]
    fn test_close() {
        let mut source = ScriptedSource::default().with_body_frames([BodyFrame::default()]);
        source.close();
        assert!(source.is_closed());
        assert_eq!(source.pending_body_frames(), 0);
    }
}
