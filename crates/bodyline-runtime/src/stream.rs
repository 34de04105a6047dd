//! Body stream - drives skeleton geometry and recording from a source

use std::path::{Path, PathBuf};

use bodyline_core::{BodylineError, BodylineResult, EulerAngles, JointAngles, LineSegment, Point2};
use bodyline_record::SessionRecorder;
use bodyline_skeleton::{project_euler, BoneId, BoneLengths, SkeletonGeometry, SkeletonLines};

use crate::{Body, BodyFrame, BodySource, ColorFrame, ColorFrameDesc, StreamConfig};

#[derive(Clone, Debug, Default)]
pub struct StreamStats {
    /// New body frames received from the source
    pub body_frames: u64,
    pub bodies_drawn: u64,
    pub segments_drawn: u64,
    pub frames_recorded: u64,
}

/// One tracked body's view of a depth camera runtime
pub struct BodyStream<S: BodySource> {
    source: S,
    geometry: SkeletonGeometry,
    /// Open session log, if recording
    recorder: Option<SessionRecorder>,
    config: StreamConfig,
    stats: StreamStats,
}

impl<S: BodySource> BodyStream<S> {
    pub fn new(source: S, config: StreamConfig) -> Self {
        BodyStream {
            source,
            geometry: SkeletonGeometry::new(BoneLengths::uniform(config.initial_bone_length)),
            recorder: None,
            config,
            stats: StreamStats::default(),
        }
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn stats(&self) -> &StreamStats {
        &self.stats
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn geometry(&self) -> &SkeletonGeometry {
        &self.geometry
    }

    pub fn color_frame_desc(&self) -> ColorFrameDesc {
        self.source.color_frame_desc()
    }

    pub fn has_new_color_frame(&mut self) -> bool {
        self.source.has_new_color_frame()
    }

    pub fn last_color_frame(&mut self) -> Option<ColorFrame> {
        self.source.last_color_frame()
    }

    pub fn has_new_body_frame(&mut self) -> bool {
        self.source.has_new_body_frame()
    }

    /// Latest body frame. Re-fetching a held frame does not count as a new
    /// one in `StreamStats::body_frames`.
    pub fn last_body_frame(&mut self) -> Option<BodyFrame> {
        let fresh = self.source.has_new_body_frame();
        let frame = self.source.last_body_frame();
        if fresh && frame.is_some() {
            self.stats.body_frames += 1;
        }
        frame
    }

    /// The first tracked body of the latest body frame
    pub fn refresh_body(&mut self) -> Option<Body> {
        let frame = self.last_body_frame()?;
        frame.bodies.into_iter().find(|b| b.tracked)
    }

    /// Segments between the body's projected joints.
    ///
    /// Bones with an untracked end, or with both ends inferred, are left
    /// out. Every drawn bone also refreshes its stored length.
    pub fn draw_body(&mut self, body: &Body) -> Vec<LineSegment> {
        let points = self.source.body_joints_to_color_space(&body.joints);
        let segments = self.geometry.observe(&points, &body.tracking_states());
        self.stats.bodies_drawn += 1;
        self.stats.segments_drawn += segments.len() as u64;
        segments
    }

    /// Skeleton grown from the configured root using per-joint angles in
    /// radians and the current bone lengths
    pub fn traverse_body<'a>(&'a self, angles: &'a JointAngles) -> SkeletonLines<'a> {
        self.geometry
            .derive_skeleton_lines(self.config.root_point, angles)
    }

    pub fn bone_length(&self, bone: BoneId) -> f32 {
        self.geometry.bone_length(bone)
    }

    /// Offset `prev` by an angle triple in degrees, using the configured
    /// projection length
    pub fn project_euler(&self, prev: Point2, degrees: EulerAngles) -> Point2 {
        project_euler(prev, degrees, self.config.projection_length)
    }

    /// Start a new session log. An already open session is closed first.
    pub fn init_record(&mut self) -> BodylineResult<&Path> {
        self.stop_record()?;
        let recorder = SessionRecorder::create(&self.config.data_dir)?;
        Ok(self.recorder.insert(recorder).path())
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    /// Append the body's joint orientations to the session log
    pub fn record_frame(&mut self, body: &Body) -> BodylineResult<()> {
        let recorder = self
            .recorder
            .as_mut()
            .ok_or(BodylineError::RecordingNotStarted)?;
        recorder.record(&body.joint_angles())?;
        self.stats.frames_recorded += 1;
        Ok(())
    }

    /// Close the session log, returning its path if one was open
    pub fn stop_record(&mut self) -> BodylineResult<Option<PathBuf>> {
        self.recorder.take().map(SessionRecorder::finish).transpose()
    }

    /// Close any open session log and release the source
    pub fn close(&mut self) -> BodylineResult<Option<PathBuf>> {
        let session = self.stop_record();
        self.source.close();
        tracing::info!(
            body_frames = self.stats.body_frames,
            frames_recorded = self.stats.frames_recorded,
            "body stream closed"
        );
        session
    }
}
