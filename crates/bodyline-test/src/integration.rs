//! End-to-end pipeline tests
//!
//! Scripted source -> body stream -> session log -> replay.

use std::path::PathBuf;

use bodyline_runtime::{BodyFrame, BodyStream, StreamConfig};

use crate::{PinholeProjection, ScriptedSource};

/// A body stream over scripted frames, writing session logs to `data_dir`
pub fn scripted_stream(frames: Vec<BodyFrame>, data_dir: PathBuf) -> BodyStream<ScriptedSource> {
    let source = ScriptedSource::new(PinholeProjection::default()).with_body_frames(frames);
    let config = StreamConfig {
        data_dir,
        ..StreamConfig::default()
    };
    BodyStream::new(source, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    use bodyline_core::{JointAngles, JointType, Point2, TrackingState};
    use bodyline_record::SessionReader;
    use bodyline_runtime::{Body, BodySource};
    use bodyline_skeleton::{bone_observable, BoneId, JointHierarchy, BONE_COUNT};

    use crate::{OcclusionConfig, PoseGenerator};

    fn scratch_dir() -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("bodyline-pipeline-{}-{}", std::process::id(), n))
    }

    fn bone(joint: JointType) -> BoneId {
        JointHierarchy::standard()
            .bone_to(joint)
            .expect("non-root joint has a bone")
    }

    #[test]
    fn test_observed_frame_measures_bones() {
        let frame = BodyFrame {
            bodies: vec![PoseGenerator::rest_body()],
        };
        let mut stream = scripted_stream(vec![frame], scratch_dir());

        assert!(stream.has_new_body_frame());
        let body = stream.refresh_body().expect("tracked body");
        let segments = stream.draw_body(&body);
        assert_eq!(segments.len(), BONE_COUNT);

        // SpineBase (0, 0, 2) -> SpineMid (0, 0.3, 2): 1050 * 0.3 / 2 pixels
        let spine = stream.bone_length(bone(JointType::SpineMid));
        assert!((spine - 157.5).abs() < 1e-2, "spine length {spine}");

        let points = stream.source().body_joints_to_color_space(&body.joints);
        for (segment, b) in segments.iter().zip(JointHierarchy::standard().bones()) {
            assert_eq!(segment.start, points[b.parent.index()]);
            assert_eq!(segment.end, points[b.child.index()]);
            assert!((stream.bone_length(b.id) - segment.length()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_occluded_bone_keeps_last_length() {
        let rest = PoseGenerator::rest_body();
        let mut occluded = rest.clone();
        occluded.joints[JointType::Head.index()].tracking_state = TrackingState::NotTracked;
        occluded.joints[JointType::Head.index()].position.y += 1.0;

        let frames = vec![
            BodyFrame { bodies: vec![rest] },
            BodyFrame {
                bodies: vec![occluded],
            },
        ];
        let mut stream = scripted_stream(frames, scratch_dir());

        let body = stream.refresh_body().unwrap();
        stream.draw_body(&body);
        let before = stream.bone_length(bone(JointType::Head));

        let body = stream.refresh_body().unwrap();
        let segments = stream.draw_body(&body);
        assert_eq!(segments.len(), BONE_COUNT - 1);
        assert_eq!(stream.bone_length(bone(JointType::Head)), before);
    }

    #[test]
    fn test_untracked_slot_is_skipped() {
        let mut generator = PoseGenerator::new(OcclusionConfig::perfect());
        let frame = BodyFrame {
            bodies: vec![Body::untracked(), generator.next_body()],
        };
        let mut stream = scripted_stream(vec![frame, BodyFrame::default()], scratch_dir());

        assert!(stream.refresh_body().is_some());
        // An empty frame has no tracked body
        assert!(stream.refresh_body().is_none());
        assert_eq!(stream.stats().body_frames, 2);
    }

    #[test]
    fn test_recorded_session_replays() {
        let dir = scratch_dir();
        let mut generator = PoseGenerator::with_seed(OcclusionConfig::good(), 11);
        let frames: Vec<_> = (0..10).map(|_| generator.next_frame()).collect();
        let mut stream = scripted_stream(frames, dir.clone());

        let log_path = stream.init_record().unwrap().to_path_buf();
        assert!(log_path.starts_with(&dir));
        assert!(stream.is_recording());

        let mut recorded = Vec::new();
        while stream.has_new_body_frame() {
            let Some(body) = stream.refresh_body() else {
                continue;
            };
            stream.draw_body(&body);
            stream.record_frame(&body).unwrap();
            recorded.push(body.joint_angles());
        }

        let closed = stream.close().unwrap();
        assert_eq!(closed.as_deref(), Some(log_path.as_path()));
        assert!(stream.source().is_closed());
        assert_eq!(stream.stats().frames_recorded, recorded.len() as u64);

        let replayed: Vec<JointAngles> = SessionReader::open(&log_path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(replayed, recorded);

        // Recorded angles are degrees; projection wants radians
        for angles in &replayed {
            let radians = angles.to_radians();
            let lines: Vec<_> = stream.traverse_body(&radians).collect();
            assert_eq!(lines.len(), BONE_COUNT);
            assert!(lines.iter().all(|l| l.start.is_finite() && l.end.is_finite()));
            assert_eq!(lines[0].start, stream.config().root_point);
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_restarting_record_opens_new_session() {
        let dir = scratch_dir();
        let frames = vec![BodyFrame {
            bodies: vec![PoseGenerator::rest_body()],
        }];
        let mut stream = scripted_stream(frames, dir.clone());
        let body = stream.refresh_body().unwrap();

        let first = stream.init_record().unwrap().to_path_buf();
        stream.record_frame(&body).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = stream.init_record().unwrap().to_path_buf();
        stream.record_frame(&body).unwrap();
        stream.stop_record().unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(&first).unwrap().lines().count(), 1);
        assert_eq!(fs::read_to_string(&second).unwrap().lines().count(), 1);
        assert!(!stream.is_recording());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_hostile_tracking_never_draws_rejected_bones() {
        let mut generator = PoseGenerator::with_seed(OcclusionConfig::hostile(), 99);
        let frames: Vec<_> = (0..200).map(|_| generator.next_frame()).collect();
        let mut stream = scripted_stream(frames, scratch_dir());
        let hierarchy = JointHierarchy::standard();

        while stream.has_new_body_frame() {
            let Some(body) = stream.refresh_body() else {
                continue;
            };
            let states = body.tracking_states();
            let points = stream.source().body_joints_to_color_space(&body.joints);
            let expected: Vec<_> = hierarchy
                .bones()
                .iter()
                .filter(|b| {
                    bone_observable(states[b.parent.index()], states[b.child.index()])
                        && points[b.parent.index()].is_finite()
                        && points[b.child.index()].is_finite()
                })
                .map(|b| (points[b.parent.index()], points[b.child.index()]))
                .collect();

            let drawn: Vec<(Point2, Point2)> = stream
                .draw_body(&body)
                .iter()
                .map(|s| (s.start, s.end))
                .collect();
            assert_eq!(drawn, expected);

            for b in hierarchy.bones() {
                let length = stream.bone_length(b.id);
                assert!(length.is_finite() && length >= 0.0);
            }
        }
    }

    #[test]
    fn test_joint_at_camera_plane_keeps_length() {
        let mut body = PoseGenerator::rest_body();
        for joint in [JointType::HandLeft, JointType::HandTipLeft] {
            body.joints[joint.index()].position.z = 0.0;
        }
        body.joints[JointType::HandTipLeft.index()].tracking_state = TrackingState::Inferred;
        let mut stream = scripted_stream(vec![BodyFrame { bodies: vec![body] }], scratch_dir());

        let body = stream.refresh_body().unwrap();
        let segments = stream.draw_body(&body);

        assert_eq!(segments.len(), BONE_COUNT - 2);
        for joint in [JointType::HandLeft, JointType::HandTipLeft] {
            assert_eq!(stream.bone_length(bone(joint)), 100.0);
        }
        let angles = body.joint_angles().to_radians();
        assert!(stream
            .traverse_body(&angles)
            .all(|l| l.start.is_finite() && l.end.is_finite()));
    }

    #[test]
    fn test_held_frame_is_not_counted_again() {
        let frame = BodyFrame {
            bodies: vec![PoseGenerator::rest_body()],
        };
        let mut stream = scripted_stream(vec![frame], scratch_dir());

        assert!(stream.refresh_body().is_some());
        // No new frame: the source hands out the one it holds
        assert!(!stream.has_new_body_frame());
        assert!(stream.refresh_body().is_some());
        assert_eq!(stream.stats().body_frames, 1);
    }
}
