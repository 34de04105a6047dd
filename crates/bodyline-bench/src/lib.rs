//! Fixtures shared by the Bodyline benchmarks

use bodyline_core::{EulerAngles, JointAngles, JointType, Point2, Quaternion, TrackingState, JOINT_COUNT};

/// Joint pixels fanned out around (500, 500), all tracked
pub fn observed_frame() -> ([Point2; JOINT_COUNT], [TrackingState; JOINT_COUNT]) {
    let points = std::array::from_fn(|i| {
        let a = i as f32 * 0.25;
        Point2::new(500.0 + 40.0 * a.cos() * i as f32, 500.0 + 40.0 * a.sin() * i as f32)
    });
    (points, [TrackingState::Tracked; JOINT_COUNT])
}

/// Same frame with every third joint dropped and every fifth inferred
pub fn occluded_frame() -> ([Point2; JOINT_COUNT], [TrackingState; JOINT_COUNT]) {
    let (points, _) = observed_frame();
    let states = std::array::from_fn(|i| match i {
        i if i % 3 == 0 => TrackingState::NotTracked,
        i if i % 5 == 0 => TrackingState::Inferred,
        _ => TrackingState::Tracked,
    });
    (points, states)
}

/// Distinct non-trivial orientation for every joint
pub fn orientations() -> [Quaternion; JOINT_COUNT] {
    std::array::from_fn(|i| {
        let t = i as f32 * 0.1;
        Quaternion::new(t.sin() * 0.3, t.cos() * 0.2, 0.1, 1.0).normalize()
    })
}

/// Angles in radians with a mild bend at every joint
pub fn bent_angles() -> JointAngles {
    let mut angles = JointAngles::zeroed();
    for joint in JointType::ALL {
        let t = joint.index() as f32 * 0.05;
        angles[joint] = EulerAngles::new(t, -t, 0.0);
    }
    angles
}
