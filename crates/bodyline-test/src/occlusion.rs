//! Seeded pose generation with occlusion and jitter
//!
//! Simulates what a depth camera hands out for a person standing in front
//! of it:
//! - Joints dropping out (not tracked)
//! - Joints guessed from neighbours (inferred)
//! - Positional jitter
//! - Orientation noise

use bodyline_core::{JointType, Position3D, Quaternion, TrackingState, JOINT_COUNT};
use bodyline_runtime::{Body, BodyFrame, JointSample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Standing pose in camera space (meters), indexed by joint
const REST_POSE: [(f32, f32, f32); JOINT_COUNT] = [
    (0.0, 0.0, 2.0),     // SpineBase
    (0.0, 0.3, 2.0),     // SpineMid
    (0.0, 0.6, 2.0),     // Neck
    (0.0, 0.75, 2.0),    // Head
    (-0.2, 0.5, 2.0),    // ShoulderLeft
    (-0.45, 0.5, 2.0),   // ElbowLeft
    (-0.7, 0.5, 2.0),    // WristLeft
    (-0.78, 0.5, 2.0),   // HandLeft
    (0.2, 0.5, 2.0),     // ShoulderRight
    (0.45, 0.5, 2.0),    // ElbowRight
    (0.7, 0.5, 2.0),     // WristRight
    (0.78, 0.5, 2.0),    // HandRight
    (-0.1, -0.05, 2.0),  // HipLeft
    (-0.1, -0.5, 2.0),   // KneeLeft
    (-0.1, -0.9, 2.0),   // AnkleLeft
    (-0.1, -0.95, 1.9),  // FootLeft
    (0.1, -0.05, 2.0),   // HipRight
    (0.1, -0.5, 2.0),    // KneeRight
    (0.1, -0.9, 2.0),    // AnkleRight
    (0.1, -0.95, 1.9),   // FootRight
    (0.0, 0.5, 2.0),     // SpineShoulder
    (-0.85, 0.5, 2.0),   // HandTipLeft
    (-0.78, 0.55, 2.0),  // ThumbLeft
    (0.85, 0.5, 2.0),    // HandTipRight
    (0.78, 0.55, 2.0),   // ThumbRight
];

/// Tracking-quality configuration
#[derive(Clone, Debug)]
pub struct OcclusionConfig {
    /// Probability a joint is not tracked (0.0 - 1.0)
    pub not_tracked_prob: f64,
    /// Probability a tracked joint is only inferred (0.0 - 1.0)
    pub inferred_prob: f64,
    /// Maximum positional jitter per axis, meters
    pub jitter_m: f32,
    /// Maximum orientation noise per quaternion component before normalisation
    pub orientation_noise: f32,
    /// Probability the body is missing from a frame entirely
    pub dropout_prob: f64,
}

impl Default for OcclusionConfig {
    fn default() -> Self {
        OcclusionConfig {
            not_tracked_prob: 0.02,
            inferred_prob: 0.05,
            jitter_m: 0.01,
            orientation_noise: 0.05,
            dropout_prob: 0.01,
        }
    }
}

impl OcclusionConfig {
    /// Every joint tracked, no noise
    pub fn perfect() -> Self {
        OcclusionConfig {
            not_tracked_prob: 0.0,
            inferred_prob: 0.0,
            jitter_m: 0.0,
            orientation_noise: 0.0,
            dropout_prob: 0.0,
        }
    }

    /// Person close to the camera, good lighting
    pub fn good() -> Self {
        OcclusionConfig {
            not_tracked_prob: 0.005,
            inferred_prob: 0.02,
            jitter_m: 0.005,
            orientation_noise: 0.02,
            dropout_prob: 0.0,
        }
    }

    /// Partially occluded person, furniture in the way
    pub fn poor() -> Self {
        OcclusionConfig {
            not_tracked_prob: 0.1,
            inferred_prob: 0.2,
            jitter_m: 0.03,
            orientation_noise: 0.15,
            dropout_prob: 0.05,
        }
    }

    /// Edge of the field of view, constant dropouts
    pub fn hostile() -> Self {
        OcclusionConfig {
            not_tracked_prob: 0.35,
            inferred_prob: 0.4,
            jitter_m: 0.08,
            orientation_noise: 0.5,
            dropout_prob: 0.2,
        }
    }
}

/// Produces noisy body frames from a fixed seed
pub struct PoseGenerator {
    config: OcclusionConfig,
    rng: StdRng,
    frames: u64,
}

impl PoseGenerator {
    pub fn new(config: OcclusionConfig) -> Self {
        Self::with_seed(config, 0)
    }

    pub fn with_seed(config: OcclusionConfig, seed: u64) -> Self {
        PoseGenerator {
            config,
            rng: StdRng::seed_from_u64(seed),
            frames: 0,
        }
    }

    /// The noiseless standing pose, every joint tracked
    pub fn rest_body() -> Body {
        let mut body = Body::untracked();
        body.tracked = true;
        for joint in JointType::ALL {
            let (x, y, z) = REST_POSE[joint.index()];
            body.joints[joint.index()] =
                JointSample::new(Position3D::new(x, y, z), TrackingState::Tracked);
        }
        body
    }

    pub fn frames_generated(&self) -> u64 {
        self.frames
    }

    fn noise(&mut self, amplitude: f32) -> f32 {
        if amplitude > 0.0 {
            self.rng.gen_range(-amplitude..amplitude)
        } else {
            0.0
        }
    }

    /// One body with this generator's occlusion and noise applied
    pub fn next_body(&mut self) -> Body {
        let mut body = Self::rest_body();

        for i in 0..JOINT_COUNT {
            let state = if self.rng.gen_bool(self.config.not_tracked_prob) {
                TrackingState::NotTracked
            } else if self.rng.gen_bool(self.config.inferred_prob) {
                TrackingState::Inferred
            } else {
                TrackingState::Tracked
            };

            let jitter = self.config.jitter_m;
            let rest = body.joints[i].position;
            let position = Position3D::new(
                rest.x + self.noise(jitter),
                rest.y + self.noise(jitter),
                rest.z + self.noise(jitter),
            );
            body.joints[i] = JointSample::new(position, state);

            let n = self.config.orientation_noise;
            body.orientations[i] =
                Quaternion::new(self.noise(n), self.noise(n), self.noise(n), 1.0).normalize();
        }

        body
    }

    /// One frame holding a single body slot, empty on dropout
    pub fn next_frame(&mut self) -> BodyFrame {
        self.frames += 1;
        let body = if self.rng.gen_bool(self.config.dropout_prob) {
            Body::untracked()
        } else {
            self.next_body()
        };
        BodyFrame { bodies: vec![body] }
    }
}
