//! Stream configuration

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bodyline_core::{BodylineError, BodylineResult, Point2};
use bodyline_skeleton::{DEFAULT_BONE_LENGTH, DEFAULT_PROJECTION_LENGTH};
use serde::{Deserialize, Serialize};

/// Body stream configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Where projected skeletons are anchored (SpineBase), in pixels
    pub root_point: Point2,
    /// Bone length before the first observed frame
    pub initial_bone_length: f32,
    /// Bone length used by `BodyStream::project_euler`
    pub projection_length: f32,
    /// Directory receiving session logs
    pub data_dir: PathBuf,
    /// Tracing filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            root_point: Point2::new(200.0, 100.0),
            initial_bone_length: DEFAULT_BONE_LENGTH,
            projection_length: DEFAULT_PROJECTION_LENGTH,
            data_dir: PathBuf::from("./data"),
            log_filter: "info".to_string(),
            json_logs: false,
        }
    }
}

impl StreamConfig {
    /// Load a JSON config file. A missing file yields the defaults; fields
    /// absent from the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> BodylineResult<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(BodylineError::Config(format!(
                    "{}: {}",
                    path.display(),
                    err
                )))
            }
        };
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> BodylineResult<Self> {
        serde_json::from_str(text).map_err(|err| BodylineError::Config(err.to_string()))
    }

    pub fn to_json(&self) -> BodylineResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| BodylineError::Config(err.to_string()))
    }
}
