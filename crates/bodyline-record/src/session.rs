//! Session recorder - append-only angle log

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bodyline_core::{BodylineResult, JointAngles};
use chrono::{DateTime, Utc};

use crate::serialize_angles;

/// Log file name for a session started at `started_at`: fractional unix
/// seconds with microsecond precision.
pub fn session_file_name(started_at: DateTime<Utc>) -> String {
    format!(
        "{}.{:06}",
        started_at.timestamp(),
        started_at.timestamp_subsec_micros()
    )
}

/// Appends one line per recorded frame to a session log.
///
/// Every frame is flushed before `record` returns, so a failed write is
/// reported on the frame that caused it.
pub struct SessionRecorder {
    path: PathBuf,
    writer: BufWriter<File>,
    frames: u64,
}

impl SessionRecorder {
    /// Start a session log in `dir`, named by the current time
    pub fn create(dir: impl AsRef<Path>) -> BodylineResult<Self> {
        Self::create_at(dir, Utc::now())
    }

    /// Start a session log in `dir`, named by `started_at`
    pub fn create_at(dir: impl AsRef<Path>, started_at: DateTime<Utc>) -> BodylineResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(session_file_name(started_at));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::info!(path = %path.display(), "session log opened");

        Ok(SessionRecorder {
            path,
            writer: BufWriter::new(file),
            frames: 0,
        })
    }

    /// Append one frame's joint angles (degrees)
    pub fn record(&mut self, angles: &JointAngles) -> BodylineResult<()> {
        self.writer.write_all(serialize_angles(angles).as_bytes())?;
        self.writer.flush()?;
        self.frames += 1;
        tracing::trace!(frame = self.frames, "frame recorded");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of frames recorded so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Flush and close the log, returning its path
    pub fn finish(mut self) -> BodylineResult<PathBuf> {
        self.writer.flush()?;
        tracing::info!(path = %self.path.display(), frames = self.frames, "session log closed");
        Ok(self.path)
    }
}
