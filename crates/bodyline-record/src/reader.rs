//! Session reader - replays a recorded angle log

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use bodyline_core::{BodylineResult, JointAngles};

use crate::parse_angles;

/// Iterates the frames of a session log, one `JointAngles` per line.
///
/// Blank lines are skipped. A malformed line yields an error but does not
/// end the iteration.
pub struct SessionReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl SessionReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> BodylineResult<Self> {
        let file = File::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "session log opened for replay");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> SessionReader<R> {
    pub fn new(reader: R) -> Self {
        SessionReader {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for SessionReader<R> {
    type Item = BodylineResult<JointAngles>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;
            match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(parse_angles(&line, self.line_no)),
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize_angles;
    use bodyline_core::{BodylineError, EulerAngles, JointType};
    use std::io::Cursor;

    #[test]
    fn test_replays_frames_in_order() {
        let mut a = JointAngles::zeroed();
        a[JointType::Neck] = EulerAngles::new(1.0, 2.0, 3.0);
        let b = JointAngles::zeroed();
        let log = format!("{}\n{}", serialize_angles(&a), serialize_angles(&b));

        let frames: Vec<_> = SessionReader::new(Cursor::new(log))
            .collect::<BodylineResult<_>>()
            .unwrap();
        assert_eq!(frames, vec![a, b]);
    }

    #[test]
    fn test_reports_line_of_bad_record() {
        let good = serialize_angles(&JointAngles::zeroed());
        let log = format!("{good}garbage\n{good}");

        let results: Vec<_> = SessionReader::new(Cursor::new(log)).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(BodylineError::MalformedRecord { line: 2, .. })
        ));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("bodyline-no-such-session-log");
        assert!(matches!(SessionReader::open(path), Err(BodylineError::Io(_))));
    }
}
