//! Session log line format

use bodyline_core::{BodylineError, BodylineResult, EulerAngles, JointAngles, JOINT_COUNT};

/// Separator between joint fields
pub const FIELD_SEPARATOR: char = ';';

/// One newline-terminated log line for a frame's joint angles
pub fn serialize_angles(angles: &JointAngles) -> String {
    let mut line = String::with_capacity(JOINT_COUNT * 24);
    for (i, e) in angles.iter().enumerate() {
        if i > 0 {
            line.push(FIELD_SEPARATOR);
        }
        line.push_str(&format!("({},{},{})", e.pitch, e.yaw, e.roll));
    }
    line.push('\n');
    line
}

/// Parse one log line back into joint angles.
///
/// `line_no` is only used for error reporting. Whitespace around numbers is
/// tolerated.
pub fn parse_angles(line: &str, line_no: usize) -> BodylineResult<JointAngles> {
    let malformed = |reason: String| BodylineError::MalformedRecord {
        line: line_no,
        reason,
    };

    let line = line.trim_end_matches(['\n', '\r']);
    let mut angles = [EulerAngles::ZERO; JOINT_COUNT];
    let mut count = 0;

    for field in line.split(FIELD_SEPARATOR) {
        if count == JOINT_COUNT {
            return Err(malformed(format!("more than {JOINT_COUNT} fields")));
        }

        let inner = field
            .trim()
            .strip_prefix('(')
            .and_then(|f| f.strip_suffix(')'))
            .ok_or_else(|| malformed(format!("field {count} is not parenthesised: {field:?}")))?;

        let mut parts = inner.split(',');
        let mut component = |name: &str| -> BodylineResult<f32> {
            let raw = parts
                .next()
                .ok_or_else(|| malformed(format!("field {count} is missing {name}")))?;
            raw.trim()
                .parse::<f32>()
                .map_err(|e| malformed(format!("field {count} {name} {raw:?}: {e}")))
        };
        let pitch = component("pitch")?;
        let yaw = component("yaw")?;
        let roll = component("roll")?;
        if parts.next().is_some() {
            return Err(malformed(format!("field {count} has more than 3 angles")));
        }

        angles[count] = EulerAngles::new(pitch, yaw, roll);
        count += 1;
    }

    if count != JOINT_COUNT {
        return Err(malformed(format!("expected {JOINT_COUNT} fields, got {count}")));
    }

    Ok(JointAngles::from_array(angles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodyline_core::JointType;
    use proptest::prelude::*;

    #[test]
    fn test_zero_table() {
        let line = serialize_angles(&JointAngles::zeroed());
        assert!(line.ends_with('\n'));
        let body = line.trim_end_matches('\n');
        let fields: Vec<_> = body.split(';').collect();
        assert_eq!(fields.len(), JOINT_COUNT);
        assert!(fields.iter().all(|f| *f == "(0,0,0)"));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_fields_in_joint_order() {
        let mut angles = JointAngles::zeroed();
        angles[JointType::SpineBase] = EulerAngles::new(1.5, -2.0, 3.25);
        angles[JointType::ThumbRight] = EulerAngles::new(-90.0, 45.0, 0.5);

        let line = serialize_angles(&angles);
        assert!(line.starts_with("(1.5,-2,3.25);(0,0,0);"));
        assert!(line.ends_with(";(-90,45,0.5)\n"));
    }

    #[test]
    fn test_parse_recovers_values() {
        let mut angles = JointAngles::zeroed();
        angles[JointType::ElbowLeft] = EulerAngles::new(12.345678, -0.001, 179.99);
        angles[JointType::Head] = EulerAngles::new(-33.3, 66.6, -99.9);

        let parsed = parse_angles(&serialize_angles(&angles), 1).unwrap();
        assert_eq!(parsed, angles);
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        let line = vec!["(1.0, 2.0, 3.0)"; JOINT_COUNT].join(";");
        let parsed = parse_angles(&line, 1).unwrap();
        assert!(parsed.iter().all(|e| *e == EulerAngles::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let line = vec!["(0,0,0)"; JOINT_COUNT - 1].join(";");
        let err = parse_angles(&line, 7).unwrap_err();
        assert!(matches!(err, BodylineError::MalformedRecord { line: 7, .. }));
    }

    #[test]
    fn test_parse_rejects_long_line() {
        let line = vec!["(0,0,0)"; JOINT_COUNT + 1].join(";");
        assert!(parse_angles(&line, 1).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_fields() {
        let mut fields = vec!["(0,0,0)".to_string(); JOINT_COUNT];
        fields[3] = "(0,zero,0)".into();
        assert!(parse_angles(&fields.join(";"), 1).is_err());

        fields[3] = "0,0,0".into();
        assert!(parse_angles(&fields.join(";"), 1).is_err());

        fields[3] = "(0,0)".into();
        assert!(parse_angles(&fields.join(";"), 1).is_err());

        fields[3] = "(0,0,0,0)".into();
        assert!(parse_angles(&fields.join(";"), 1).is_err());
    }

    proptest! {
        #[test]
        fn prop_parse_never_panics(line in ".{0,400}") {
            if let Ok(angles) = parse_angles(&line, 1) {
                prop_assert_eq!(angles.iter().count(), JOINT_COUNT);
            }
        }

        #[test]
        fn prop_serialized_line_has_one_field_per_joint(
            values in prop::collection::vec(-360.0f32..360.0, JOINT_COUNT * 3),
        ) {
            let mut angles = JointAngles::zeroed();
            for (joint, v) in JointType::ALL.into_iter().zip(values.chunks(3)) {
                angles[joint] = EulerAngles::new(v[0], v[1], v[2]);
            }
            let line = serialize_angles(&angles);
            prop_assert_eq!(line.trim_end().split(FIELD_SEPARATOR).count(), JOINT_COUNT);
            prop_assert_eq!(parse_angles(&line, 1).unwrap(), angles);
        }
    }
}
