//! Bodyline Record - Session angle logs
//!
//! A session log is one text file per recording session, named by the
//! session's start time in fractional unix seconds. Every recorded frame
//! appends one line:
//!
//! ```text
//! (pitch,yaw,roll);(pitch,yaw,roll);...;(pitch,yaw,roll)\n
//! ```
//!
//! with 25 fields in joint order, angles in degrees. No header, no escaping.

pub mod format;
pub mod reader;
pub mod session;

pub use format::*;
pub use reader::*;
pub use session::*;
