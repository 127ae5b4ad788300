use crate::robocopy::robocopy_counts::RobocopyCounts;
use crate::robocopy::robocopy_times::RobocopyTimes;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;

/// Structured summary of one robocopy run, extracted from its log file.
///
/// Extraction is best-effort: `source`/`destination` stay empty when no header
/// line matched, and a counter section is `None` when its footer line is
/// absent or does not tokenize to the expected arity. Only path and IO
/// failures abort a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobocopySummary {
    pub source: String,
    pub destination: String,
    pub directories: Option<RobocopyCounts>,
    pub files: Option<RobocopyCounts>,
    pub times: Option<RobocopyTimes>,
}

impl Display for RobocopySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Source      : {}", self.source)?;
        writeln!(f, "Destination : {}", self.destination)?;
        match &self.directories {
            Some(counts) => writeln!(f, "Dirs        : {counts}")?,
            None => writeln!(f, "Dirs        : (not found)")?,
        }
        match &self.files {
            Some(counts) => writeln!(f, "Files       : {counts}")?,
            None => writeln!(f, "Files       : (not found)")?,
        }
        match &self.times {
            Some(times) => write!(f, "Times       : {times}"),
            None => write!(f, "Times       : (not found)"),
        }
    }
}
